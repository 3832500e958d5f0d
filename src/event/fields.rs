//! Event field definitions
//!
//! `EventFields` holds the eight plain-text attributes of an event. Values are
//! never validated; an empty string is a legitimate value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of one event attribute
///
/// The snake_case key is what the model is asked to use in its JSON
/// suggestion block, so it must stay in sync with the `EventFields` field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    Title,
    DateTime,
    Street,
    City,
    State,
    ZipCode,
    Country,
    Description,
}

impl FieldName {
    /// All fields in form order
    pub const ALL: [FieldName; 8] = [
        FieldName::Title,
        FieldName::DateTime,
        FieldName::Street,
        FieldName::City,
        FieldName::State,
        FieldName::ZipCode,
        FieldName::Country,
        FieldName::Description,
    ];

    /// The JSON key for this field
    pub fn key(&self) -> &'static str {
        match self {
            FieldName::Title => "title",
            FieldName::DateTime => "date_time",
            FieldName::Street => "street",
            FieldName::City => "city",
            FieldName::State => "state",
            FieldName::ZipCode => "zip_code",
            FieldName::Country => "country",
            FieldName::Description => "description",
        }
    }

    /// Human readable label shown in the form
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::Title => "Event Title",
            FieldName::DateTime => "Date & Time",
            FieldName::Street => "Street Address",
            FieldName::City => "City",
            FieldName::State => "State",
            FieldName::ZipCode => "ZIP Code",
            FieldName::Country => "Country",
            FieldName::Description => "Description",
        }
    }

    /// Position in form order
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Parse a JSON key; exact match only
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Whether the form input for this field accepts several lines
    pub fn is_multiline(&self) -> bool {
        matches!(self, FieldName::Description)
    }

    /// Comma separated key list, used in the suggestion instruction
    pub fn key_list() -> String {
        Self::ALL
            .iter()
            .map(|field| field.key())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Structured event details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventFields {
    pub title: String,
    pub date_time: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub description: String,
}

impl EventFields {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Title => &self.title,
            FieldName::DateTime => &self.date_time,
            FieldName::Street => &self.street,
            FieldName::City => &self.city,
            FieldName::State => &self.state,
            FieldName::ZipCode => &self.zip_code,
            FieldName::Country => &self.country,
            FieldName::Description => &self.description,
        }
    }

    pub fn get_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::Title => &mut self.title,
            FieldName::DateTime => &mut self.date_time,
            FieldName::Street => &mut self.street,
            FieldName::City => &mut self.city,
            FieldName::State => &mut self.state,
            FieldName::ZipCode => &mut self.zip_code,
            FieldName::Country => &mut self.country,
            FieldName::Description => &mut self.description,
        }
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    /// Borrow the address portion of the event
    pub fn address(&self) -> Address<'_> {
        Address {
            street: &self.street,
            city: &self.city,
            state: &self.state,
            zip_code: &self.zip_code,
            country: &self.country,
        }
    }
}

/// Address components of an event, rendered on one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address<'a> {
    pub street: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub zip_code: &'a str,
    pub country: &'a str,
}

impl fmt::Display for Address<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {} {}, {}",
            self.street, self.city, self.state, self.zip_code, self.country
        )
    }
}

#[cfg(test)]
#[path = "fields_tests.rs"]
mod fields_tests;
