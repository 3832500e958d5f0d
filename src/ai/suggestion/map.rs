//! Suggestion map
//!
//! The model's proposed partial update to the event fields. Keys are kept
//! exactly as the model wrote them; only the eight field keys ever take effect.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::event::FieldName;

/// Model-proposed edits, pending user approval
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SuggestionMap(Map<String, Value>);

/// One row of a suggestion map, classified for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionEntry {
    /// A recognized field with a usable new value
    Change { field: FieldName, value: String },
    /// A recognized field the model explicitly left alone (null, list or object)
    Unchanged { field: FieldName },
    /// A key that is not an event field
    Ignored { key: String },
}

impl SuggestionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// The new text for `field`, if the model proposed one
    ///
    /// `null` and absence both mean "leave unchanged". Strings are taken
    /// verbatim, numbers and booleans use their JSON text, and nested
    /// values are inert.
    pub fn proposed(&self, field: FieldName) -> Option<String> {
        match self.0.get(field.key())? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Whether the map proposes a value for at least one field
    pub fn has_changes(&self) -> bool {
        FieldName::ALL
            .iter()
            .any(|field| self.proposed(*field).is_some())
    }

    /// Classify every key for display, field keys in form order first
    pub fn entries(&self) -> Vec<SuggestionEntry> {
        let mut entries = Vec::with_capacity(self.0.len());

        for field in FieldName::ALL {
            if !self.0.contains_key(field.key()) {
                continue;
            }
            match self.proposed(field) {
                Some(value) => entries.push(SuggestionEntry::Change { field, value }),
                None => entries.push(SuggestionEntry::Unchanged { field }),
            }
        }

        for key in self.0.keys() {
            if FieldName::from_key(key).is_none() {
                entries.push(SuggestionEntry::Ignored { key: key.clone() });
            }
        }

        entries
    }

    /// Pretty JSON rendering, for the CLI
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| "{}".to_string())
    }
}

impl From<Map<String, Value>> for SuggestionMap {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
