//! Merging accepted suggestions into the event fields

use super::map::SuggestionMap;
use crate::event::{EventFields, FieldName};

/// Overlay suggested values on `current`, returning a full new field set
///
/// Fields without a usable proposal keep their current value and keys that
/// are not event fields have nothing to write into. Rejecting suggestions is
/// the same as merging an empty map.
pub fn merge(current: &EventFields, suggestions: &SuggestionMap) -> EventFields {
    let mut merged = current.clone();

    for field in FieldName::ALL {
        if let Some(value) = suggestions.proposed(field) {
            merged.set(field, value);
        }
    }

    merged
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod merge_tests;
