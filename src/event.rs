//! Event module
//!
//! The structured event details collected by the form and sent to the model.

mod fields;

pub use fields::{Address, EventFields, FieldName};
