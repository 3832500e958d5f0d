//! AI rendering helpers
//!
//! Text wrapping and line building shared by the suggestion panel and the
//! transcript.

pub mod suggestions;
pub mod text;
