//! Transient footer messages
//!
//! Any part of the app can post a short message (copy done, suggestions
//! applied, model error). It replaces the key hints for a few seconds.

mod render;
mod state;

pub use render::render_notification;
pub use state::{Notification, NotificationLevel, NotificationState};
