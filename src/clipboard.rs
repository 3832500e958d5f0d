//! Clipboard support
//!
//! Copies text through the OS clipboard or, over SSH and in terminals without
//! a display server, through OSC 52 escape sequences.

mod backend;
mod clipboard_events;
mod osc52;
mod system;

pub use backend::{ClipboardError, ClipboardResult, copy_to_clipboard};
pub use clipboard_events::handle_clipboard_key;
