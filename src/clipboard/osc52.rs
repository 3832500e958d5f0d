//! OSC 52 clipboard backend
//!
//! The terminal sets the clipboard from an escape sequence carrying base64
//! text, which also works across SSH. Most terminals drop sequences past a
//! size limit without telling anyone, so oversized replies are refused here
//! instead of silently failing.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Write};

use super::backend::{ClipboardError, ClipboardResult};

/// Largest base64 payload sent in one sequence (xterm's default limit)
pub const MAX_PAYLOAD_BYTES: usize = 100_000;

const PREFIX: &str = "\x1b]52;c;";
const TERMINATOR: char = '\x07';

pub fn copy(text: &str) -> ClipboardResult {
    write_sequence(&mut io::stdout(), text)
}

/// Write the OSC 52 sequence for `text` to `out`
pub fn write_sequence<W: Write>(out: &mut W, text: &str) -> ClipboardResult {
    let sequence = encode_osc52(text).ok_or(ClipboardError::TooLarge)?;

    out.write_all(sequence.as_bytes())
        .and_then(|_| out.flush())
        .map_err(|_| ClipboardError::WriteError)
}

/// The escape sequence for `text`, or `None` when the payload is too large
pub fn encode_osc52(text: &str) -> Option<String> {
    let payload = STANDARD.encode(text);
    if payload.len() > MAX_PAYLOAD_BYTES {
        log::debug!(
            "OSC 52 payload of {} bytes exceeds {}",
            payload.len(),
            MAX_PAYLOAD_BYTES
        );
        return None;
    }

    Some(format!("{PREFIX}{payload}{TERMINATOR}"))
}

#[cfg(test)]
#[path = "osc52_tests.rs"]
mod osc52_tests;
