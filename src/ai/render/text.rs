//! Width-aware word wrapping

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap `text` to lines no wider than `max_width` display columns
///
/// Explicit newlines are kept; runs of whitespace inside a line collapse to a
/// single space. Words wider than the line are split by character. A width
/// of 0 disables wrapping.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for raw_line in text.split('\n') {
        let raw_line = raw_line.trim_end_matches('\r');
        if max_width == 0 {
            lines.push(raw_line.to_string());
            continue;
        }

        let mut current = String::new();
        let mut current_width = 0;

        for word in raw_line.split_whitespace() {
            let word_width = word.width();

            if current_width > 0 && current_width + 1 + word_width > max_width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if current_width > 0 {
                current.push(' ');
                current_width += 1;
            }

            if word_width <= max_width {
                current.push_str(word);
                current_width += word_width;
                continue;
            }

            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width > 0 && current_width + ch_width > max_width {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }

        lines.push(current);
    }

    lines
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod text_tests;
