//! Tests for clipboard/osc52

use super::*;
use proptest::prelude::*;

#[test]
fn test_encode_osc52_framing() {
    assert_eq!(encode_osc52("hi").unwrap(), "\x1b]52;c;aGk=\x07");
}

#[test]
fn test_encode_osc52_empty() {
    assert_eq!(encode_osc52("").unwrap(), "\x1b]52;c;\x07");
}

#[test]
fn test_encode_osc52_refuses_oversized_reply() {
    // base64 grows 3 bytes into 4
    let text = "a".repeat(MAX_PAYLOAD_BYTES / 4 * 3 + 3);
    assert!(encode_osc52(&text).is_none());
}

#[test]
fn test_encode_osc52_accepts_payload_at_limit() {
    let text = "a".repeat(MAX_PAYLOAD_BYTES / 4 * 3);
    let sequence = encode_osc52(&text).unwrap();
    assert_eq!(sequence.len(), PREFIX.len() + MAX_PAYLOAD_BYTES + 1);
}

#[test]
fn test_write_sequence_writes_to_writer() {
    let mut out = Vec::new();
    write_sequence(&mut out, "Tacos at 7").unwrap();
    assert_eq!(out, encode_osc52("Tacos at 7").unwrap().into_bytes());
}

#[test]
fn test_write_sequence_too_large_writes_nothing() {
    let mut out = Vec::new();
    let text = "a".repeat(MAX_PAYLOAD_BYTES);

    assert_eq!(
        write_sequence(&mut out, &text),
        Err(ClipboardError::TooLarge)
    );
    assert!(out.is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_payload_decodes_to_input(text in any::<String>()) {
        let sequence = encode_osc52(&text).unwrap();
        let payload = sequence
            .strip_prefix(PREFIX)
            .and_then(|s| s.strip_suffix(TERMINATOR))
            .unwrap();
        let decoded = STANDARD.decode(payload).unwrap();
        prop_assert_eq!(String::from_utf8(decoded).unwrap(), text);
    }
}
