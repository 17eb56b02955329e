//! Value Coercion Tests
//!
//! Properties of the canonical text rendering:
//! - Total and deterministic
//! - Null and empty bytes render empty
//! - Valid UTF-8 bytes render as text, invalid ones as reversible `\x` hex
//! - Integers and timestamps (whole-minute offsets) parse back to the original value

use chrono::{DateTime, Duration, FixedOffset, TimeZone};
use rowexport::{stringify, Value};

// =============================================================================
// Helper Functions
// =============================================================================

/// Deterministic pseudo-random byte strings (xorshift)
fn byte_samples(count: usize) -> Vec<Vec<u8>> {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    (0..count)
        .map(|i| (0..(i % 17)).map(|_| (next() & 0xff) as u8).collect())
        .collect()
}

fn decode_hex(digits: &str) -> Vec<u8> {
    hex::decode(digits).unwrap()
}

// =============================================================================
// Bytes
// =============================================================================

#[test]
fn test_bytes_utf8_or_reversible_hex() {
    for bytes in byte_samples(500) {
        let out = stringify(&Value::Bytes(bytes.clone()));

        match std::str::from_utf8(&bytes) {
            Ok(text) => assert_eq!(out, text),
            Err(_) => {
                let digits = out.strip_prefix("\\x").expect("escape marker");
                assert_eq!(digits.len(), 2 * bytes.len());
                assert!(digits.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
                assert_eq!(decode_hex(digits), bytes);
            }
        }
    }
}

#[test]
fn test_empty_and_null_render_empty() {
    assert_eq!(stringify(&Value::Null), "");
    assert_eq!(stringify(&Value::Bytes(vec![])), "");
}

#[test]
fn test_utf8_bytes_match_text() {
    for s in ["", "plain", "12345", "tab\there", "ünïcödé", "🚀"] {
        assert_eq!(
            stringify(&Value::Bytes(s.as_bytes().to_vec())),
            stringify(&Value::from(s))
        );
    }
}

// =============================================================================
// Integers
// =============================================================================

#[test]
fn test_integers_round_trip() {
    let mut n: i64 = 1;
    for _ in 0..64 {
        for v in [n, n.wrapping_neg(), n.wrapping_sub(1), n.wrapping_neg().wrapping_sub(1)] {
            assert_eq!(stringify(&Value::I64(v)).parse::<i64>().unwrap(), v);
        }
        n = n.wrapping_mul(3).wrapping_add(1);
    }

    for v in [i32::MIN, -1, 0, 7, i32::MAX] {
        let out = stringify(&Value::I32(v));
        assert_eq!(out.parse::<i32>().unwrap(), v);
        assert!(!out.starts_with('+'));
    }
}

#[test]
fn test_no_leading_zeros() {
    assert_eq!(stringify(&Value::I64(7)), "7");
    assert_eq!(stringify(&Value::I64(-70)), "-70");
}

// =============================================================================
// Timestamps
// =============================================================================

/// RFC 3339 offsets have minute resolution; only whole-minute offsets round trip
#[test]
fn test_timestamps_round_trip() {
    let offsets = [0, 3600, -5 * 3600, 5 * 3600 + 1800, 14 * 3600];
    let base = FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(1970, 1, 1, 0, 0, 0)
        .unwrap();

    for (i, secs) in offsets.iter().enumerate() {
        let offset = FixedOffset::east_opt(*secs).unwrap();
        for step in 0..50i64 {
            let t: DateTime<FixedOffset> = (base
                + Duration::seconds(step * 86_400 * 97 + step * 7)
                + Duration::milliseconds((i as i64) * 125))
            .with_timezone(&offset);

            let out = stringify(&Value::Timestamp(t));
            let back = DateTime::parse_from_rfc3339(&out).unwrap();
            assert_eq!(back, t, "round trip of {}", out);
            assert_eq!(back.offset(), t.offset());
        }
    }
}

#[test]
fn test_utc_renders_with_z() {
    let t = DateTime::parse_from_rfc3339("2024-01-02T15:04:05+00:00").unwrap();
    assert_eq!(stringify(&Value::Timestamp(t)), "2024-01-02T15:04:05Z");
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_stringify_is_deterministic() {
    let t = DateTime::parse_from_rfc3339("2001-02-03T04:05:06-07:00").unwrap();
    let values = vec![
        Value::Null,
        Value::from("text"),
        Value::Bytes(vec![0x00, 0xff]),
        Value::I32(-1),
        Value::I64(1 << 40),
        Value::Timestamp(t),
        Value::Bool(false),
        Value::U64(u64::MAX),
        Value::F64(-2.75),
        Value::Other(serde_json::json!({"z": 1, "a": [true, null]})),
    ];

    for v in &values {
        let first = stringify(v);
        for _ in 0..10 {
            assert_eq!(stringify(&v.clone()), first);
        }
    }
}
