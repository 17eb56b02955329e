//! Canonical text rendering of row values

use chrono::SecondsFormat;

use super::value::Value;

/// Marker prepended to hex-escaped binary values
const HEX_ESCAPE: &str = "\\x";

/// Converts a row value to its portable text form.
///
/// Total and deterministic. Bytes that are valid UTF-8 render as that text;
/// other bytes render as `\x` followed by lowercase hex.
///
/// Timestamps render as RFC 3339, which carries the offset at minute
/// resolution. An offset with a seconds part is rounded to the nearest minute,
/// so only whole-minute offsets parse back to the same instant.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Text(s) => s.clone(),
        Value::Bytes(b) => match std::str::from_utf8(b) {
            Ok(s) => s.to_string(),
            Err(_) => {
                let mut out = String::with_capacity(HEX_ESCAPE.len() + b.len() * 2);
                out.push_str(HEX_ESCAPE);
                out.push_str(&hex::encode(b));
                out
            }
        },
        Value::I32(n) => n.to_string(),
        Value::I64(n) => n.to_string(),
        // Fractional digits only when non-zero, so the text parses back exactly
        Value::Timestamp(t) => t.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        Value::Bool(b) => b.to_string(),
        Value::U64(n) => n.to_string(),
        Value::F64(f) => f.to_string(),
        Value::Other(serde_json::Value::String(s)) => s.clone(),
        Value::Other(v) => v.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, TimeZone};
    use serde_json::json;

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn test_null_is_empty() {
        assert_eq!(stringify(&Value::Null), "");
    }

    #[test]
    fn test_text_unchanged() {
        assert_eq!(stringify(&Value::from("héllo, world")), "héllo, world");
        assert_eq!(stringify(&Value::from("")), "");
    }

    #[test]
    fn test_empty_bytes_render_empty() {
        assert_eq!(stringify(&Value::Bytes(Vec::new())), "");
    }

    #[test]
    fn test_utf8_bytes_decode_as_text() {
        assert_eq!(stringify(&Value::Bytes(b"abc".to_vec())), "abc");
        // Numeric-looking text stays text
        assert_eq!(stringify(&Value::Bytes(b"0042".to_vec())), "0042");
        assert_eq!(stringify(&Value::Bytes("日本".as_bytes().to_vec())), "日本");
    }

    #[test]
    fn test_invalid_utf8_bytes_hex_escaped() {
        assert_eq!(stringify(&Value::Bytes(vec![0xff, 0x00, 0x1a])), "\\xff001a");
        assert_eq!(stringify(&Value::Bytes(vec![0xc3])), "\\xc3");
    }

    #[test]
    fn test_hex_escape_round_trips() {
        let inputs: Vec<Vec<u8>> = vec![
            vec![0x80],
            vec![0xde, 0xad, 0xbe, 0xef],
            vec![b'a', 0xfe, b'b'],
            (0u8..=255).collect(),
        ];

        for bytes in inputs {
            let out = stringify(&Value::Bytes(bytes.clone()));
            let digits = out.strip_prefix("\\x").unwrap();
            assert_eq!(digits.len(), bytes.len() * 2);
            assert!(digits.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
            assert_eq!(hex::decode(digits).unwrap(), bytes);
        }
    }

    #[test]
    fn test_integers_base10() {
        assert_eq!(stringify(&Value::I32(0)), "0");
        assert_eq!(stringify(&Value::I32(-17)), "-17");
        assert_eq!(stringify(&Value::I32(i32::MIN)), "-2147483648");
        assert_eq!(stringify(&Value::I64(i64::MAX)), "9223372036854775807");
        assert_eq!(stringify(&Value::I64(i64::MIN)), "-9223372036854775808");
    }

    #[test]
    fn test_integers_parse_back() {
        for n in [i64::MIN, -1, 0, 1, 1_000_000_007, i64::MAX] {
            assert_eq!(stringify(&Value::I64(n)).parse::<i64>().unwrap(), n);
        }
        for n in [i32::MIN, -5, 0, 5, i32::MAX] {
            assert_eq!(stringify(&Value::I32(n)).parse::<i32>().unwrap(), n);
        }
    }

    #[test]
    fn test_timestamp_rfc3339() {
        let t = ts("2024-01-02T15:04:05+07:00");
        assert_eq!(stringify(&Value::Timestamp(t)), "2024-01-02T15:04:05+07:00");

        let utc = FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2024, 1, 2, 15, 4, 5).unwrap();
        assert_eq!(stringify(&Value::Timestamp(utc)), "2024-01-02T15:04:05Z");
    }

    #[test]
    fn test_sub_minute_offset_rounds() {
        let offset = FixedOffset::east_opt(30).unwrap();
        let t = offset.with_ymd_and_hms(2024, 1, 2, 15, 4, 5).unwrap();

        let out = stringify(&Value::Timestamp(t));
        assert!(out.ends_with("+00:01"), "got {}", out);
        assert_ne!(DateTime::parse_from_rfc3339(&out).unwrap(), t);
    }

    #[test]
    fn test_timestamp_keeps_offset_and_parses_back() {
        for s in [
            "1999-12-31T23:59:59-05:00",
            "2024-02-29T00:00:00Z",
            "2024-06-01T12:30:00.250+05:30",
            "2024-06-01T12:30:00.000000001Z",
        ] {
            let t = ts(s);
            let out = stringify(&Value::Timestamp(t));
            let back = DateTime::parse_from_rfc3339(&out).unwrap();
            assert_eq!(back, t);
            assert_eq!(back.offset(), t.offset());
        }
    }

    #[test]
    fn test_fallback_renderings() {
        assert_eq!(stringify(&Value::Bool(true)), "true");
        assert_eq!(stringify(&Value::U64(u64::MAX)), "18446744073709551615");
        assert_eq!(stringify(&Value::F64(1.5)), "1.5");
        assert_eq!(stringify(&Value::F64(-0.1)), "-0.1");
        assert_eq!(stringify(&Value::F64(f64::NAN)), "NaN");
        assert_eq!(stringify(&Value::Other(json!("plain"))), "plain");
        assert_eq!(stringify(&Value::Other(json!({"a": [1, 2]}))), "{\"a\":[1,2]}");
    }

    #[test]
    fn test_deterministic() {
        let values = vec![
            Value::Null,
            Value::from("x"),
            Value::Bytes(vec![0xff, 0x10]),
            Value::I64(42),
            Value::Timestamp(ts("2020-05-05T05:05:05+01:00")),
            Value::F64(3.25),
            Value::Other(json!({"b": 1, "a": 2})),
        ];
        for v in &values {
            assert_eq!(stringify(v), stringify(&v.clone()));
        }
    }
}
