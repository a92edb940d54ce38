//! Value Codec Module
//!
//! Encodings for the supported value types. Scalars travel as decimal
//! UTF-8 text so that stored values stay readable through the store's own
//! tooling; structured objects travel as MessagePack bytes.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

// == Scalar Text Codec ==

/// Formats a 64-bit float as decimal text.
///
/// Rust's `Display` prints the shortest decimal form that parses back to
/// the same bits and never switches to exponent notation, which is exactly
/// the round-trip guarantee the stored representation needs.
pub(crate) fn format_f64(value: f64) -> String {
    value.to_string()
}

/// Parses stored text as a 32-bit integer.
pub(crate) fn parse_i32(text: &str) -> Result<i32> {
    Ok(text.parse()?)
}

/// Parses stored text as a 64-bit integer.
pub(crate) fn parse_i64(text: &str) -> Result<i64> {
    Ok(text.parse()?)
}

/// Parses stored text as a 64-bit float.
pub(crate) fn parse_f64(text: &str) -> Result<f64> {
    Ok(text.parse()?)
}

// == Boolean Encoding ==

/// Booleans go over the wire as integers: `1` for true, `0` for false.
pub(crate) fn bool_to_int(value: bool) -> i32 {
    i32::from(value)
}

/// A stored integer reads back as `true` only when it equals `1`; every
/// other integer reads as `false`.
pub(crate) fn bool_from_int(value: i32) -> bool {
    value == 1
}

// == Object Codec ==

/// Encodes a structured value as MessagePack bytes.
pub(crate) fn encode_object<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    Ok(rmp_serde::to_vec(value)?)
}

/// Decodes MessagePack bytes back into a structured value.
pub(crate) fn decode_object<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    Ok(rmp_serde::from_slice(bytes)?)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;
    use crate::error::CacheError;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct User {
        name: String,
        email: String,
        address: String,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Session {
        user: User,
        logins: Vec<i64>,
        active: bool,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Counter {
        value: i64,
    }

    fn sample_user() -> User {
        User {
            name: "ada".to_string(),
            email: "ada@example.com".to_string(),
            address: "cambridge".to_string(),
        }
    }

    #[test]
    fn test_i32_text_round_trip_bounds() {
        for value in [i32::MIN, -1, 0, 1, 1024, i32::MAX] {
            assert_eq!(parse_i32(&value.to_string()).unwrap(), value);
        }
    }

    #[test]
    fn test_i64_text_round_trip_bounds() {
        for value in [i64::MIN, -1, 0, 102410241024, i64::MAX] {
            assert_eq!(parse_i64(&value.to_string()).unwrap(), value);
        }
    }

    #[test]
    fn test_parse_i32_rejects_wider_value() {
        let wide = i64::from(i32::MAX) + 1;
        let err = parse_i32(&wide.to_string()).unwrap_err();
        assert!(matches!(err, CacheError::ParseInt(_)));
    }

    #[test]
    fn test_parse_int_rejects_garbage() {
        assert!(matches!(
            parse_i64("not-a-number"),
            Err(CacheError::ParseInt(_))
        ));
        assert!(matches!(parse_i64("12.5"), Err(CacheError::ParseInt(_))));
        assert!(matches!(parse_i64(""), Err(CacheError::ParseInt(_))));
    }

    #[test]
    fn test_f64_text_round_trip() {
        for value in [
            0.0,
            -0.0,
            10241024.1024,
            std::f64::consts::PI,
            f64::MAX,
            f64::MIN_POSITIVE,
            -123456.789e-3,
        ] {
            let text = format_f64(value);
            assert_eq!(parse_f64(&text).unwrap().to_bits(), value.to_bits());
        }
    }

    #[test]
    fn test_f64_text_has_no_exponent() {
        assert!(!format_f64(1e-7).contains('e'));
        assert!(!format_f64(1e20).contains('e'));
    }

    #[test]
    fn test_parse_f64_rejects_garbage() {
        assert!(matches!(
            parse_f64("not-a-float"),
            Err(CacheError::ParseFloat(_))
        ));
    }

    #[test]
    fn test_bool_encoding() {
        assert_eq!(bool_to_int(true), 1);
        assert_eq!(bool_to_int(false), 0);
    }

    #[test]
    fn test_bool_decoding_is_strict_one() {
        assert!(bool_from_int(1));
        assert!(!bool_from_int(0));
        assert!(!bool_from_int(7));
        assert!(!bool_from_int(-1));
    }

    #[test]
    fn test_object_round_trip() {
        let user = sample_user();
        let bytes = encode_object(&user).unwrap();
        let back: User = decode_object(&bytes).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn test_object_round_trip_nested() {
        let session = Session {
            user: sample_user(),
            logins: vec![1_700_000_000, 1_700_086_400],
            active: true,
        };
        let bytes = encode_object(&session).unwrap();
        let back: Session = decode_object(&bytes).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn test_decode_rejects_garbage_bytes() {
        let err = decode_object::<User>(&[0xc1, 0xff, 0x00]).unwrap_err();
        assert!(matches!(err, CacheError::Decode(_)));
    }

    #[test]
    fn test_decode_rejects_incompatible_shape() {
        let bytes = encode_object(&sample_user()).unwrap();
        let err = decode_object::<Counter>(&bytes).unwrap_err();
        assert!(matches!(err, CacheError::Decode(_)));
    }
}
