//! Parsing that reports failure as absence.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

pub fn to_int_or_null<'a>(s: impl Into<Option<&'a str>>) -> Option<i32> {
    s.into()?.parse().ok()
}

pub fn to_long_or_null<'a>(s: impl Into<Option<&'a str>>) -> Option<i64> {
    s.into()?.parse().ok()
}

pub fn to_double_or_null<'a>(s: impl Into<Option<&'a str>>) -> Option<f64> {
    s.into()?.parse().ok()
}

pub fn to_float_or_null<'a>(s: impl Into<Option<&'a str>>) -> Option<f32> {
    s.into()?.parse().ok()
}

/// Recognizes `true`/`1`/`yes`/`on` and `false`/`0`/`no`/`off`, ignoring case.
pub fn to_boolean_or_null<'a>(s: impl Into<Option<&'a str>>) -> Option<bool> {
    match s.into()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Standard alphabet with padding, over the UTF-8 bytes.
pub fn encode_base64<'a>(s: impl Into<Option<&'a str>>) -> Option<String> {
    s.into().map(|s| STANDARD.encode(s.as_bytes()))
}

/// `None` for malformed input or bytes that are not UTF-8.
pub fn decode_base64<'a>(s: impl Into<Option<&'a str>>) -> Option<String> {
    let bytes = STANDARD.decode(s.into()?).ok()?;
    String::from_utf8(bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_parse_or_absent() {
        assert_eq!(to_int_or_null("42"), Some(42));
        assert_eq!(to_int_or_null("abc"), None);
        assert_eq!(to_int_or_null("3000000000"), None);
        assert_eq!(to_long_or_null("3000000000"), Some(3_000_000_000));
        assert_eq!(to_double_or_null("2.75"), Some(2.75));
        assert_eq!(to_float_or_null("1.5"), Some(1.5));
        assert_eq!(to_double_or_null(None), None);
    }

    #[test]
    fn booleans_parse_known_tokens() {
        assert_eq!(to_boolean_or_null("TRUE"), Some(true));
        assert_eq!(to_boolean_or_null("Yes"), Some(true));
        assert_eq!(to_boolean_or_null("off"), Some(false));
        assert_eq!(to_boolean_or_null("0"), Some(false));
        assert_eq!(to_boolean_or_null("maybe"), None);
        assert_eq!(to_boolean_or_null(None), None);
    }

    #[test]
    fn base64_encodes_and_rejects_garbage() {
        assert_eq!(encode_base64("hello").as_deref(), Some("aGVsbG8="));
        assert_eq!(decode_base64("aGVsbG8=").as_deref(), Some("hello"));
        assert_eq!(decode_base64("not base64!"), None);
        assert_eq!(decode_base64("/w=="), None);
    }
}
