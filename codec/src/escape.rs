//! Percent escaping for keys and values

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left as-is by `encodeURIComponent`: alphanumerics and `-_.!~*'()`
const URI_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a key or value token
pub fn escape(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT_SET).to_string()
}

/// Percent-decode a token. Invalid UTF-8 is replaced rather than rejected.
pub fn unescape(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_escape_reserved_characters() {
        assert_eq!(escape("hello world"), "hello%20world");
        assert_eq!(escape("a:b/c,d"), "a%3Ab%2Fc%2Cd");
        assert_eq!(escape("#?&="), "%23%3F%26%3D");
        assert_eq!(escape("keep-_.!~*'()"), "keep-_.!~*'()");
    }

    #[test]
    fn test_escape_utf8() {
        assert_eq!(escape("é"), "%C3%A9");
        assert_eq!(unescape("%C3%A9"), "é");
    }

    #[test]
    fn test_unescape_malformed_does_not_fail() {
        assert_eq!(unescape("100%"), "100%");
        assert_eq!(unescape("%zz"), "%zz");
        assert_eq!(unescape("%FF"), "\u{FFFD}");
    }

    proptest! {
        #[test]
        fn escaped_tokens_never_contain_separators(s in ".*") {
            let escaped = escape(&s);
            prop_assert!(!escaped.contains('/'));
            prop_assert!(!escaped.contains(':'));
            prop_assert!(!escaped.contains(','));
            prop_assert_eq!(unescape(&escaped), s);
        }
    }
}
