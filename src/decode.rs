//! Form-style percent decoding of header values.

use std::fmt;

use percent_encoding::percent_decode_str;

/// Error returned when a header value cannot be percent-decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A `%` was not followed by two hex digits
    InvalidEscape {
        /// Byte offset of the offending `%`
        offset: usize,
    },
    /// The decoded bytes are not valid UTF-8
    InvalidUtf8,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidEscape { offset } => {
                write!(f, "invalid percent escape at offset {}", offset)
            }
            DecodeError::InvalidUtf8 => write!(f, "decoded value is not valid UTF-8"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Decodes a query-escaped string.
///
/// `+` becomes a space and `%XX` becomes the byte `0xXX`. Malformed escapes
/// are rejected rather than passed through.
///
/// # Examples
///
/// ```
/// use header_policy::query_unescape;
///
/// assert_eq!(query_unescape("SAN=%22a.test%22").unwrap(), "SAN=\"a.test\"");
/// assert_eq!(query_unescape("a+b").unwrap(), "a b");
/// assert!(query_unescape("100%").is_err());
/// ```
pub fn query_unescape(input: &str) -> Result<String, DecodeError> {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit);
            if !valid {
                return Err(DecodeError::InvalidEscape { offset: i });
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    // `%2B` must survive as a literal plus, so spaces are restored first.
    let spaced = input.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| DecodeError::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_escapes_and_plus() {
        assert_eq!(
            query_unescape("CN=common-name&SAN=%22somkindofdomain.domain.thing.test%22").unwrap(),
            "CN=common-name&SAN=\"somkindofdomain.domain.thing.test\""
        );
        assert_eq!(query_unescape("a+b%2Bc").unwrap(), "a b+c");
    }

    #[test]
    fn plain_value_is_unchanged() {
        assert_eq!(query_unescape("de-DE").unwrap(), "de-DE");
        assert_eq!(query_unescape("").unwrap(), "");
    }

    #[test]
    fn rejects_truncated_escape() {
        assert_eq!(
            query_unescape("abc%4"),
            Err(DecodeError::InvalidEscape { offset: 3 })
        );
        assert_eq!(
            query_unescape("%zz"),
            Err(DecodeError::InvalidEscape { offset: 0 })
        );
    }

    #[test]
    fn rejects_invalid_utf8() {
        assert_eq!(query_unescape("%ff%fe"), Err(DecodeError::InvalidUtf8));
    }

    #[test]
    fn decodes_multibyte_utf8() {
        assert_eq!(query_unescape("caf%C3%A9").unwrap(), "café");
    }
}
