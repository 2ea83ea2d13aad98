//! Base64URL encoding per RFC 4648
//!
//! This module provides a thin wrapper around the `base64` crate using the
//! URL-safe alphabet without padding, so encoded segments never contain
//! `+`, `/` or `=`.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

/// Encode bytes to a Base64URL string
pub(crate) fn encode_bytes(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Encode the UTF-8 bytes of a string to Base64URL
pub(crate) fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_bytes() {
        assert_eq!(encode_bytes(b""), "");
        assert_eq!(encode_bytes(b"f"), "Zg");
        assert_eq!(encode_bytes(b"fo"), "Zm8");
        assert_eq!(encode_bytes(b"foo"), "Zm9v");
        assert_eq!(encode_bytes(b"foob"), "Zm9vYg");
        assert_eq!(encode_bytes(b"fooba"), "Zm9vYmE");
        assert_eq!(encode_bytes(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn test_url_safe_characters() {
        // 0xfb 0xff encodes to "+/8=" in standard base64
        let encoded = encode_bytes(&[0xfb, 0xff]);
        assert_eq!(encoded, "-_8");
    }

    #[test]
    fn test_encode_utf8() {
        // Multi-byte characters are encoded from their UTF-8 bytes
        assert_eq!(encode("é"), "w6k");
        assert_eq!(encode(r#"{"alg":"HS256","typ":"JWT"}"#), "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9");
    }
}
