//! Fixed-width text encoding of tags.
//!
//! A 32-byte tag is written as URL-safe, padded base64 (RFC 4648 §5): 43
//! alphabet characters followed by a single `=`, 44 characters in all. The
//! alphabet uses `-` and `_` in place of `+` and `/`, so the encoded tag is
//! safe inside URLs and cookie values.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;

use crate::error::SignedCookieError;
use crate::types::{Tag, ENCODED_TAG_LEN, TAG_LEN};

/// Encode a tag to its 44-character form.
#[must_use]
pub fn encode_tag(tag: &Tag) -> String {
    URL_SAFE.encode(tag)
}

/// Decode a 44-character encoded tag.
///
/// Rejects inputs of the wrong length, characters outside the alphabet, and
/// non-canonical encodings (stray trailing bits).
pub fn decode_tag(encoded: &[u8]) -> Result<Tag, SignedCookieError> {
    if encoded.len() != ENCODED_TAG_LEN {
        return Err(SignedCookieError::InvalidTagLength {
            expected: ENCODED_TAG_LEN,
            actual: encoded.len(),
        });
    }
    let decoded = URL_SAFE
        .decode(encoded)
        .map_err(|e| SignedCookieError::TagDecoding(e.to_string()))?;
    let len = decoded.len();
    decoded.try_into().map_err(|_| {
        SignedCookieError::TagDecoding(format!("decoded to {len} bytes, expected {TAG_LEN}"))
    })
}
