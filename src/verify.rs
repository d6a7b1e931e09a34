//! Token verification.
//!
//! Verification splits the fixed-width tag off the end of the token, decodes
//! it, recomputes the tag over the remaining payload and compares the two in
//! constant time. Every failure surfaces as `SignedCookieError::InvalidToken`
//! so callers cannot tell a short token, a garbled tag and a forged tag apart.

use crate::codec::decode_tag;
use crate::error::SignedCookieError;
use crate::serialize::split_token;
use crate::sign::Signer;
use crate::types::Tag;

impl Signer {
    /// Verify a token and return its payload.
    ///
    /// The payload is borrowed from `token`; on success it is exactly the
    /// bytes that were passed to [`Signer::sign`].
    pub fn verify<'a>(&self, token: &'a [u8]) -> Result<&'a [u8], SignedCookieError> {
        let Some(parts) = split_token(token) else {
            tracing::trace!(token_len = token.len(), "token rejected: too short");
            return Err(SignedCookieError::InvalidToken);
        };

        let supplied = match decode_tag(parts.encoded_tag) {
            Ok(tag) => tag,
            Err(e) => {
                tracing::trace!(error = %e, "token rejected: undecodable tag");
                return Err(SignedCookieError::InvalidToken);
            }
        };

        let expected = self.compute_tag(parts.payload);
        if !tags_equal(&expected, &supplied) {
            tracing::trace!(payload_len = parts.payload.len(), "token rejected: tag mismatch");
            return Err(SignedCookieError::InvalidToken);
        }

        Ok(parts.payload)
    }

    /// Verify a textual token and return its payload as text.
    pub fn verify_str<'a>(&self, token: &'a str) -> Result<&'a str, SignedCookieError> {
        let payload = self.verify(token.as_bytes())?;
        // A valid tag is ASCII, so the payload ends on a char boundary.
        token
            .get(..payload.len())
            .ok_or(SignedCookieError::InvalidToken)
    }
}

/// Compare two tags over their full length without an early exit.
fn tags_equal(a: &Tag, b: &Tag) -> bool {
    let diff = a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y));
    std::hint::black_box(diff) == 0
}
