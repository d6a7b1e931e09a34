//! Token wire format.
//!
//! A token is the raw payload followed immediately by the encoded tag:
//!
//!   <payload bytes><44-character encoded tag>
//!
//! There is no separator. The fixed-width suffix is the only delimiter, so
//! a token is split by counting `ENCODED_TAG_LEN` bytes back from the end.

use crate::types::{SignedToken, ENCODED_TAG_LEN};

/// Append an encoded tag to a payload.
#[must_use]
pub fn join_token(payload: &[u8], encoded_tag: &str) -> Vec<u8> {
    let mut buf = Vec::with_capacity(payload.len() + encoded_tag.len());
    buf.extend_from_slice(payload);
    buf.extend_from_slice(encoded_tag.as_bytes());
    buf
}

/// Split a token into payload and encoded tag.
///
/// Returns `None` when the token is shorter than `ENCODED_TAG_LEN`. The
/// encoded tag is not decoded here.
pub fn split_token(token: &[u8]) -> Option<SignedToken<'_>> {
    let boundary = token.len().checked_sub(ENCODED_TAG_LEN)?;
    let (payload, encoded_tag) = token.split_at(boundary);
    Some(SignedToken {
        payload,
        encoded_tag,
    })
}
