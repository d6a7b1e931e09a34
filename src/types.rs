/// Length of a raw tag: one SHA-256 digest.
pub const TAG_LEN: usize = 32;

/// Length of an encoded tag: padded base64 of `TAG_LEN` bytes.
pub const ENCODED_TAG_LEN: usize = 44;

/// Length of a generated secret key. Matches `ENCODED_TAG_LEN` so the
/// signer's scratch buffer fits both the key and the encoded tag.
pub const DEFAULT_KEY_LEN: usize = 44;

/// A raw 32-byte tag.
pub type Tag = [u8; TAG_LEN];

/// Borrowed view of a token split into its two parts.
///
/// Produced by [`crate::serialize::split_token`]. Nothing here has been
/// authenticated yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignedToken<'a> {
    pub payload: &'a [u8],
    pub encoded_tag: &'a [u8],
}

impl SignedToken<'_> {
    /// Total wire length of the token.
    pub fn len(&self) -> usize {
        self.payload.len() + self.encoded_tag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
