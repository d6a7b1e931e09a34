//! Secret key material for the signer.
//!
//! A key is either drawn from the OS RNG (`DEFAULT_KEY_LEN` bytes) or
//! supplied by the caller verbatim, at any non-zero length. The bytes are
//! wrapped in `Zeroizing` so they are wiped from memory on drop.
//!
//! Key files hold either the raw key bytes or the key as hex text.

use std::fmt;
use std::path::Path;

use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::error::SignedCookieError;
use crate::types::{DEFAULT_KEY_LEN, ENCODED_TAG_LEN};

/// The server-side secret used to compute tags.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyMaterial {
    key: Zeroizing<Vec<u8>>,
    working_capacity: usize,
}

impl KeyMaterial {
    /// Generate a fresh random key of `DEFAULT_KEY_LEN` bytes.
    pub fn generate() -> Result<Self, SignedCookieError> {
        let mut key = Zeroizing::new(vec![0u8; DEFAULT_KEY_LEN]);
        OsRng
            .try_fill_bytes(&mut key)
            .map_err(|e| SignedCookieError::EntropyFailure(e.to_string()))?;
        tracing::debug!(key_len = DEFAULT_KEY_LEN, "generated random signing key");
        Ok(Self::from_zeroizing(key))
    }

    /// Use a caller-supplied key as-is. Any length of at least one byte is accepted.
    pub fn from_bytes(key: &[u8]) -> Result<Self, SignedCookieError> {
        if key.is_empty() {
            return Err(SignedCookieError::EmptyKey);
        }
        Ok(Self::from_zeroizing(Zeroizing::new(key.to_vec())))
    }

    /// Parse a hex-encoded key. Surrounding whitespace is ignored.
    pub fn from_hex(hex_str: &str) -> Result<Self, SignedCookieError> {
        let key = Zeroizing::new(
            hex::decode(hex_str.trim())
                .map_err(|e| SignedCookieError::InvalidKeyEncoding(e.to_string()))?,
        );
        if key.is_empty() {
            return Err(SignedCookieError::EmptyKey);
        }
        Ok(Self::from_zeroizing(key))
    }

    fn from_zeroizing(key: Zeroizing<Vec<u8>>) -> Self {
        let working_capacity = key.len().max(ENCODED_TAG_LEN);
        Self {
            key,
            working_capacity,
        }
    }

    /// Hex encoding of the key, for writing key files.
    #[must_use]
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(self.key.as_slice()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.key
    }

    #[allow(clippy::len_without_is_empty)] // a key is never empty
    pub fn len(&self) -> usize {
        self.key.len()
    }

    /// `max(key length, ENCODED_TAG_LEN)`: room reserved after the payload
    /// in the signer's scratch buffer.
    pub fn working_capacity(&self) -> usize {
        self.working_capacity
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("len", &self.key.len())
            .finish_non_exhaustive()
    }
}

/// Read a key file, optionally hex-decoding its contents.
pub fn load_key_file(
    path: impl AsRef<Path>,
    hex_encoded: bool,
) -> Result<KeyMaterial, SignedCookieError> {
    let path = path.as_ref();
    let raw = std::fs::read(path).map_err(|source| SignedCookieError::KeyFile {
        path: path.display().to_string(),
        source,
    })?;
    let raw = Zeroizing::new(raw);
    if hex_encoded {
        let text = std::str::from_utf8(&raw).map_err(|_| {
            SignedCookieError::InvalidKeyEncoding("hex key file is not valid UTF-8".into())
        })?;
        KeyMaterial::from_hex(text)
    } else {
        KeyMaterial::from_bytes(&raw)
    }
}
