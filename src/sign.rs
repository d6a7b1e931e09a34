//! Token signing.
//!
//! The tag of a payload is `SHA-256(payload || key)`. A token is the payload
//! followed by the 44-character encoding of that tag.

use sha2::{Digest, Sha256};

use crate::codec::encode_tag;
use crate::error::SignedCookieError;
use crate::keys::KeyMaterial;
use crate::types::Tag;

/// Signs payloads and verifies tokens with one secret key.
///
/// A `Signer` never changes after construction; share it by reference or
/// behind an `Arc` rather than building one per request.
#[derive(Debug, Clone)]
pub struct Signer {
    pub(crate) key: KeyMaterial,
}

impl Signer {
    /// Create a signer with a freshly generated random key.
    ///
    /// Fails only if the OS entropy source fails.
    pub fn new() -> Result<Self, SignedCookieError> {
        Ok(Self::from_key_material(KeyMaterial::generate()?))
    }

    /// Create a signer from a caller-supplied key of any non-zero length.
    pub fn with_key(key: &[u8]) -> Result<Self, SignedCookieError> {
        Ok(Self::from_key_material(KeyMaterial::from_bytes(key)?))
    }

    pub fn from_key_material(key: KeyMaterial) -> Self {
        tracing::debug!(key_len = key.len(), "signer initialized");
        Self { key }
    }

    pub fn key_len(&self) -> usize {
        self.key.len()
    }

    /// Compute the raw tag `SHA-256(payload || key)`.
    #[must_use]
    pub fn compute_tag(&self, payload: &[u8]) -> Tag {
        let mut hasher = Sha256::new();
        hasher.update(payload);
        hasher.update(self.key.as_bytes());
        hasher.finalize().into()
    }

    /// Sign a payload, returning `payload || encoded tag`.
    ///
    /// The payload is copied unchanged. Callers must make sure it is already
    /// safe for wherever the token will be stored; only the tag is encoded.
    #[must_use]
    pub fn sign(&self, payload: &[u8]) -> Vec<u8> {
        let encoded = encode_tag(&self.compute_tag(payload));
        let mut token = Vec::with_capacity(payload.len() + self.key.working_capacity());
        token.extend_from_slice(payload);
        token.extend_from_slice(encoded.as_bytes());
        token
    }

    /// Sign a text payload. The token of a UTF-8 payload is itself UTF-8.
    #[must_use]
    pub fn sign_str(&self, payload: &str) -> String {
        let mut token = String::with_capacity(payload.len() + self.key.working_capacity());
        token.push_str(payload);
        token.push_str(&encode_tag(&self.compute_tag(payload.as_bytes())));
        token
    }
}
