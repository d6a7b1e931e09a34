//! Signedcookie: tamper-evident tokens for values held by untrusted clients.
//!
//! A token is the payload followed by a 44-character tag,
//! `base64url(SHA-256(payload || key))`, computed with a secret that never
//! leaves the server. Tokens are authenticated, not encrypted: the payload
//! stays readable by whoever holds the token.
//!
//! ```
//! use signedcookie::sign::Signer;
//!
//! let signer = Signer::new()?;
//! let token = signer.sign(b"user=42");
//! assert_eq!(signer.verify(&token)?, b"user=42");
//! # Ok::<(), signedcookie::error::SignedCookieError>(())
//! ```

pub mod codec;
pub mod cookie;
pub mod error;
pub mod keys;
pub mod serialize;
pub mod sign;
pub mod types;
pub mod verify;
