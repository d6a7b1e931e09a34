use thiserror::Error;

#[derive(Debug, Error)]
pub enum SignedCookieError {
    #[error("entropy source failure: {0}")]
    EntropyFailure(String),

    #[error("secret key must not be empty")]
    EmptyKey,

    #[error("invalid key encoding: {0}")]
    InvalidKeyEncoding(String),

    #[error("failed to read key file {path}: {source}")]
    KeyFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid tag length: expected {expected} characters, got {actual}")]
    InvalidTagLength { expected: usize, actual: usize },

    #[error("malformed tag encoding: {0}")]
    TagDecoding(String),

    /// Every verification failure maps here, whatever the cause.
    #[error("invalid token")]
    InvalidToken,

    #[error("invalid cookie name: {0:?}")]
    InvalidCookieName(String),

    #[error("cookie value contains characters outside the cookie-octet set")]
    InvalidCookieValue,

    #[error("invalid cookie attribute: {0:?}")]
    InvalidCookieAttribute(String),

    #[error("cookie not found: {0}")]
    CookieNotFound(String),
}
