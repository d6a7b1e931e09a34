//! HTTP cookie binding for signed tokens.
//!
//! Renders `Set-Cookie` header values carrying a signed token and extracts
//! and verifies a named cookie from a `Cookie` request header. Values are
//! checked against the RFC 6265 `cookie-octet` set before signing, since the
//! signer never re-encodes payloads.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::error::SignedCookieError;
use crate::sign::Signer;

/// Attributes attached to an issued cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieOptions {
    /// Lifetime, rendered as `Max-Age` in whole seconds. `None` gives a session cookie.
    pub max_age: Option<Duration>,
    /// Absolute expiry, rendered as `Expires` in IMF-fixdate form.
    pub expires: Option<DateTime<Utc>>,
    pub path: Option<String>,
    pub domain: Option<String>,
    pub secure: bool,
    pub http_only: bool,
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self {
            max_age: None,
            expires: None,
            path: Some("/".into()),
            domain: None,
            secure: false,
            http_only: true,
        }
    }
}

/// RFC 7230 `tchar`.
fn is_token_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}

/// RFC 6265 `cookie-octet`: printable ASCII minus space, `"`, `,`, `;` and `\`.
fn is_cookie_octet(b: u8) -> bool {
    matches!(b, 0x21 | 0x23..=0x2B | 0x2D..=0x3A | 0x3C..=0x5B | 0x5D..=0x7E)
}

/// RFC 6265 `av-octet`: any CHAR except CTLs or `;`.
fn is_attribute_octet(b: u8) -> bool {
    b.is_ascii() && !b.is_ascii_control() && b != b';'
}

fn validate_attribute(value: &str) -> Result<(), SignedCookieError> {
    if !value.bytes().all(is_attribute_octet) {
        return Err(SignedCookieError::InvalidCookieAttribute(value.to_string()));
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<(), SignedCookieError> {
    if name.is_empty() || !name.bytes().all(is_token_char) {
        return Err(SignedCookieError::InvalidCookieName(name.to_string()));
    }
    Ok(())
}

/// Sign `value` and render a `Set-Cookie` header value for it.
pub fn set_cookie_header(
    signer: &Signer,
    name: &str,
    value: &[u8],
    options: &CookieOptions,
) -> Result<String, SignedCookieError> {
    validate_name(name)?;
    if !value.iter().copied().all(is_cookie_octet) {
        return Err(SignedCookieError::InvalidCookieValue);
    }
    for attribute in [&options.domain, &options.path].into_iter().flatten() {
        validate_attribute(attribute)?;
    }

    let token = signer.sign(value);
    // Every byte was checked to be ASCII above and the tag is ASCII.
    let token = String::from_utf8(token).map_err(|_| SignedCookieError::InvalidCookieValue)?;

    let mut header = format!("{name}={token}");
    if let Some(max_age) = options.max_age {
        header.push_str(&format!("; Max-Age={}", max_age.as_secs()));
    }
    if let Some(expires) = options.expires {
        header.push_str(&format!(
            "; Expires={}",
            expires.format("%a, %d %b %Y %H:%M:%S GMT")
        ));
    }
    if let Some(domain) = &options.domain {
        header.push_str(&format!("; Domain={domain}"));
    }
    if let Some(path) = &options.path {
        header.push_str(&format!("; Path={path}"));
    }
    if options.secure {
        header.push_str("; Secure");
    }
    if options.http_only {
        header.push_str("; HttpOnly");
    }
    Ok(header)
}

/// Find the first cookie called `name` in a `Cookie` request header.
pub fn find_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key.trim() != name {
            return None;
        }
        let value = value.trim();
        // RFC 6265 allows the value to be wrapped in double quotes.
        Some(
            value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value),
        )
    })
}

/// Look up cookie `name` in a `Cookie` request header and verify it.
///
/// Returns the payload the cookie was issued with.
pub fn verify_cookie_header<'a>(
    signer: &Signer,
    header: &'a str,
    name: &str,
) -> Result<&'a [u8], SignedCookieError> {
    let value = find_cookie(header, name)
        .ok_or_else(|| SignedCookieError::CookieNotFound(name.to_string()))?;
    signer.verify(value.as_bytes())
}
