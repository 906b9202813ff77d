//! `Authorization: ApiKey <key>` extraction.
//!
//! This only pulls a candidate key out of the header. Whether the key is any
//! good is decided by whoever calls `get_api_key`.

use tracing::debug;

use super::headers::HeaderLookup;

pub const AUTHORIZATION: &str = "Authorization";

/// Scheme token. Matched exactly, case included.
pub const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("no authorization header included")]
    NoAuthHeaderIncluded,
    #[error("malformed authorization header")]
    MalformedAuthHeader,
}

/// Extract the API key from the first `Authorization` header value.
///
/// The value is split on single ASCII spaces, so `"ApiKey  key"` (two spaces)
/// yields `Ok("")`: the second part is empty but the scheme is well formed.
/// Callers that treat an empty key as unauthenticated must check for it.
pub fn get_api_key<H>(headers: &H) -> Result<String, AuthError>
where
    H: HeaderLookup + ?Sized,
{
    let value = match headers.first_value(AUTHORIZATION) {
        Some(v) if !v.is_empty() => v,
        _ => return Err(AuthError::NoAuthHeaderIncluded),
    };

    let mut parts = value.split(' ');
    match (parts.next(), parts.next()) {
        (Some(API_KEY_SCHEME), Some(key)) => Ok(key.to_string()),
        _ => {
            debug!("authorization header without ApiKey scheme");
            Err(AuthError::MalformedAuthHeader)
        }
    }
}
