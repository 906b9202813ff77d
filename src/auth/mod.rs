/*!
 * API key extraction
 *
 * Responsibility:
 * - Pull a candidate key out of `Authorization: ApiKey <key>` (no verification)
 * - Provide a case-insensitive header collection usable outside of a request
 *
 * Public API:
 * - Headers / HeaderLookup
 * - get_api_key / AuthError
 */

mod api_key;
mod headers;

pub use api_key::{API_KEY_SCHEME, AUTHORIZATION, AuthError, get_api_key};
pub use headers::{HeaderLookup, Headers};
