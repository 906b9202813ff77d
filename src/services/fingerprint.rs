//! Stable, non-reversible identifier for an API key.
//!
//! Logs and responses carry this instead of the raw key.

use base64::Engine as _;
use sha2::{Digest, Sha256};

/// base64url(SHA-256(key)), unpadded.
pub fn key_fingerprint(key: &str) -> String {
    let digest = Sha256::digest(key.as_bytes());
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(digest)
}
