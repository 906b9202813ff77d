/*
 * Responsibility
 * - The "authenticated request" context handlers see
 * - The middleware extracts the key and stores this in request extensions;
 *   handlers only ever receive this type
 */

/// API key presented by the caller.
///
/// - `key` is the raw credential; it must not be logged
/// - `fingerprint` is base64url(SHA-256(key)), safe for logs and responses
#[derive(Debug, Clone)]
pub struct ApiKeyCtx {
    pub key: String,
    pub fingerprint: String,
}

impl ApiKeyCtx {
    pub fn new(key: String) -> Self {
        let fingerprint = crate::services::fingerprint::key_fingerprint(&key);
        Self { key, fingerprint }
    }
}
