/*
 * Responsibility
 * - GET /whoami: echo back which key the caller presented, by fingerprint only
 */
use axum::Json;
use serde::Serialize;

use crate::api::v1::extractors::ApiKeyCtxExtractor;
use crate::auth::API_KEY_SCHEME;

#[derive(Debug, Serialize)]
pub struct WhoAmIResponse {
    pub scheme: &'static str,
    pub key_fingerprint: String,
}

pub async fn whoami(ApiKeyCtxExtractor(ctx): ApiKeyCtxExtractor) -> Json<WhoAmIResponse> {
    tracing::debug!(fingerprint = %ctx.fingerprint, "whoami");

    Json(WhoAmIResponse {
        scheme: API_KEY_SCHEME,
        key_fingerprint: ctx.fingerprint,
    })
}
