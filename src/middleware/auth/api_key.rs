//! `Authorization: ApiKey <key>` → ApiKeyCtx in request extensions.
//!
//! The key is only extracted here, never checked against a store. Handlers
//! behind this layer can rely on a non-empty key being present.

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::ApiKeyCtx;
use crate::auth;
use crate::error::AppError;
use crate::state::AppState;

/// Put the routes registered so far on `router` behind api key extraction.
///
/// Uses `route_layer`, so unmatched paths still fall through to 404.
pub fn apply(router: Router<AppState>) -> Router<AppState> {
    router.route_layer(middleware::from_fn(api_key_middleware))
}

async fn api_key_middleware(
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let key = match auth::get_api_key(req.headers()) {
        Ok(key) => key,
        Err(err) => {
            tracing::warn!(error = %err, path = %req.uri().path(), "api key extraction failed");
            return Err(err.into());
        }
    };

    // "ApiKey  <key>" (doubled space) extracts as an empty key without an error.
    if key.is_empty() {
        tracing::warn!(path = %req.uri().path(), "empty api key");
        return Err(AppError::unauthorized("empty api key"));
    }

    let ctx = ApiKeyCtx::new(key);
    tracing::debug!(fingerprint = %ctx.fingerprint, "api key accepted");

    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}
