/*
 * Responsibility
 * - v1 URL layout
 * - Decide which routes sit behind the api key middleware
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::{health::health, whoami::whoami};
use crate::middleware;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    let protected = Router::new().route("/whoami", get(whoami));
    let protected = middleware::auth::api_key::apply(protected);

    Router::new().route("/health", get(health)).merge(protected)
}
