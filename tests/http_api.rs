use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::Response,
};
use serde_json::Value;
use tower::ServiceExt;

use apikey_gate::{
    app::build_router,
    config::{AppEnv, Config},
    services::fingerprint::key_fingerprint,
    state::AppState,
};

fn app() -> Router {
    build_router(AppState::new(), &Config::default())
}

fn production(origins: &[&str]) -> Config {
    Config {
        app_env: AppEnv::Production,
        cors_allowed_origins: origins.iter().map(|s| s.to_string()).collect(),
        ..Config::default()
    }
}

async fn get_with_origin(config: &Config, origin: &str) -> Response {
    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, origin)
        .body(Body::empty())
        .unwrap();

    build_router(AppState::new(), config)
        .oneshot(request)
        .await
        .unwrap()
}

async fn get(uri: &str, authorization: &[&str]) -> Response {
    let mut builder = Request::builder().uri(uri);
    for value in authorization {
        builder = builder.header(header::AUTHORIZATION, *value);
    }
    app()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_needs_no_key() {
    for uri in ["/health", "/api/v1/health"] {
        let response = get(uri, &[]).await;

        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_eq!(json(response).await["status"], "ok");
    }
}

#[tokio::test]
async fn whoami_returns_fingerprint_of_presented_key() {
    let response = get("/api/v1/whoami", &["ApiKey test-api-key-abc123"]).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json(response).await;
    assert_eq!(body["scheme"], "ApiKey");
    assert_eq!(body["key_fingerprint"], key_fingerprint("test-api-key-abc123"));
}

#[tokio::test]
async fn whoami_uses_first_authorization_value() {
    let response = get("/api/v1/whoami", &["ApiKey first-key", "ApiKey second-key"]).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json(response).await["key_fingerprint"], key_fingerprint("first-key"));
}

#[tokio::test]
async fn missing_header_is_unauthorized() {
    let response = get("/api/v1/whoami", &[]).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers()[header::WWW_AUTHENTICATE], "ApiKey");
    let body = json(response).await;
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
    assert_eq!(body["error"]["message"], "no authorization header included");
}

#[tokio::test]
async fn malformed_header_is_unauthorized() {
    for value in ["Bearer some-token", "apikey wrong-key", "ApiKey"] {
        let response = get("/api/v1/whoami", &[value]).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{value}");
        assert_eq!(
            json(response).await["error"]["message"],
            "malformed authorization header"
        );
    }
}

#[tokio::test]
async fn empty_key_from_doubled_space_is_unauthorized() {
    let response = get("/api/v1/whoami", &["ApiKey  mykey123"]).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json(response).await["error"]["message"], "empty api key");
}

#[tokio::test]
async fn unknown_route_is_not_found_without_key() {
    let response = get("/api/v1/nope", &[]).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn responses_carry_request_id_and_security_headers() {
    let response = get("/health", &[]).await;

    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");
}

#[tokio::test]
async fn caller_request_id_is_propagated() {
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "req-123")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-request-id"], "req-123");
}

#[tokio::test]
async fn production_cors_echoes_allowlisted_origin_only() {
    let config = production(&["https://app.example"]);

    let allowed = get_with_origin(&config, "https://app.example").await;
    assert_eq!(
        allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://app.example"
    );

    let foreign = get_with_origin(&config, "https://evil.example").await;
    assert_eq!(foreign.status(), StatusCode::OK);
    assert!(!foreign.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn production_cors_wildcard_entry_builds_and_matches_nothing() {
    let config = production(&["*"]);

    let response = get_with_origin(&config, "https://evil.example").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(!response.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn development_cors_allows_any_origin() {
    let response = get_with_origin(&Config::default(), "https://anywhere.example").await;

    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn oversized_body_is_rejected_with_413() {
    let config = Config {
        request_body_limit_bytes: 4,
        ..Config::default()
    };
    let request = Request::builder()
        .uri("/health")
        .header(header::CONTENT_LENGTH, "16")
        .body(Body::from("0123456789abcdef"))
        .unwrap();

    let response = build_router(AppState::new(), &config)
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
