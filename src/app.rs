/*
 * Responsibility
 * - Config読み込み → AttestationGate 生成 → Router 組み立て
 * - Middleware の適用 (Approov / security headers / http)
 * - axum::serve() で起動
 */
use std::{panic, process};

use anyhow::Result;
use axum::Router;
use axum::http::header;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::config::Config;
use crate::middleware;
use crate::services::approov::build_gate;
use crate::state::AppState;

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,approov_gate=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        // Development: crash the whole process so we notice immediately.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();

    // No valid secret, no traffic: the error ends the process before bind().
    let config = Config::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "invalid configuration, refusing to start");
    })?;

    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        token_header = %config.token_header,
        token_binding = config.token_binding_enabled,
        token_binding_header = %config.token_binding_header,
        "starting Approov-protected API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn build_state(config: &Config) -> AppState {
    AppState::new(build_gate(config))
}

/// Assemble the router.
///
/// Request order, outermost first: http (request id, sensitive headers,
/// trace, limits) → security headers → Approov gate (protected routes
/// only) → handler.
pub fn build_router(state: AppState) -> Router {
    let mut sensitive = vec![state.gate.token_header().clone(), header::AUTHORIZATION];
    if let Some(binding_header) = state.gate.binding_header() {
        sensitive.push(binding_header.clone());
    }

    let protected = middleware::approov::apply(api::protected_routes(), state.clone());

    let router = Router::new()
        .merge(api::public_routes())
        .merge(protected)
        .with_state(state);

    let router = middleware::security_headers::apply(router);
    middleware::http::apply(router, sensitive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use http_body_util::BodyExt;
    use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
    use serde_json::{Value, json};
    use std::collections::HashMap;
    use tower::ServiceExt;

    const SECRET: &[u8] = b"approov-e2e-secret";
    const SECRET_BASE64: &str = "YXBwcm9vdi1lMmUtc2VjcmV0";
    // base64(SHA-256("Bearer abc"))
    const BEARER_ABC_PAY: &str = "w1Xc6WwWEogNEZQP/dkBTThsJT4MNlKmzQanIm970rY=";

    fn test_app(binding: bool) -> Router {
        let env: HashMap<&str, &str> = HashMap::from([
            ("APPROOV_BASE64_SECRET", SECRET_BASE64),
            (
                "APPROOV_TOKEN_BINDING_ENABLED",
                if binding { "true" } else { "false" },
            ),
        ]);
        let config =
            Config::from_lookup(|key| env.get(key).map(|v| v.to_string())).expect("valid config");

        build_router(build_state(&config))
    }

    fn token(claims: &Value) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap()
    }

    fn exp_in(seconds: i64) -> i64 {
        chrono::Utc::now().timestamp() + seconds
    }

    fn get(uri: &str, headers: &[(&str, &str)]) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_json(resp: Response) -> Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn valid_token_is_forwarded_when_binding_is_disabled() {
        let t = token(&json!({ "exp": exp_in(300), "did": "device-1" }));

        let resp = test_app(false)
            .oneshot(get("/", &[("Approov-Token", t.as_str())]))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, json!({ "message": "Hello World" }));
    }

    #[tokio::test]
    async fn missing_token_is_401_with_empty_body() {
        let resp = test_app(false).oneshot(get("/", &[])).await.unwrap();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(resp).await, json!({}));
    }

    #[tokio::test]
    async fn expired_token_is_401_with_empty_body() {
        let t = token(&json!({ "exp": exp_in(-300) }));

        let resp = test_app(false)
            .oneshot(get("/", &[("Approov-Token", t.as_str())]))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(resp).await, json!({}));
    }

    #[tokio::test]
    async fn token_signed_with_another_secret_is_401() {
        let t = encode(
            &Header::new(Algorithm::HS256),
            &json!({ "exp": exp_in(300) }),
            &EncodingKey::from_secret(b"not-the-approov-secret"),
        )
        .unwrap();

        let resp = test_app(false)
            .oneshot(get("/", &[("Approov-Token", t.as_str())]))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn matching_binding_header_is_forwarded() {
        let t = token(&json!({ "exp": exp_in(300), "pay": BEARER_ABC_PAY }));

        let resp = test_app(true)
            .oneshot(get(
                "/",
                &[("Approov-Token", t.as_str()), ("Authorization", "Bearer abc")],
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn mismatched_binding_header_is_401() {
        let t = token(&json!({ "exp": exp_in(300), "pay": BEARER_ABC_PAY }));

        let resp = test_app(true)
            .oneshot(get(
                "/",
                &[("Approov-Token", t.as_str()), ("Authorization", "Bearer xyz")],
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(resp).await, json!({}));
    }

    #[tokio::test]
    async fn failover_token_without_pay_is_forwarded_with_binding_enabled() {
        let t = token(&json!({ "exp": exp_in(300) }));

        let resp = test_app(true)
            .oneshot(get("/", &[("Approov-Token", t.as_str())]))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn health_needs_no_token() {
        let resp = test_app(true).oneshot(get("/health", &[])).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn denied_responses_carry_request_id_and_security_headers() {
        let resp = test_app(false).oneshot(get("/", &[])).await.unwrap();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(resp.headers().contains_key("x-request-id"));
        assert_eq!(resp.headers()["cache-control"], "no-store");
        assert_eq!(resp.headers()["x-content-type-options"], "nosniff");
    }
}
