/*
 * Responsibility
 * - URL 構造を定義
 * - Approov が必要な範囲 (protected) と不要な範囲 (public) をここで決める
 */
use axum::{Router, routing::get};

use crate::api::handlers::{health::health, hello::hello};
use crate::state::AppState;

/// Routes that require a valid Approov token.
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/", get(hello))
}

/// Routes reachable without an Approov token (liveness probes).
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
