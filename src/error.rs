/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / JSON body)
 * - Approov の拒否理由 (Rejection) をクライアントに漏らさず 401 に揃える
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::services::approov::Rejection;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unauthorized")]
    Unauthorized,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Empty body: the caller must not learn which check failed.
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, Json(json!({}))).into_response(),
        }
    }
}

impl From<Rejection> for AppError {
    fn from(_: Rejection) -> Self {
        AppError::Unauthorized
    }
}
