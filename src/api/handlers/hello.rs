/*
 * Responsibility
 * - GET / (Approov で保護されたサンプル)
 * - middleware が載せた ApproovClaims を受け取る例
 */
use axum::Json;

use crate::api::dto::message::MessageResponse;
use crate::api::extractors::ApproovClaimsExtractor;

pub async fn hello(
    ApproovClaimsExtractor(claims): ApproovClaimsExtractor,
) -> Json<MessageResponse> {
    tracing::debug!(device_id = claims.device_id().unwrap_or("-"), "hello");

    Json(MessageResponse::new("Hello World"))
}
