use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::AppState;

use super::ApproovClaims;

/// Handler で ApproovClaims を受け取るための extractor
/// middleware が ApproovClaims を request.extensions() に insert 済みである前提
/// 見つからない場合は 401 を返す（Approov middleware が掛かっていないルート）
pub struct ApproovClaimsExtractor(pub ApproovClaims);

impl FromRequestParts<AppState> for ApproovClaimsExtractor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ApproovClaims>()
            .cloned()
            .map(ApproovClaimsExtractor)
            .ok_or(AppError::Unauthorized)
    }
}
