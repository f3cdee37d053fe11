//! Approov token (+ optional token binding) check → ApproovClaims を extensions に入れる
//!
//! すべての判定は `AttestationGate` が決まった順序で行う。ここは HTTP との接続だけ：
//! - 拒否: 理由は tracing にだけ出し、クライアントには 401 `{}` を返す
//! - 通過: 検証済み claims を request extensions に載せて次へ

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::extractors::ApproovClaims;
use crate::error::AppError;
use crate::state::AppState;

/// Protect every route of `router` with the Approov gate.
///
/// 例：
/// ```ignore
/// let protected = middleware::approov::apply(api::protected_routes(), state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.layer(middleware::from_fn_with_state(state, approov_middleware))
}

async fn approov_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let claims = match state.gate.check(req.headers()) {
        Ok(claims) => claims,
        Err(rejection) => {
            tracing::warn!(
                reason = %rejection,
                method = %req.method(),
                path = %req.uri().path(),
                "approov check failed"
            );
            return Err(rejection.into());
        }
    };

    tracing::debug!(
        expires_at = ?claims.expires_at(),
        binding = state.gate.binding_enabled(),
        "approov check passed"
    );

    req.extensions_mut().insert(ApproovClaims::new(claims));

    Ok(next.run(req).await)
}
