/*!
 * Approov claims extractor
 *
 * Responsibility:
 * - Approov middleware が検証した claims（ApproovClaims）を handler に提供する
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - ApproovClaims
 * - ApproovClaimsExtractor
 */

mod core;
mod types;

pub use self::core::ApproovClaimsExtractor;
pub use types::ApproovClaims;
