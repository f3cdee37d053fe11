/*
 * Responsibility
 * - Handler から見える「Approov 検証済みコンテキスト」の型
 * - middleware が検証して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - 署名/期限/token binding の検証は services::approov の責務
 * - リクエストごとに作られ、リクエスト終了で捨てられる（共有しない）
 */

use serde_json::Value;

use crate::services::approov::VerifiedClaims;

/// Approov token の claims（検証済み）
///
/// - `did` は Approov の device id（ログ相関用）
#[derive(Debug, Clone)]
pub struct ApproovClaims {
    claims: VerifiedClaims,
}

impl ApproovClaims {
    pub fn new(claims: VerifiedClaims) -> Self {
        Self { claims }
    }

    pub fn device_id(&self) -> Option<&str> {
        self.claims.get("did").and_then(Value::as_str)
    }
}
