use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde_json::{Map, Value};

use super::rejection::Rejection;
use super::secret::ApproovSecret;

/// Claims of an Approov token that passed signature and expiry checks.
///
/// Only `TokenVerifier::verify` builds this type, so holding one proves the
/// token was verified under the current secret.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedClaims(Map<String, Value>);

impl VerifiedClaims {
    pub(super) fn from_verified(claims: Map<String, Value>) -> Self {
        Self(claims)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let exp = self.0.get("exp")?.as_i64()?;
        DateTime::from_timestamp(exp, 0)
    }
}

/// HS256 Approov token verifier.
///
/// - The algorithm is pinned; the token's own `alg` header is never trusted.
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("TokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenVerifier {
    pub fn new(secret: &ApproovSecret, leeway_seconds: u64) -> Self {
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        // `Validation::new` restricts the accepted algorithms to exactly HS256
        // and makes `exp` a required claim.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = leeway_seconds;
        // Approov tokens carry no audience this service could check.
        validation.validate_aud = false;
        // A token whose `nbf` is still in the future is not valid yet.
        validation.validate_nbf = true;

        Self {
            decoding_key,
            validation,
        }
    }

    /// Verify the raw value of the token header.
    ///
    /// `None` or an empty string is `MissingToken` and never reaches the
    /// signature check. An expired token signed with the wrong secret is
    /// reported as `InvalidSignature`, since the signature is checked first.
    pub fn verify(&self, token: Option<&str>) -> Result<VerifiedClaims, Rejection> {
        let token = match token {
            Some(t) if !t.is_empty() => t,
            _ => return Err(Rejection::MissingToken),
        };

        let data = jsonwebtoken::decode::<Map<String, Value>>(
            token,
            &self.decoding_key,
            &self.validation,
        )
        .map_err(map_jwt_error)?;

        Ok(VerifiedClaims::from_verified(data.claims))
    }
}

fn map_jwt_error(error: jsonwebtoken::errors::Error) -> Rejection {
    match error.kind() {
        ErrorKind::ExpiredSignature => Rejection::Expired,
        // Bad signature, foreign/`none` alg, broken segments, missing `exp`,
        // `nbf` in the future.
        _ => Rejection::InvalidSignature,
    }
}
