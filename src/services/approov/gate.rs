use axum::http::{HeaderMap, HeaderName};

use super::binding::BindingChecker;
use super::rejection::Rejection;
use super::token::{TokenVerifier, VerifiedClaims};

/// The Approov checks, run in a fixed order for every protected request:
///
/// 1. token: signature + expiry of the token header
/// 2. binding (optional): `pay` claim against the binding header
///
/// Binding never runs before the token is verified; `BindingChecker::check`
/// needs `VerifiedClaims`, which only the verifier produces.
#[derive(Debug, Clone)]
pub struct AttestationGate {
    verifier: TokenVerifier,
    token_header: HeaderName,
    binding: Option<BindingChecker>,
}

impl AttestationGate {
    pub fn new(
        verifier: TokenVerifier,
        token_header: HeaderName,
        binding: Option<BindingChecker>,
    ) -> Self {
        Self {
            verifier,
            token_header,
            binding,
        }
    }

    pub fn token_header(&self) -> &HeaderName {
        &self.token_header
    }

    pub fn binding_enabled(&self) -> bool {
        self.binding.is_some()
    }

    pub fn binding_header(&self) -> Option<&HeaderName> {
        self.binding.as_ref().map(BindingChecker::header)
    }

    /// Run every stage against the request headers.
    ///
    /// Returns the verified claims when the request may be forwarded, or the
    /// first rejection met.
    pub fn check(&self, headers: &HeaderMap) -> Result<VerifiedClaims, Rejection> {
        let token = match headers.get(&self.token_header) {
            Some(value) => Some(value.to_str().map_err(|_| Rejection::InvalidSignature)?),
            None => None,
        };

        let claims = self.verifier.verify(token)?;

        if let Some(binding) = &self.binding {
            let value = headers.get(binding.header()).map(|v| v.as_bytes());
            binding.check(&claims, value)?;
        }

        Ok(claims)
    }
}
