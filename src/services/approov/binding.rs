//! Approov token binding.
//!
//! The mobile client hashes one request header (usually `Authorization`) and
//! the Approov service embeds `base64(SHA-256(header))` in the token as the
//! `pay` claim. Recomputing that value here ties the token to the request that
//! carries it, so a token lifted from one request cannot be replayed with a
//! different credential.

use axum::http::HeaderName;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use super::rejection::Rejection;
use super::token::VerifiedClaims;

/// Name of the claim holding the binding hash.
pub const PAY_CLAIM: &str = "pay";

#[derive(Debug, Clone)]
pub struct BindingChecker {
    header: HeaderName,
}

impl BindingChecker {
    pub fn new(header: HeaderName) -> Self {
        Self { header }
    }

    /// Header whose raw value the client hashed into `pay`.
    pub fn header(&self) -> &HeaderName {
        &self.header
    }

    /// Check that verified `claims` are bound to `binding_value`.
    ///
    /// Tokens without `pay` pass: the Approov failover service issues tokens
    /// without it, and those must keep working.
    pub fn check(
        &self,
        claims: &VerifiedClaims,
        binding_value: Option<&[u8]>,
    ) -> Result<(), Rejection> {
        let Some(pay) = claims.get(PAY_CLAIM) else {
            return Ok(());
        };

        let binding_value = match binding_value {
            Some(v) if !v.is_empty() => v,
            _ => return Err(Rejection::MissingBindingHeader),
        };

        let expected = pay.as_str().ok_or(Rejection::BindingMismatch)?;
        let actual = compute_binding_value(binding_value);

        if constant_time_eq(actual.as_bytes(), expected.as_bytes()) {
            Ok(())
        } else {
            Err(Rejection::BindingMismatch)
        }
    }
}

/// base64(SHA-256(raw header bytes)), the form the client puts in `pay`.
pub fn compute_binding_value(raw: &[u8]) -> String {
    let digest = Sha256::digest(raw);
    STANDARD.encode(digest)
}

fn constant_time_eq(actual: &[u8], expected: &[u8]) -> bool {
    // Slices of different length compare unequal.
    actual.ct_eq(expected).into()
}
