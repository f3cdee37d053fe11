/// Factory: build the `AttestationGate` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::approov::{AttestationGate, BindingChecker, TokenVerifier};

pub fn build_gate(config: &Config) -> Arc<AttestationGate> {
    let verifier = TokenVerifier::new(&config.approov_secret, config.token_leeway_seconds);

    let binding = config
        .token_binding_enabled
        .then(|| BindingChecker::new(config.token_binding_header.clone()));

    Arc::new(AttestationGate::new(
        verifier,
        config.token_header.clone(),
        binding,
    ))
}
