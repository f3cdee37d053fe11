pub mod binding;
pub mod factory;
pub mod gate;
pub mod rejection;
pub mod secret;
pub mod token;

pub use binding::BindingChecker;
pub use factory::build_gate;
pub use gate::AttestationGate;
pub use rejection::Rejection;
pub use secret::{ApproovSecret, SecretError};
pub use token::{TokenVerifier, VerifiedClaims};
