/// Why a request was denied by the Approov gate.
///
/// The reason is for server-side logs only. Every variant is answered with the
/// same bare 401 so a client cannot probe which check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("missing Approov token")]
    MissingToken,
    #[error("invalid Approov token")]
    InvalidSignature,
    #[error("expired Approov token")]
    Expired,
    #[error("missing token binding header")]
    MissingBindingHeader,
    #[error("token binding mismatch")]
    BindingMismatch,
}
