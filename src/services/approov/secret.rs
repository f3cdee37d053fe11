use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

#[derive(Debug, thiserror::Error)]
pub enum SecretError {
    #[error("secret is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("secret decodes to zero bytes")]
    Empty,
}

/// Shared HMAC secret used to verify Approov tokens.
///
/// Decoded once at startup and never mutated. Rotating it means building a new
/// gate (in practice, restarting the process).
#[derive(Clone)]
pub struct ApproovSecret(Vec<u8>);

impl ApproovSecret {
    /// Decode the secret as printed by `approov secret -get` (standard base64).
    pub fn from_base64(encoded: &str) -> Result<Self, SecretError> {
        let bytes = STANDARD.decode(encoded.trim())?;
        Self::from_bytes(bytes)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, SecretError> {
        if bytes.is_empty() {
            return Err(SecretError::Empty);
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for ApproovSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("ApproovSecret")
            .field("len", &self.0.len())
            .finish()
    }
}
