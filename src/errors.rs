use thiserror::Error;

/// All errors that can occur in SealToken.
///
/// The three core kinds (`MalformedToken`, `AuthenticationFailure`,
/// `InvalidInput`) carry generic messages on purpose: a decrypt failure
/// must not tell the caller which part of the token was wrong.
#[derive(Debug, Error)]
pub enum SealTokenError {
    // --- Core errors ---
    #[error("Invalid token — the token is malformed or incomplete")]
    MalformedToken,

    #[error("Decryption failed — wrong password or corrupted data")]
    AuthenticationFailure,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl SealTokenError {
    /// True for the failures a user hits in normal decrypt use
    /// (typo in the password, truncated paste).
    pub fn is_decrypt_failure(&self) -> bool {
        matches!(self, Self::MalformedToken | Self::AuthenticationFailure)
    }
}

/// Convenience type alias for SealToken results.
pub type Result<T> = std::result::Result<T, SealTokenError>;
