use thiserror::Error;

/// Error type for password operations.
///
/// Only hashing can fail; verification against a malformed or mismatching
/// hash is a normal `false` outcome, never an error.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
