use thiserror::Error;

/// Error for session lifecycle operations.
///
/// Only infrastructure failures surface here. Absent, expired, or
/// tampered sessions are normal values (`Session::anonymous`,
/// `Refresh::NoSession`), never errors.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error("Session creation failed: {0}")]
    EncodingFailed(#[from] auth::TokenError),
}
