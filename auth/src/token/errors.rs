use thiserror::Error;

/// Error type for session token operations.
///
/// Only encoding surfaces an error. Decoding is fail-closed: every
/// input-driven failure collapses to `None` at the codec boundary.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode session token: {0}")]
    EncodingFailed(String),
}
