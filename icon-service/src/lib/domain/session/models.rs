use chrono::DateTime;
use chrono::Utc;

/// Resolved, trust-checked projection of the session cookie.
///
/// Request-scoped and never persisted; recomputed from the cookie on
/// every request by `SessionService::verify_session`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub is_authenticated: bool,
    pub user_id: Option<String>,
}

impl Session {
    /// Session backed by a verified token.
    ///
    /// `user_id` stays optional: a signed token without a subject is
    /// authenticated but corrupt, which the guard surfaces separately.
    pub fn authenticated(user_id: Option<String>) -> Self {
        Self {
            is_authenticated: true,
            user_id,
        }
    }

    /// The normal "no session" value. Absence is not an error.
    pub fn anonymous() -> Self {
        Self {
            is_authenticated: false,
            user_id: None,
        }
    }
}

/// User identity handed to a guarded handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub user_id: Option<String>,
}

/// Outcome of a sliding-expiration refresh attempt.
///
/// `NoSession` is a silent skip for requests that may or may not carry a
/// session, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Refresh {
    Refreshed { expires_at: DateTime<Utc> },
    NoSession,
}
