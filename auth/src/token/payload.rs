use chrono::DateTime;
use chrono::Utc;

/// Session payload carried inside the signed token.
///
/// Payloads issued at login always carry a user id. The decoded form keeps
/// the field optional so a signed-but-partial token remains representable;
/// callers that require a user id treat its absence as a corrupt session,
/// which is a distinct failure mode from "no session".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPayload {
    /// Stable identifier of the user record this session belongs to
    pub user_id: Option<String>,

    /// Instant at or after which the payload is invalid
    pub expires_at: DateTime<Utc>,
}

impl SessionPayload {
    /// Create a payload for an authenticated user.
    ///
    /// # Arguments
    /// * `user_id` - User record identifier
    /// * `expires_at` - Absolute expiry of the session
    pub fn for_user(user_id: impl ToString, expires_at: DateTime<Utc>) -> Self {
        Self {
            user_id: Some(user_id.to_string()),
            expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_for_user() {
        let expires_at = Utc::now() + Duration::hours(1);
        let payload = SessionPayload::for_user("user123", expires_at);

        assert_eq!(payload.user_id, Some("user123".to_string()));
        assert_eq!(payload.expires_at, expires_at);
    }
}
