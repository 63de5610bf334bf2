use auth::SessionPayload;
use auth::SessionTokenCodec;
use chrono::Duration;
use chrono::Utc;

use crate::session::errors::SessionError;
use crate::session::models::Refresh;
use crate::session::models::Session;
use crate::session::ports::SessionStore;

/// Session validity from creation.
const SESSION_TTL_HOURS: i64 = 1;

/// Extension granted by a sliding-expiration refresh.
const REFRESH_TTL_DAYS: i64 = 7;

/// Orchestrates the session lifecycle over the token codec and the
/// cookie boundary.
///
/// Holds the only shared state of the auth core: the signing key inside
/// the codec, loaded once at startup. Every operation is otherwise
/// request-scoped and works against the `SessionStore` it is given.
pub struct SessionService {
    codec: SessionTokenCodec,
}

impl SessionService {
    /// Create a session service with the signing secret.
    ///
    /// # Arguments
    /// * `secret` - Signing key material, injected by the composition root
    pub fn new(secret: &[u8]) -> Self {
        Self {
            codec: SessionTokenCodec::new(secret),
        }
    }

    /// Issue a session for a user and write it to the store.
    ///
    /// # Arguments
    /// * `store` - Cookie boundary of the current request
    /// * `user_id` - Identifier of the authenticated user
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed; session creation must
    ///   not silently no-op, so this propagates
    pub fn create_session(
        &self,
        store: &mut impl SessionStore,
        user_id: &str,
    ) -> Result<(), SessionError> {
        let expires_at = Utc::now() + Duration::hours(SESSION_TTL_HOURS);
        let token = self
            .codec
            .encode(&SessionPayload::for_user(user_id, expires_at))?;

        store.set(token, expires_at);
        Ok(())
    }

    /// Resolve the current session from the store.
    ///
    /// Absent cookie and failed decode (expired, tampered, malformed) are
    /// both the anonymous session; this never fails for "no session".
    pub fn verify_session(&self, store: &impl SessionStore) -> Session {
        let Some(token) = store.get() else {
            return Session::anonymous();
        };

        match self.codec.decode(&token) {
            Some(payload) => Session::authenticated(payload.user_id),
            None => Session::anonymous(),
        }
    }

    /// Extend the current session's validity window.
    ///
    /// Requests without a decodable session get `Refresh::NoSession` and
    /// no write. Otherwise the payload is re-signed with a fresh expiry
    /// and the cookie rewritten, keeping the embedded claim and the
    /// transport expiry consistent.
    ///
    /// # Errors
    /// * `EncodingFailed` - Re-signing the payload failed
    pub fn refresh_session(&self, store: &mut impl SessionStore) -> Result<Refresh, SessionError> {
        let Some(token) = store.get() else {
            return Ok(Refresh::NoSession);
        };
        let Some(payload) = self.codec.decode(&token) else {
            return Ok(Refresh::NoSession);
        };

        let expires_at = Utc::now() + Duration::days(REFRESH_TTL_DAYS);
        let renewed = self.codec.encode(&SessionPayload {
            user_id: payload.user_id,
            expires_at,
        })?;

        store.set(renewed, expires_at);
        Ok(Refresh::Refreshed { expires_at })
    }

    /// Destroy the session.
    ///
    /// Removes the cookie; the caller issues the redirect to the public
    /// home route after the removal is recorded.
    pub fn delete_session(&self, store: &mut impl SessionStore) {
        store.remove();
    }
}
