use chrono::DateTime;
use chrono::Utc;

/// Request-scoped boundary holding the session artifact.
///
/// Abstracts the cookie read/write surface so the session service stays
/// independent of the HTTP layer. Writes are buffered by implementations
/// and applied once when the response is built, so an abandoned request
/// leaves no partial cookie state behind.
pub trait SessionStore {
    /// Current session artifact, if the request carried one.
    fn get(&self) -> Option<String>;

    /// Record the session artifact with its transport expiry.
    fn set(&mut self, token: String, expires_at: DateTime<Utc>);

    /// Discard the session artifact.
    fn remove(&mut self);
}
