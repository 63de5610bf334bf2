use chrono::DateTime;
use chrono::Utc;
use http::header::COOKIE;
use http::HeaderMap;
use http::HeaderValue;

use crate::session::ports::SessionStore;

/// Reserved name of the session cookie.
pub const SESSION_COOKIE_NAME: &str = "session";

/// Transport attributes for the session cookie.
#[derive(Debug, Clone, Copy)]
pub struct CookiePolicy {
    /// Mark the cookie `Secure`. On in production, off for local HTTP.
    pub secure: bool,
}

/// Pending cookie mutation, applied once when the response is built.
#[derive(Debug, Clone)]
enum PendingWrite {
    Set {
        token: String,
        expires_at: DateTime<Utc>,
    },
    Clear,
}

/// Cookie-backed `SessionStore` for one request/response cycle.
///
/// Reads the artifact from the request headers up front; writes are
/// buffered so an aborted request emits nothing. `get` reflects a
/// pending write, keeping create-then-verify coherent within a request.
pub struct CookieSessionStore {
    value: Option<String>,
    pending: Option<PendingWrite>,
    policy: CookiePolicy,
}

impl CookieSessionStore {
    /// Build the store from the request headers.
    pub fn from_headers(headers: &HeaderMap, policy: CookiePolicy) -> Self {
        Self {
            value: read_session_cookie(headers),
            pending: None,
            policy,
        }
    }

    /// `Set-Cookie` header for the buffered write, if any.
    ///
    /// Attributes follow the session artifact contract: HttpOnly,
    /// SameSite=Lax, Path=/, expiry mirroring the payload, Secure when
    /// the policy says so. Clearing uses Max-Age=0.
    pub fn set_cookie_header(&self) -> Option<HeaderValue> {
        let cookie = match &self.pending {
            None => return None,
            Some(PendingWrite::Set { token, expires_at }) => {
                let max_age = (*expires_at - Utc::now()).num_seconds().max(0);
                let expires = expires_at.format("%a, %d %b %Y %H:%M:%S GMT");
                format!(
                    "{SESSION_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax; \
                     Max-Age={max_age}; Expires={expires}"
                )
            }
            Some(PendingWrite::Clear) => {
                format!("{SESSION_COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
            }
        };

        let cookie = if self.policy.secure {
            format!("{cookie}; Secure")
        } else {
            cookie
        };

        match HeaderValue::from_str(&cookie) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!(error = %e, "Session cookie is not a valid header value");
                None
            }
        }
    }
}

impl SessionStore for CookieSessionStore {
    fn get(&self) -> Option<String> {
        match &self.pending {
            Some(PendingWrite::Set { token, .. }) => Some(token.clone()),
            Some(PendingWrite::Clear) => None,
            None => self.value.clone(),
        }
    }

    fn set(&mut self, token: String, expires_at: DateTime<Utc>) {
        self.pending = Some(PendingWrite::Set { token, expires_at });
    }

    fn remove(&mut self) {
        self.pending = Some(PendingWrite::Clear);
    }
}

/// Extract the session cookie value from the request headers.
fn read_session_cookie(headers: &HeaderMap) -> Option<String> {
    let header = headers.get(COOKIE)?;
    let value = header.to_str().ok()?;

    for pair in value.split(';') {
        // Pairs without an '=' (emitted by some clients) are skipped,
        // not treated as the end of the header
        let Some((key, val)) = pair.trim().split_once('=') else {
            continue;
        };
        if key.trim() == SESSION_COOKIE_NAME {
            return Some(val.trim().to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    const POLICY: CookiePolicy = CookiePolicy { secure: false };

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_reads_session_cookie() {
        let headers = headers_with_cookie("theme=dark; session=tok123; lang=en");
        let store = CookieSessionStore::from_headers(&headers, POLICY);

        assert_eq!(store.get(), Some("tok123".to_string()));
    }

    #[test]
    fn test_skips_pairs_without_a_value() {
        let headers = headers_with_cookie("foo; session=tok123");
        let store = CookieSessionStore::from_headers(&headers, POLICY);
        assert_eq!(store.get(), Some("tok123".to_string()));

        let headers = headers_with_cookie("foo; bar; theme=dark");
        let store = CookieSessionStore::from_headers(&headers, POLICY);
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_missing_cookie_is_none() {
        let store = CookieSessionStore::from_headers(&HeaderMap::new(), POLICY);
        assert_eq!(store.get(), None);

        let headers = headers_with_cookie("theme=dark");
        let store = CookieSessionStore::from_headers(&headers, POLICY);
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_set_buffers_and_builds_header() {
        let mut store = CookieSessionStore::from_headers(&HeaderMap::new(), POLICY);
        assert!(store.set_cookie_header().is_none());

        store.set("tok123".to_string(), Utc::now() + Duration::hours(1));
        assert_eq!(store.get(), Some("tok123".to_string()));

        let header = store.set_cookie_header().expect("Expected a Set-Cookie");
        let header = header.to_str().unwrap();
        assert!(header.starts_with("session=tok123; "));
        assert!(header.contains("HttpOnly"));
        assert!(header.contains("SameSite=Lax"));
        assert!(header.contains("Path=/"));
        let max_age: i64 = header
            .split("Max-Age=")
            .nth(1)
            .and_then(|rest| rest.split(';').next())
            .unwrap()
            .parse()
            .unwrap();
        assert!((3590..=3600).contains(&max_age));
        assert!(!header.contains("Secure"));
    }

    #[test]
    fn test_secure_policy_appends_secure() {
        let mut store =
            CookieSessionStore::from_headers(&HeaderMap::new(), CookiePolicy { secure: true });
        store.set("tok123".to_string(), Utc::now() + Duration::hours(1));

        let header = store.set_cookie_header().unwrap();
        assert!(header.to_str().unwrap().ends_with("; Secure"));
    }

    #[test]
    fn test_remove_clears_and_expires_cookie() {
        let headers = headers_with_cookie("session=tok123");
        let mut store = CookieSessionStore::from_headers(&headers, POLICY);

        store.remove();
        assert_eq!(store.get(), None);

        let header = store.set_cookie_header().unwrap();
        let header = header.to_str().unwrap();
        assert!(header.starts_with("session=; "));
        assert!(header.contains("Max-Age=0"));
    }
}
