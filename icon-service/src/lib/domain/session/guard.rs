use std::future::Future;

use crate::domain::routes::Route;
use crate::session::models::SessionUser;
use crate::session::ports::SessionStore;
use crate::session::service::SessionService;

/// Options for a guarded handler.
#[derive(Debug, Clone, Copy)]
pub struct GuardOptions {
    /// Require a resolved user id on top of a valid session.
    pub require_user: bool,
}

impl Default for GuardOptions {
    fn default() -> Self {
        Self { require_user: true }
    }
}

/// Outcome of a guarded call.
///
/// Redirects are a tagged variant rather than a non-local exit; the HTTP
/// layer translates them into transport-level responses in one place.
#[derive(Debug, PartialEq)]
pub enum Guarded<T> {
    /// The handler ran; its result is returned unchanged.
    Value(T),
    /// The handler never ran; the caller must redirect.
    Redirect(Route),
    /// The handler never ran; structured server error, no redirect.
    Error { message: String },
}

/// Run a business handler only once a valid session is confirmed.
///
/// Unauthenticated requests become a redirect to the login route. An
/// authenticated session without a user id is a codec/storage
/// inconsistency, not a normal visitor, and surfaces as a structured
/// error instead of a redirect.
///
/// # Arguments
/// * `sessions` - Session service resolving the cookie
/// * `store` - Cookie boundary of the current request
/// * `options` - Guard options
/// * `handler` - Business handler receiving the resolved user
pub async fn with_session<S, F, Fut, T>(
    sessions: &SessionService,
    store: &S,
    options: GuardOptions,
    handler: F,
) -> Guarded<T>
where
    S: SessionStore,
    F: FnOnce(SessionUser) -> Fut,
    Fut: Future<Output = T>,
{
    let session = sessions.verify_session(store);

    if !session.is_authenticated {
        return Guarded::Redirect(Route::Login);
    }

    if options.require_user && session.user_id.is_none() {
        return Guarded::Error {
            message: "User session invalid".to_string(),
        };
    }

    Guarded::Value(
        handler(SessionUser {
            user_id: session.user_id,
        })
        .await,
    )
}
