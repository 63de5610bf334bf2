use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Response;
use serde::Serialize;

use super::guarded_response;
use crate::inbound::http::cookie::CookieSessionStore;
use crate::inbound::http::router::AppState;
use crate::session::guard::with_session;
use crate::session::guard::GuardOptions;
use crate::user::ports::UserRepository;

/// Identity of the current session, gated by the session guard.
pub async fn current_user<UR: UserRepository>(
    State(state): State<AppState<UR>>,
    headers: HeaderMap,
) -> Response {
    let store = CookieSessionStore::from_headers(&headers, state.cookie_policy);

    let outcome = with_session(
        &state.sessions,
        &store,
        GuardOptions::default(),
        |user| async move {
            CurrentUserData {
                // require_user guarantees the id is present
                user_id: user.user_id.unwrap_or_default(),
            }
        },
    )
    .await;

    guarded_response(outcome)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUserData {
    pub user_id: String,
}
