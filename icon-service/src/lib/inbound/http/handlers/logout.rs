use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::response::Redirect;
use axum::response::Response;

use crate::domain::routes::Route;
use crate::inbound::http::cookie::CookieSessionStore;
use crate::inbound::http::router::AppState;
use crate::user::ports::UserRepository;

/// Log out and return to the public home route.
///
/// The cookie removal is recorded on the store first, then attached to
/// the redirect response; logging out without a session is a no-op
/// that still clears the cookie.
pub async fn logout<UR: UserRepository>(
    State(state): State<AppState<UR>>,
    headers: HeaderMap,
) -> Response {
    let mut store = CookieSessionStore::from_headers(&headers, state.cookie_policy);
    state.sessions.delete_session(&mut store);

    let mut response = Redirect::to(Route::Home.as_path()).into_response();
    if let Some(cookie) = store.set_cookie_header() {
        response.headers_mut().insert(SET_COOKIE, cookie);
    }
    response
}
