use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Redirect;
use axum::response::Response;

use crate::domain::routes;
use crate::domain::routes::Route;
use crate::domain::routes::RouteClass;
use crate::inbound::http::cookie::CookieSessionStore;
use crate::inbound::http::router::AppState;
use crate::session::models::Session;
use crate::user::ports::UserRepository;

/// Where the edge middleware sends a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    PassThrough,
    Redirect(Route),
}

/// Decision table for the edge middleware.
///
/// | session | route class      | action               |
/// |---------|------------------|----------------------|
/// | no      | protected        | redirect to login    |
/// | no      | public/neither   | pass through         |
/// | yes     | public           | redirect to dashboard|
/// | yes     | protected/neither| pass through         |
///
/// "Session" here means a resolved user id, so a signed-but-partial
/// token does not open protected routes. A request already at or under
/// the dashboard is never redirected there again.
pub fn decide(path: &str, session: &Session) -> RouteDecision {
    let signed_in = session.user_id.is_some();

    match routes::classify(path) {
        RouteClass::Protected if !signed_in => RouteDecision::Redirect(Route::Login),
        RouteClass::Public if signed_in && !routes::matches(path, Route::Dashboard) => {
            RouteDecision::Redirect(Route::Dashboard)
        }
        _ => RouteDecision::PassThrough,
    }
}

/// Edge middleware classifying every page request before its handler.
///
/// Reads the session cookie, resolves the session (absent or invalid
/// both count as "no session"), and either forwards the request or
/// issues the redirect from the decision table.
pub async fn classify_route<UR: UserRepository>(
    State(state): State<AppState<UR>>,
    req: Request,
    next: Next,
) -> Response {
    let store = CookieSessionStore::from_headers(req.headers(), state.cookie_policy);
    let session = state.sessions.verify_session(&store);
    let path = req.uri().path();

    match decide(path, &session) {
        RouteDecision::PassThrough => next.run(req).await,
        RouteDecision::Redirect(route) => {
            tracing::debug!(path, to = %route, "Edge middleware redirect");
            Redirect::to(route.as_path()).into_response()
        }
    }
}
