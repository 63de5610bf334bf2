use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::response::Redirect;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use crate::domain::routes::Route;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::cookie::CookieSessionStore;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;

/// Log a user in and issue the session cookie.
///
/// Unknown email, invalid email format, and wrong password all answer
/// with the same "Invalid email or password". On success the session
/// cookie is attached to a redirect to the dashboard; the cookie write
/// is recorded before the redirect response is finalized.
pub async fn login<UR: UserRepository>(
    State(state): State<AppState<UR>>,
    headers: HeaderMap,
    Json(body): Json<LoginRequestBody>,
) -> Response {
    let Ok(email) = EmailAddress::new(body.email) else {
        return ApiError::from(UserError::InvalidCredentials).into_response();
    };

    let user = match state.accounts.login(&email, &body.password).await {
        Ok(user) => user,
        Err(e) => return ApiError::from(e).into_response(),
    };

    let mut store = CookieSessionStore::from_headers(&headers, state.cookie_policy);
    if let Err(e) = state
        .sessions
        .create_session(&mut store, &user.id.to_string())
    {
        tracing::error!(error = %e, "Session creation failed");
        return ApiError::InternalServerError("Session creation failed".to_string())
            .into_response();
    }

    tracing::info!(user_id = %user.id, "User logged in");

    let mut response = Redirect::to(Route::Dashboard.as_path()).into_response();
    if let Some(cookie) = store.set_cookie_header() {
        response.headers_mut().insert(SET_COOKIE, cookie);
    }
    response
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}
