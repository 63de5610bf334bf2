use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::cookie::CookieSessionStore;
use crate::inbound::http::router::AppState;
use crate::session::models::Refresh;
use crate::user::ports::UserRepository;

/// Sliding-expiration refresh.
///
/// Requests without a usable session get `refreshed: false` and no
/// cookie write; this endpoint may be called optimistically by clients
/// that do not know whether they are logged in.
pub async fn refresh<UR: UserRepository>(
    State(state): State<AppState<UR>>,
    headers: HeaderMap,
) -> Response {
    let mut store = CookieSessionStore::from_headers(&headers, state.cookie_policy);

    match state.sessions.refresh_session(&mut store) {
        Ok(Refresh::Refreshed { expires_at }) => {
            let mut response = ApiSuccess::new(
                StatusCode::OK,
                RefreshResponseData {
                    refreshed: true,
                    expires_at: Some(expires_at),
                },
            )
            .into_response();
            if let Some(cookie) = store.set_cookie_header() {
                response.headers_mut().insert(SET_COOKIE, cookie);
            }
            response
        }
        Ok(Refresh::NoSession) => ApiSuccess::new(
            StatusCode::OK,
            RefreshResponseData {
                refreshed: false,
                expires_at: None,
            },
        )
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Session refresh failed");
            ApiError::InternalServerError("Session refresh failed".to_string()).into_response()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshResponseData {
    pub refreshed: bool,
    pub expires_at: Option<DateTime<Utc>>,
}
