use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::login::login;
use super::handlers::logout::logout;
use super::handlers::me::current_user;
use super::handlers::pages;
use super::handlers::refresh::refresh;
use super::handlers::register::register;
use super::middleware::classify_route;
use crate::domain::routes::Route;
use crate::domain::user::service::AccountService;
use crate::inbound::http::cookie::CookiePolicy;
use crate::session::service::SessionService;
use crate::user::ports::UserRepository;

pub struct AppState<UR: UserRepository> {
    pub accounts: Arc<AccountService<UR>>,
    pub sessions: Arc<SessionService>,
    pub cookie_policy: CookiePolicy,
}

// Manual impl: deriving Clone would require UR: Clone
impl<UR: UserRepository> Clone for AppState<UR> {
    fn clone(&self) -> Self {
        Self {
            accounts: Arc::clone(&self.accounts),
            sessions: Arc::clone(&self.sessions),
            cookie_policy: self.cookie_policy,
        }
    }
}

pub fn create_router<UR: UserRepository>(
    accounts: Arc<AccountService<UR>>,
    sessions: Arc<SessionService>,
    cookie_policy: CookiePolicy,
) -> Router {
    let state = AppState {
        accounts,
        sessions,
        cookie_policy,
    };

    // Pages run behind the edge middleware; /api routes are outside the
    // matcher and rely on the session guard instead.
    let page_routes = Router::new()
        .route(Route::Home.as_path(), get(pages::home))
        .route(Route::Login.as_path(), get(pages::login))
        .route(Route::Register.as_path(), get(pages::register))
        .route(Route::Dashboard.as_path(), get(pages::dashboard))
        .route(Route::AddIcon.as_path(), get(pages::add_icon))
        .route(Route::MyCollections.as_path(), get(pages::my_collections))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            classify_route::<UR>,
        ));

    let action_routes = Router::new()
        .route("/api/auth/register", post(register::<UR>))
        .route("/api/auth/login", post(login::<UR>))
        .route("/api/auth/logout", post(logout::<UR>))
        .route("/api/auth/refresh", post(refresh::<UR>))
        .route("/api/auth/me", get(current_user::<UR>));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(page_routes)
        .merge(action_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
