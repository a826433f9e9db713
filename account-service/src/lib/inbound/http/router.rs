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

use super::handlers::get_captain_profile::get_captain_profile;
use super::handlers::get_user_profile::get_user_profile;
use super::handlers::login_captain::login_captain;
use super::handlers::login_user::login_user;
use super::handlers::logout::logout;
use super::handlers::register_captain::register_captain;
use super::handlers::register_user::register_user;
use super::middleware::authenticate;
use super::middleware::AuthGate;
use crate::captain::models::Captain;
use crate::captain::ports::CaptainServicePort;
use crate::session::ports::PrincipalResolver;
use crate::session::ports::SessionServicePort;
use crate::user::models::User;
use crate::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub captain_service: Arc<dyn CaptainServicePort>,
    pub session_service: Arc<dyn SessionServicePort>,
    pub cookie_secure: bool,
}

/// Builds the HTTP surface. Each account service doubles as the principal
/// resolver guarding its own profile route.
pub fn create_router<US, CS>(
    user_service: Arc<US>,
    captain_service: Arc<CS>,
    session_service: Arc<dyn SessionServicePort>,
    cookie_secure: bool,
) -> Router
where
    US: UserServicePort + PrincipalResolver<Principal = User>,
    CS: CaptainServicePort + PrincipalResolver<Principal = Captain>,
{
    let user_resolver: Arc<dyn PrincipalResolver<Principal = User>> = user_service.clone();
    let captain_resolver: Arc<dyn PrincipalResolver<Principal = Captain>> =
        captain_service.clone();

    let user_gate = AuthGate::new(session_service.clone(), user_resolver);
    let captain_gate = AuthGate::new(session_service.clone(), captain_resolver);

    let state = AppState {
        user_service,
        captain_service,
        session_service,
        cookie_secure,
    };

    let public_routes = Router::new()
        .route("/api/users/register", post(register_user))
        .route("/api/users/login", post(login_user))
        .route("/api/users/logout", get(logout))
        .route("/api/captains/register", post(register_captain))
        .route("/api/captains/login", post(login_captain))
        .route("/api/captains/logout", get(logout));

    let user_routes = Router::new()
        .route("/api/users/profile", get(get_user_profile))
        .route_layer(middleware::from_fn_with_state(
            user_gate,
            authenticate::<User>,
        ));

    let captain_routes = Router::new()
        .route("/api/captains/profile", get(get_captain_profile))
        .route_layer(middleware::from_fn_with_state(
            captain_gate,
            authenticate::<Captain>,
        ));

    // Headers are left out of the span: they carry session tokens.
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
        .merge(public_routes)
        .merge(user_routes)
        .merge(captain_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
