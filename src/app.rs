//! # Router
//!
//! Routes, the session layer and request tracing, assembled in one place so
//! `main` and the handler tests serve the exact same application.
//!
//! ## Route Map
//! | Method | Path        | Handler                       | Gate          |
//! |--------|-------------|-------------------------------|---------------|
//! | GET    | `/`         | `pages::landing`              | public        |
//! | GET    | `/registro` | `pages::registration_form`    | public        |
//! | POST   | `/registro` | `auth::register_submit`       | public        |
//! | GET    | `/login`    | `pages::login_form`           | public        |
//! | POST   | `/login`    | `auth::login_submit`          | public        |
//! | POST   | `/logout`   | `auth::logout`                | public        |
//! | GET    | `/perfil`   | `users::profile`              | `require_auth`|
//! | GET    | `/health`   | `health::health_check`        | public        |
//!
//! ## How the layers stack
//! Axum applies `.layer(...)` calls from the inside out, so a request passes
//! through them in the reverse order they are written:
//! 1. `TraceLayer` logs the request and response
//! 2. `SessionManagerLayer` loads the session named by the cookie (or starts an
//!    empty one) and saves/removes it after the handler runs
//! 3. `require_auth` (protected routes only) runs the session gate
//! 4. The handler

use crate::config::Config;
use crate::handlers::auth::{login_submit, logout, register_submit};
use crate::handlers::health::health_check;
use crate::handlers::pages::{landing, login_form, registration_form};
use crate::handlers::users::profile;
use crate::middleware::auth::require_auth;
use crate::state::AppState;
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::SameSite;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer, SessionStore};

/// Session layer over the given store
///
/// Cookie settings:
/// - name from configuration (`SESSION_COOKIE_NAME`)
/// - `Secure` only when configured, so plain-HTTP development works
/// - `HttpOnly`, so page scripts never see the session id
/// - `SameSite=Lax`, so the cookie survives top-level navigation
///
/// Sessions have no inactivity timeout; they end with the browser session,
/// an explicit logout or a server restart.
pub fn session_layer<S>(config: &Config, store: S) -> SessionManagerLayer<S>
where
    S: SessionStore + Clone,
{
    SessionManagerLayer::new(store)
        .with_name(config.session_cookie_name.clone())
        .with_secure(config.session_secure_cookie)
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnSessionEnd)
}

/// Build the application with sessions kept in process memory
pub fn build_router(state: AppState, config: &Config) -> Router {
    build_router_with_sessions(state, config, MemoryStore::default())
}

/// Build the application over an arbitrary session store
pub fn build_router_with_sessions<S>(state: AppState, config: &Config, store: S) -> Router
where
    S: SessionStore + Clone,
{
    // Routes that require a logged-in session.
    // `route_layer` only runs the gate for requests that match a route here,
    // so unknown paths still fall through to a plain 404.
    let protected_routes = Router::new()
        .route("/perfil", get(profile))
        .route_layer(axum_middleware::from_fn(require_auth));

    Router::new()
        // Public pages
        .route("/", get(landing))
        .route("/registro", get(registration_form).post(register_submit))
        .route("/login", get(login_form).post(login_submit))

        // Ends the session; harmless for anonymous visitors
        .route("/logout", post(logout))

        // Liveness check for load balancers and monitoring
        .route("/health", get(health_check))

        .merge(protected_routes)

        // Layers run outermost-last: tracing wraps sessions wraps routes
        .layer(session_layer(config, store))
        .layer(TraceLayer::new_for_http())

        // Shared state: the user directory
        .with_state(state)
}
