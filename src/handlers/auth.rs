//! # Authentication Handlers
//!
//! Form submissions for registration and login, plus logout.
//!
//! Directory failures (duplicate email, unknown account, wrong password) are
//! answered with a plain message on the same request. Unexpected failures are
//! logged and the visitor is sent back to the form.

use crate::auth::types::CredentialsForm;
use crate::session;
use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use tower_sessions::Session;

/// POST /registro
pub async fn register_submit(
    State(state): State<AppState>,
    Form(form): Form<CredentialsForm>,
) -> Response {
    match state.directory.register(&form.email, &form.password).await {
        Ok(_) => Redirect::to("/login").into_response(),
        Err(e) if e.is_user_facing() => {
            tracing::debug!(email = %form.email, "Registration rejected: {e}");
            e.into_response()
        }
        Err(e) => {
            tracing::error!("Registration failed: {:?}", e);
            Redirect::to("/registro").into_response()
        }
    }
}

/// POST /login
pub async fn login_submit(
    session: Session,
    State(state): State<AppState>,
    Form(form): Form<CredentialsForm>,
) -> Response {
    let account = match state.directory.verify(&form.email, &form.password).await {
        Ok(account) => account,
        Err(e) if e.is_user_facing() => {
            tracing::info!(email = %form.email, "Login rejected: {e}");
            return e.into_response();
        }
        Err(e) => {
            tracing::error!("Login failed: {:?}", e);
            return Redirect::to("/login").into_response();
        }
    };

    if let Err(e) = session::establish(&session, &account).await {
        tracing::error!("Could not start session: {:?}", e);
        return Redirect::to("/login").into_response();
    }

    tracing::info!(account_id = %account.id, "Logged in");
    Redirect::to("/perfil").into_response()
}

/// POST /logout
///
/// If the session cannot be destroyed the visitor goes back to the profile
/// page and the session may still be live.
pub async fn logout(session: Session) -> Redirect {
    match session::destroy(&session).await {
        Ok(()) => {
            tracing::info!("Logged out");
            Redirect::to("/")
        }
        Err(e) => {
            tracing::warn!("Session destruction failed: {:?}", e);
            Redirect::to("/perfil")
        }
    }
}
