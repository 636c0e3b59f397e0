//! # User Handlers

use crate::error::AppResult;
use crate::handlers::pages;
use crate::session::{self, SessionState};
use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

/// GET /perfil
///
/// Sits behind `require_auth`, so the session is normally Authenticated here.
/// A session pointing at an id the directory no longer knows is treated like
/// an anonymous one.
pub async fn profile(State(state): State<AppState>, session: Session) -> AppResult<Response> {
    let SessionState::Authenticated { user_id } = session::current(&session).await? else {
        return Ok(Redirect::to("/login").into_response());
    };

    match state.directory.find_by_id(&user_id)? {
        Some(account) => Ok(pages::profile_page(&account).into_response()),
        None => {
            tracing::warn!(%user_id, "Session references an unknown account");
            Ok(Redirect::to("/login").into_response())
        }
    }
}
