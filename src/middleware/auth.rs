use crate::error::AppResult;
use crate::session::{self, Access};
use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

/// Gate for protected routes: anonymous visitors are sent to the login form.
pub async fn require_auth(session: Session, request: Request, next: Next) -> AppResult<Response> {
    let state = session::current(&session).await?;

    match session::authorize(&state) {
        Access::Admit => Ok(next.run(request).await),
        Access::Deny => Ok(Redirect::to("/login").into_response()),
    }
}
