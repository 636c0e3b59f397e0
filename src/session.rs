//! # Session Gate
//!
//! Every visitor's session is in one of two states:
//!
//! - **Anonymous**: no account id stored (initial state for every client)
//! - **Authenticated**: the id of a verified account is stored under
//!   [`SESSION_USER_ID_KEY`]
//!
//! [`establish`] moves a session to Authenticated after a successful login.
//! [`destroy`] flushes it: data is cleared, the store record is deleted and
//! the session layer removes the cookie, so the next request starts Anonymous.
//!
//! The session is always passed in explicitly; [`authorize`] itself is a pure
//! function of the session state.

use crate::db::models::Account;
use crate::error::AppResult;
use tower_sessions::Session;

/// Session key holding the logged-in account's id
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Where a session stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated { user_id: String },
}

/// Outcome of the gate check for a protected route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Admit,
    Deny,
}

/// Admit iff the session is Authenticated
pub fn authorize(state: &SessionState) -> Access {
    match state {
        SessionState::Authenticated { .. } => Access::Admit,
        SessionState::Anonymous => Access::Deny,
    }
}

/// Read the current state out of a session
pub async fn current(session: &Session) -> AppResult<SessionState> {
    let user_id: Option<String> = session.get(SESSION_USER_ID_KEY).await?;

    Ok(match user_id {
        Some(user_id) => SessionState::Authenticated { user_id },
        None => SessionState::Anonymous,
    })
}

/// Anonymous -> Authenticated
///
/// The session id is rotated first, so an id planted before login never
/// becomes an authenticated one.
pub async fn establish(session: &Session, account: &Account) -> AppResult<()> {
    session.cycle_id().await?;
    session.insert(SESSION_USER_ID_KEY, &account.id).await?;
    Ok(())
}

/// Authenticated -> Anonymous, by destroying the session entirely
pub async fn destroy(session: &Session) -> AppResult<()> {
    session.flush().await?;
    Ok(())
}
