//! # Error Handling
//!
//! Custom error types for the application and their conversion into HTTP
//! responses.
//!
//! Directory failures (duplicate email, unknown account, wrong password) are
//! ordinary outcomes of a form submission: they render as a plain message with
//! a `200 OK`, exactly like any other page. Everything else is unexpected and
//! becomes a logged `500`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-wide error type
///
/// `#[from]` variants let `?` convert session store errors directly;
/// `JoinError` from the blocking hash pool converts via the impl below.
#[derive(Error, Debug)]
pub enum AppError {
    /// Registration attempted with an email that already has an account
    #[error("That email is already in use. Please choose another one.")]
    DuplicateEmail,

    /// Login attempted with an email that has no account
    #[error("Invalid credentials (user not found).")]
    AccountNotFound,

    /// Login attempted with the wrong password
    #[error("Invalid credentials (wrong password).")]
    BadCredentials,

    /// The session store failed to load, save or delete a session
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Hashing or parsing a password hash failed
    #[error("Password hash error: {0}")]
    PasswordHash(String),

    /// Internal server errors (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether the error is something the visitor caused and should read.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            AppError::DuplicateEmail | AppError::AccountNotFound | AppError::BadCredentials
        )
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Internal(format!("Background task failed: {err}"))
    }
}

/// Convert AppError into an HTTP response
///
/// Lets handlers return `AppResult<T>` and have failures rendered for them.
///
/// ## How it works
/// 1. Directory errors: show the message itself, status 200
/// 2. Anything else: log the full error, show a generic message, status 500
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_user_facing() {
            return (StatusCode::OK, self.to_string()).into_response();
        }

        // Log the details, hand the visitor a generic message
        tracing::error!("{:?}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Something went wrong. Please try again.",
        )
            .into_response()
    }
}

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;
