//! # Middleware Module
//!
//! - `auth`: applies the session gate to protected routes (redirects to
//!   `/login` when the visitor is not logged in)

pub mod auth;
