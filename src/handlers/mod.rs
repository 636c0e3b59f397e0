//! # HTTP Request Handlers
//!
//! - `pages`: landing page and the two forms
//! - `auth`: registration and login submissions, logout
//! - `users`: the gated profile page
//! - `health`: liveness check

pub mod auth;
pub mod health;
pub mod pages;
pub mod users;
