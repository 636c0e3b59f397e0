//! # Data Models
//!
//! The one record this service keeps: a registered account.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered account
///
/// Accounts are created by registration and never updated or deleted; they
/// live for as long as the process does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Unique identifier (UUID v7, time-ordered)
    pub id: String,

    /// Login key, unique across all accounts (compared case-sensitively)
    pub email: String,

    /// PHC-format Argon2id hash, never the plaintext
    pub password_hash: String,

    /// When the account was registered
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with a fresh id and the current timestamp
    pub fn new(email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
