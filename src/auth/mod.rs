//! # User Directory
//!
//! Registration and credential checks on top of an [`AccountStore`].
//!
//! ## Submodules
//! - `password`: Argon2id hashing
//! - `registration`: creating accounts
//! - `authentication`: checking an email/password pair
//! - `types`: form bodies
//!
//! ## Flows
//!
//! ### Registration
//! 1. Reject early if the email is taken
//! 2. Hash the password on the blocking pool
//! 3. Create the account; the store re-checks uniqueness atomically
//!
//! ### Authentication
//! 1. Look the account up by email (`AccountNotFound` if absent)
//! 2. Compare the password against the stored hash (`BadCredentials` on mismatch)

pub mod authentication;
pub mod password;
pub mod registration;
pub mod types;

use crate::db::accounts::AccountStore;
use crate::db::models::Account;
use crate::error::AppResult;
use std::sync::Arc;

/// Registered accounts plus the operations visitors perform on them
///
/// Cloning is cheap: the store sits behind an `Arc`.
#[derive(Clone)]
pub struct UserDirectory {
    store: Arc<dyn AccountStore>,
}

impl UserDirectory {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Linear lookup by exact email
    pub fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        self.store.find_by_email(email)
    }

    pub fn find_by_id(&self, id: &str) -> AppResult<Option<Account>> {
        self.store.find_by_id(id)
    }

    /// Number of registered accounts
    pub fn count(&self) -> AppResult<usize> {
        self.store.count()
    }
}
