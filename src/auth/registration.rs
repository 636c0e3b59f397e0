//! # Account Registration

use crate::auth::{password, UserDirectory};
use crate::db::models::Account;
use crate::error::{AppError, AppResult};

impl UserDirectory {
    /// Register a new account
    ///
    /// ## Flow
    /// 1. Fail fast if the email is already registered (skips hashing)
    /// 2. Hash the password with Argon2id on the blocking pool
    /// 3. Create the account; the store's atomic check settles races
    ///
    /// ## Errors
    /// - `DuplicateEmail`: email already registered
    /// - `PasswordHash`: hashing failed
    pub async fn register(&self, email: &str, password: &str) -> AppResult<Account> {
        if self.find_by_email(email)?.is_some() {
            return Err(AppError::DuplicateEmail);
        }

        let plaintext = password.to_owned();
        let password_hash =
            tokio::task::spawn_blocking(move || password::hash_password(&plaintext)).await??;

        let account = self.store.create(email, password_hash)?;

        tracing::info!(account_id = %account.id, email = %account.email, "New account registered");
        if let Ok(total) = self.count() {
            tracing::debug!(accounts = total, "Directory size");
        }

        Ok(account)
    }
}
