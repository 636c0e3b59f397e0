//! # Account Storage
//!
//! [`AccountStore`] is the seam between the handlers and wherever accounts
//! live. The only implementation, [`MemoryAccountStore`], keeps them in
//! process memory, so restarting the server discards every account.
//!
//! `create` is the authoritative uniqueness check: the lookup and the insert
//! happen under one write lock, so two concurrent registrations for the same
//! email cannot both succeed.

use crate::db::models::Account;
use crate::error::{AppError, AppResult};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Storage for registered accounts
pub trait AccountStore: Send + Sync {
    /// Atomically insert a new account unless the email is already taken.
    ///
    /// ## Errors
    /// - `DuplicateEmail`: an account with this exact email exists
    fn create(&self, email: &str, password_hash: String) -> AppResult<Account>;

    /// Look up an account by its login email (exact match)
    fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    /// Look up an account by id
    fn find_by_id(&self, id: &str) -> AppResult<Option<Account>>;

    /// Number of stored accounts
    fn count(&self) -> AppResult<usize>;
}

/// Volatile, process-lifetime account store
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    accounts: RwLock<Vec<Account>>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Vec<Account>>> {
        self.accounts
            .read()
            .map_err(|_| AppError::Internal("Account store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Vec<Account>>> {
        self.accounts
            .write()
            .map_err(|_| AppError::Internal("Account store lock poisoned".to_string()))
    }
}

impl AccountStore for MemoryAccountStore {
    fn create(&self, email: &str, password_hash: String) -> AppResult<Account> {
        let mut accounts = self.write()?;

        if accounts.iter().any(|a| a.email == email) {
            return Err(AppError::DuplicateEmail);
        }

        let account = Account::new(email.to_string(), password_hash);
        accounts.push(account.clone());

        Ok(account)
    }

    fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        Ok(self.read()?.iter().find(|a| a.email == email).cloned())
    }

    fn find_by_id(&self, id: &str) -> AppResult<Option<Account>> {
        Ok(self.read()?.iter().find(|a| a.id == id).cloned())
    }

    fn count(&self) -> AppResult<usize> {
        Ok(self.read()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Barrier};
    use std::thread;

    #[test]
    fn create_then_find() {
        let store = MemoryAccountStore::new();
        let created = store.create("a@x.com", "hash".to_string()).unwrap();

        assert_eq!(store.find_by_email("a@x.com").unwrap(), Some(created.clone()));
        assert_eq!(store.find_by_id(&created.id).unwrap(), Some(created));
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn duplicate_email_is_rejected_and_store_does_not_grow() {
        let store = MemoryAccountStore::new();
        store.create("a@x.com", "h1".to_string()).unwrap();

        let err = store.create("a@x.com", "h2".to_string()).unwrap_err();

        assert!(matches!(err, AppError::DuplicateEmail));
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn email_match_is_case_sensitive() {
        let store = MemoryAccountStore::new();
        store.create("a@x.com", "h".to_string()).unwrap();

        assert!(store.find_by_email("A@X.COM").unwrap().is_none());
        assert!(store.create("A@X.COM", "h".to_string()).is_ok());
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn unknown_lookups_return_none() {
        let store = MemoryAccountStore::new();
        assert!(store.find_by_email("nobody@x.com").unwrap().is_none());
        assert!(store.find_by_id("missing").unwrap().is_none());
    }

    #[test]
    fn racing_creates_for_one_email_admit_exactly_one() {
        let store = Arc::new(MemoryAccountStore::new());
        let barrier = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    store.create("race@x.com", format!("h{i}")).is_ok()
                })
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(winners, 1);
        assert_eq!(store.count().unwrap(), 1);
    }
}
