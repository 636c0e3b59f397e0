//! # Application State
//!
//! Shared state handed to every request handler. Axum clones it per request,
//! which is cheap: the account store sits behind an `Arc`.

use crate::auth::UserDirectory;
use crate::db::accounts::{AccountStore, MemoryAccountStore};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Registered accounts and the register/verify operations on them
    pub directory: UserDirectory,
}

impl AppState {
    /// State backed by an arbitrary account store
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self {
            directory: UserDirectory::new(store),
        }
    }

    /// State backed by a fresh, empty in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryAccountStore::new()))
    }
}
