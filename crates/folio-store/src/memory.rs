//! In-memory store.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use folio_core::error::StoreError;
use folio_core::identity::Account;
use folio_core::portfolio::Portfolio;
use folio_core::traits::{AccountStore, RecordStore};

/// In-memory store, for tests and ephemeral sessions.
///
/// Clones share the same collections, so a repository and an identity
/// provider can be handed the same logical store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    portfolios: RwLock<Vec<Portfolio>>,
    accounts: RwLock<Vec<Account>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|e| e.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|e| e.into_inner())
}

impl RecordStore for MemoryStore {
    fn load(&self) -> Result<Vec<Portfolio>, StoreError> {
        Ok(read(&self.inner.portfolios).clone())
    }

    fn save(&self, portfolios: &[Portfolio]) -> Result<(), StoreError> {
        *write(&self.inner.portfolios) = portfolios.to_vec();
        Ok(())
    }
}

impl AccountStore for MemoryStore {
    fn load_accounts(&self) -> Result<Vec<Account>, StoreError> {
        Ok(read(&self.inner.accounts).clone())
    }

    fn save_accounts(&self, accounts: &[Account]) -> Result<(), StoreError> {
        *write(&self.inner.accounts) = accounts.to_vec();
        Ok(())
    }
}
