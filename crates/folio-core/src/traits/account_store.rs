//! Account store trait.

use crate::error::StoreError;
use crate::identity::Account;

/// Durable storage for the account collection.
///
/// Same whole-collection contract as [`RecordStore`](super::RecordStore);
/// the identity layer is its sole reader and writer.
pub trait AccountStore {
    /// Load the full account collection.
    fn load_accounts(&self) -> Result<Vec<Account>, StoreError>;

    /// Persist the full account collection, replacing the previous one.
    fn save_accounts(&self, accounts: &[Account]) -> Result<(), StoreError>;
}
