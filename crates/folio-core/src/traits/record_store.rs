//! Record store trait.

use crate::error::StoreError;
use crate::portfolio::Portfolio;

/// Durable storage for the portfolio collection.
///
/// The whole collection is read and written as one unit; the repository is
/// the sole reader and writer, and every mutation is a synchronous
/// read-modify-write of the full collection. A store is single-writer by
/// construction, so no locking discipline is required of implementors
/// beyond keeping each `save` atomic.
pub trait RecordStore {
    /// Load the full portfolio collection.
    ///
    /// A store with no persisted document yet loads as an empty collection.
    fn load(&self) -> Result<Vec<Portfolio>, StoreError>;

    /// Persist the full portfolio collection, replacing the previous one.
    fn save(&self, portfolios: &[Portfolio]) -> Result<(), StoreError>;
}
