//! folio-store - Store backends for folio.
//!
//! [`FileStore`] is the durable backend; [`MemoryStore`] is the in-memory
//! fake for tests and ephemeral use. Both implement the `RecordStore` and
//! `AccountStore` seams from `folio-core`.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;
