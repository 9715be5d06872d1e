//! Persistence seams.
//!
//! The repository and identity layers are generic over these traits so the
//! durable backend can be swapped for an in-memory fake in tests.

mod account_store;
mod record_store;

pub use account_store::AccountStore;
pub use record_store::RecordStore;
