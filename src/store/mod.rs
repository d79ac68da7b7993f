//! Stores - Persistence collaborators for records.
//!
//! [`RecordStore`] is the storage seam. Two implementations are provided and
//! are interchangeable; pick one when composing the application:
//!
//! - [`InMemoryStore`]: HashMap-backed, for tests and development.
//! - `SqliteStore` (feature `sqlite`): relational store on SQLite.
//!
//! ## Example
//!
//! ```ignore
//! use catalog_api::{InMemoryStore, RecordsExt};
//!
//! let store = InMemoryStore::new();
//! let created = store.records::<Product>().insert(&new_product)?;
//! let loaded = store.records::<Product>().get(created.id)?;
//! ```

mod in_memory;
mod repository;
#[cfg(feature = "sqlite")]
mod sqlite;

use crate::error::StoreError;
use crate::patch::Assignments;
use crate::record::Record;

pub use in_memory::InMemoryStore;
pub use repository::{RecordRepository, RecordsExt};
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

/// Abstract record storage.
///
/// Every assignment set handed to a store is validated against the record's
/// column catalogue first; the id and creation metadata can never be written.
pub trait RecordStore: Send + Sync {
    /// All records of a type, ordered by id.
    fn find_all<M: Record>(&self) -> Result<Vec<M>, StoreError>;

    /// Get a record by id. Returns None if not found.
    fn find_by_id<M: Record>(&self, id: i64) -> Result<Option<M>, StoreError>;

    /// Insert a new record. The store assigns the id and server-side defaults.
    fn insert<M: Record>(&self, fields: &Assignments) -> Result<M, StoreError>;

    /// Write `assignments` to record `id` and return the updated record.
    /// Existence check and write happen as one operation; None if not found.
    fn apply_assignments<M: Record>(
        &self,
        id: i64,
        assignments: &Assignments,
    ) -> Result<Option<M>, StoreError>;

    /// Delete a record by id, returning its last state. None if not found.
    fn delete<M: Record>(&self, id: i64) -> Result<Option<M>, StoreError>;

    /// Number of stored records of a type.
    fn count<M: Record>(&self) -> Result<usize, StoreError>;
}
