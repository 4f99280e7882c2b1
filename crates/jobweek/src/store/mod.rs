//! Persistence of raw field tuples.
//!
//! Stores deal in `Vec<String>` tuples, not [`JobRecord`](crate::record::JobRecord)s:
//! a malformed line must survive a load/save cycle untouched so that it can be
//! reported at display time instead of aborting the load.

pub mod flat_file;
pub mod memory;

pub use flat_file::FlatFileStore;
pub use memory::MemoryStore;

use crate::error::StoreError;

/// One stored line, split on the delimiter.
pub type Fields = Vec<String>;

/// Whole-file load and save. There is no partial write path.
pub trait RecordStore {
    /// Returns every stored tuple in file order, or nothing if the store is absent.
    fn load(&self) -> Result<Vec<Fields>, StoreError>;

    /// Replaces the entire store contents with `records`.
    fn save(&self, records: &[Fields]) -> Result<(), StoreError>;
}
