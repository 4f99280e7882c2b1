use std::sync::RwLock;

use crate::error::StoreError;
use crate::store::{Fields, RecordStore};

/// Store kept entirely in memory. Used for previews and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Fields>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Fields>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> Vec<Fields> {
        match self.records.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => {
                log::warn!("Memory store lock was poisoned, recovering");
                poisoned.into_inner().clone()
            }
        }
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> Result<Vec<Fields>, StoreError> {
        Ok(self.snapshot())
    }

    fn save(&self, records: &[Fields]) -> Result<(), StoreError> {
        let mut guard = match self.records.write() {
            Ok(guard) => guard,
            Err(poisoned) => {
                log::warn!("Memory store lock was poisoned, recovering");
                poisoned.into_inner()
            }
        };
        *guard = records.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_save_replaces_contents() {
        let store = MemoryStore::with_records(vec![vec!["a".to_string()]]);
        store.save(&[vec!["b".to_string()], vec!["c".to_string()]]).unwrap();
        assert_eq!(store.load().unwrap().len(), 2);
        assert_eq!(store.snapshot()[0], vec!["b".to_string()]);
    }
}
