//! In-memory record store.

use std::collections::HashMap;

use crate::error::Result;
use crate::storage::traits::{PutOutcome, RecordStore};

/// A `HashMap`-backed store with the same overwrite semantics as the SQLite backend.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for MemoryStore {
    fn put(&mut self, name: &str, sealed: &[u8]) -> Result<PutOutcome> {
        match self.records.insert(name.to_string(), sealed.to_vec()) {
            Some(_) => Ok(PutOutcome::Replaced),
            None => Ok(PutOutcome::Created),
        }
    }

    fn get(&self, name: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.records.get(name).cloned())
    }
}
