//! Record store trait definition.
//!
//! The `RecordStore` trait is the durable name -> sealed payload map. It
//! knows nothing about encryption; payloads are opaque bytes. Backends:
//! SQLite on disk, and an in-memory map for tests.

use crate::error::Result;

/// Whether a `put` created a new record or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutOutcome {
    Created,
    Replaced,
}

impl PutOutcome {
    pub fn replaced(self) -> bool {
        matches!(self, PutOutcome::Replaced)
    }
}

/// Storage interface for sealed password records.
///
/// All implementations must ensure:
/// - Names are unique keys
/// - Writing an existing name overwrites its payload
/// - Payload bytes round-trip exactly
pub trait RecordStore {
    /// Store `sealed` under `name`, replacing any existing record.
    fn put(&mut self, name: &str, sealed: &[u8]) -> Result<PutOutcome>;

    /// Fetch the payload stored under `name`.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(payload))` if found, `Ok(None)` if not found.
    fn get(&self, name: &str) -> Result<Option<Vec<u8>>>;
}

impl<T: RecordStore + ?Sized> RecordStore for &mut T {
    fn put(&mut self, name: &str, sealed: &[u8]) -> Result<PutOutcome> {
        (**self).put(name, sealed)
    }

    fn get(&self, name: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(name)
    }
}
