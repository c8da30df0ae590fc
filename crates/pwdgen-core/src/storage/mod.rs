//! Record storage for sealed passwords.
//!
//! This module provides the `RecordStore` abstraction and its backends.
//! Stores only ever see sealed payloads; plaintext never reaches them.

pub mod memory;
pub mod sqlite;
pub mod traits;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::{PutOutcome, RecordStore};
