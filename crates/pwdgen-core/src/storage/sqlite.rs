//! SQLite record store.
//!
//! One table, `passwords(name TEXT PRIMARY KEY, pwd TEXT)`, where `pwd`
//! holds the lowercase hex encoding of the sealed payload.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{PwdgenError, Result};
use crate::storage::traits::{PutOutcome, RecordStore};

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS passwords (
        name TEXT NOT NULL PRIMARY KEY,
        pwd TEXT NOT NULL
    );
"#;

/// SQLite-backed record store.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database file at `path` and ensure the schema exists.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Open the database file at `path`, failing if it does not exist.
    pub fn open_existing(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PwdgenError::Storage(format!(
                "Record store not found at {}",
                path.display()
            )));
        }
        Self::open(path)
    }

    /// Private in-memory database, for tests and dry runs.
    pub fn open_in_memory() -> Result<Self> {
        let store = Self {
            conn: Connection::open_in_memory()?,
        };
        store.initialize()?;
        Ok(store)
    }

    /// Create the schema if it is missing. Idempotent.
    pub fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Whether a record named `name` exists.
    #[cfg(test)]
    fn contains(&self, name: &str) -> Result<bool> {
        let found = self
            .conn
            .query_row(
                "SELECT 1 FROM passwords WHERE name = ?1",
                params![name],
                |_| Ok(()),
            )
            .optional()?;
        Ok(found.is_some())
    }
}

impl RecordStore for SqliteStore {
    fn put(&mut self, name: &str, sealed: &[u8]) -> Result<PutOutcome> {
        let tx = self.conn.transaction()?;
        let outcome = {
            let existed = tx
                .query_row(
                    "SELECT 1 FROM passwords WHERE name = ?1",
                    params![name],
                    |_| Ok(()),
                )
                .optional()?
                .is_some();
            tx.execute(
                "INSERT INTO passwords (name, pwd) VALUES (?1, ?2)
                 ON CONFLICT(name) DO UPDATE SET pwd = excluded.pwd",
                params![name, hex::encode(sealed)],
            )?;
            if existed {
                PutOutcome::Replaced
            } else {
                PutOutcome::Created
            }
        };
        tx.commit()?;

        tracing::debug!(replaced = outcome.replaced(), "stored sealed record");
        Ok(outcome)
    }

    fn get(&self, name: &str) -> Result<Option<Vec<u8>>> {
        let encoded: Option<String> = self
            .conn
            .query_row(
                "SELECT pwd FROM passwords WHERE name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()?;

        encoded
            .map(|value| {
                hex::decode(&value).map_err(|e| {
                    PwdgenError::Storage(format!("Stored payload is not valid hex: {}", e))
                })
            })
            .transpose()
    }
}
