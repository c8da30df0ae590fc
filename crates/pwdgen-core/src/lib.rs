//! # pwdgen Core
//!
//! Core library for pwdgen - a local password generator that keeps generated
//! passwords sealed at rest and hands plaintext only to the clipboard.
//!
//! This crate provides the generation, encryption, and storage logic
//! independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **password**: entropy floor and uniform sampling over a fixed alphabet
//! - **crypto**: key file lifecycle and AES-256-GCM sealing
//! - **storage**: name -> sealed payload stores (SQLite, in-memory)
//! - **clipboard**: the clipboard transport capability
//! - **vault**: initialize / generate / retrieve flows wiring the above

pub mod clipboard;
pub mod crypto;
pub mod error;
pub mod password;
pub mod paths;
pub mod storage;
pub mod vault;

pub use error::{PwdgenError, Result};
pub use storage::RecordStore;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
