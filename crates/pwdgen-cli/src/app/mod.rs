//! Application-level wiring for the pwdgen CLI.
//!
//! Resolves paths and configuration, and opens the key, store, and
//! clipboard that the commands hand to `pwdgen_core::vault`.

mod context;

pub use context::AppContext;
