//! Command handlers.

mod gen;
mod get;
mod init;
mod misc;

pub use gen::handle_gen;
pub use get::handle_get;
pub use init::handle_init;
pub use misc::handle_completions;
