//! UI primitives for the pwdgen CLI.
//!
//! - **Context**: environment detection (TTY, color, unicode)
//! - **Theme**: badge tokens and styles
//! - **Render**: badges and hints

mod context;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use render::{badge, hint};
pub use theme::Badge;
