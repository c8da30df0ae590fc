//! UI context for environment detection.

use std::io::IsTerminal;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
}

impl UiContext {
    /// Create context from the process environment.
    pub fn from_env() -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term = std::env::var("TERM").ok();
        let no_color = std::env::var_os("NO_COLOR").is_some();
        Self::resolve(is_tty, term.as_deref(), no_color)
    }

    /// Resolve from explicit inputs.
    ///
    /// Color needs a TTY, no `NO_COLOR`, and a terminal other than `dumb`.
    /// Unicode badges are only used on a TTY.
    pub fn resolve(is_tty: bool, term: Option<&str>, no_color: bool) -> Self {
        let term_is_dumb = term == Some("dumb");
        Self {
            color: is_tty && !no_color && !term_is_dumb,
            unicode: is_tty && !term_is_dumb,
        }
    }
}
