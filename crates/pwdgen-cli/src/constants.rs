//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// A lookup that finds nothing is not a failure and exits with `SUCCESS`.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;

    /// Any other error.
    pub const FAILURE: i32 = 1;
}
