//! Password generation.
//!
//! - **entropy**: the minimum-entropy gate applied before any randomness is spent
//! - **generator**: uniform sampling over the fixed alphabet from a secure source

pub mod entropy;
pub mod generator;

pub use entropy::{entropy_bits, validate_entropy, MIN_ENTROPY_BITS};
pub use generator::{
    generate, generate_with, OsRandom, RandomSource, ALPHABET, DEFAULT_LENGTH, MAX_DRAW_ATTEMPTS,
    MAX_LENGTH,
};
