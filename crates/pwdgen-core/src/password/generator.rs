//! Random password generation.
//!
//! Passwords are sampled symbol by symbol from [`ALPHABET`] using a
//! cryptographically secure [`RandomSource`]. Each index is drawn by
//! rejection sampling over single bytes, so every symbol is exactly
//! equally likely.

use secrecy::SecretString;
use zeroize::Zeroizing;

use super::entropy::validate_entropy;
use crate::error::{PwdgenError, Result};

/// Symbols a generated password is drawn from.
///
/// `d` and `n` are intentionally absent from the lowercase run.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcefghijklmopqrstuvwxyz0123456789!@#$%^&*()";

/// Length used when the caller does not ask for one.
pub const DEFAULT_LENGTH: usize = 25;

/// Longest password that will be generated.
pub const MAX_LENGTH: usize = 4096;

/// Upper bound on draws (failed or rejected) spent on a single position.
pub const MAX_DRAW_ATTEMPTS: u32 = 64;

/// A source of cryptographically secure random bytes.
pub trait RandomSource {
    /// Fill `dest` entirely, or fail without producing output.
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<()>;
}

/// Operating system CSPRNG via `getrandom`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<()> {
        getrandom::getrandom(dest).map_err(|e| PwdgenError::RandomSource(e.to_string()))
    }
}

/// Generate a password of `length` symbols using the OS random source.
///
/// # Errors
///
/// Returns `PwdgenError::EntropyTooLow` before drawing any randomness if
/// `length` symbols of [`ALPHABET`] fall below the entropy floor, and
/// `PwdgenError::InvalidInput` if `length` exceeds [`MAX_LENGTH`], and
/// `PwdgenError::RandomSourceExhausted` if the OS source keeps failing.
///
/// # Examples
///
/// ```
/// use pwdgen_core::password::generate;
/// use secrecy::ExposeSecret;
///
/// let password = generate(25).unwrap();
/// assert_eq!(password.expose_secret().len(), 25);
/// ```
pub fn generate(length: usize) -> Result<SecretString> {
    generate_with(&mut OsRandom, length)
}

/// Generate a password of `length` symbols from the given random source.
///
/// A failed draw produces no output and does not advance the position; it
/// is retried up to [`MAX_DRAW_ATTEMPTS`] times together with rejected draws.
pub fn generate_with<R: RandomSource + ?Sized>(rng: &mut R, length: usize) -> Result<SecretString> {
    validate_entropy(ALPHABET.len(), length)?;
    if length > MAX_LENGTH {
        return Err(PwdgenError::InvalidInput(format!(
            "password length {} exceeds the maximum of {}",
            length, MAX_LENGTH
        )));
    }

    let mut password = Zeroizing::new(String::with_capacity(length));
    for _ in 0..length {
        let index = draw_index(rng, ALPHABET.len())?;
        password.push(char::from(ALPHABET[index]));
    }

    Ok(SecretString::from(password.as_str()))
}

/// Draw a uniformly distributed index in `[0, bound)`.
///
/// `bound` must be in `1..=256`.
fn draw_index<R: RandomSource + ?Sized>(rng: &mut R, bound: usize) -> Result<usize> {
    debug_assert!((1..=256).contains(&bound));
    // Largest multiple of `bound` that fits in a byte's range.
    let zone = 256 - (256 % bound);

    let mut byte = [0u8; 1];
    for attempt in 1..=MAX_DRAW_ATTEMPTS {
        match rng.try_fill(&mut byte) {
            Ok(()) => {
                let value = usize::from(byte[0]);
                if value < zone {
                    return Ok(value % bound);
                }
            }
            Err(err) => {
                tracing::debug!(attempt, error = %err, "random draw failed, retrying");
            }
        }
    }

    Err(PwdgenError::RandomSourceExhausted {
        attempts: MAX_DRAW_ATTEMPTS,
    })
}
