//! Entropy validation.
//!
//! Enforces the minimum entropy floor before any randomness is spent.

use crate::error::{PwdgenError, Result};

/// Minimum acceptable entropy in bits.
pub const MIN_ENTROPY_BITS: u32 = 60;

/// Bits of entropy for a password of `length` symbols drawn uniformly
/// from an alphabet of `alphabet_size` symbols.
///
/// Computed as `round(log2(alphabet_size ^ length))`. Overflow of the power
/// to infinity saturates to `u32::MAX`; a zero-sized alphabet yields 0.
pub fn entropy_bits(alphabet_size: usize, length: usize) -> u32 {
    let bits = (alphabet_size as f64).powf(length as f64).log2().round();
    // `as` saturates: -inf and NaN map to 0, +inf to u32::MAX.
    bits as u32
}

/// Validate that a password of `length` over `alphabet_size` symbols meets
/// the entropy floor.
///
/// # Errors
///
/// Returns `PwdgenError::EntropyTooLow` when the rounded entropy is below
/// [`MIN_ENTROPY_BITS`]. A length of 0 always fails.
///
/// # Examples
///
/// ```
/// use pwdgen_core::password::validate_entropy;
///
/// assert!(validate_entropy(70, 25).is_ok());
/// assert!(validate_entropy(70, 1).is_err());
/// ```
pub fn validate_entropy(alphabet_size: usize, length: usize) -> Result<()> {
    let bits = entropy_bits(alphabet_size, length);
    if bits < MIN_ENTROPY_BITS {
        return Err(PwdgenError::EntropyTooLow {
            bits,
            minimum: MIN_ENTROPY_BITS,
        });
    }
    Ok(())
}
