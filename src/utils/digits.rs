use log::warn;

use crate::utils::errors::UtilsError;

/// Count the decimal digits of `value`.
///
/// # Errors
///
/// Returns an error for zero, which the generator never uses as a target.
pub fn count_digits(value: u64) -> Result<u32, UtilsError> {
    if value == 0 {
        warn!("Digit count requested for zero");
        return Err(UtilsError::ZeroHasNoDigits);
    }
    Ok(value.ilog10() + 1)
}

/// # Errors
///
/// Returns an error if `10^exponent` overflows `u64`.
pub fn pow10(exponent: u32) -> Result<u64, UtilsError> {
    10_u64
        .checked_pow(exponent)
        .ok_or(UtilsError::DigitsOutOfRange(exponent))
}
