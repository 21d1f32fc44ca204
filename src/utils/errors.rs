use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtilsError {
    #[error("Zero has no digit count")]
    ZeroHasNoDigits,
    #[error("10^{0} does not fit in an unsigned 64-bit integer")]
    DigitsOutOfRange(u32),
}
