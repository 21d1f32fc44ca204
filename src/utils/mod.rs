//! Digit and divisor helpers shared by the generator

mod digits;
mod errors;
mod factors;

pub use digits::{count_digits, pow10};
pub use errors::UtilsError;
pub use factors::{divisors, prime_factors};

#[cfg(test)]
mod tests;
