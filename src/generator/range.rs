use crate::expression::Operator;
use crate::utils::{UtilsError, count_digits, pow10};

/// Inclusive bounds over unsigned integers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperandRange {
    pub min: u64,
    pub max: u64,
}

impl OperandRange {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, value: u64) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

/// Digit widths to seed the operand search with.
///
/// This is a heuristic; the enumerator widens when it is wrong.
///
/// # Errors
///
/// Returns an error if `value` is zero.
pub fn digit_range(
    value: u64,
    op: Operator,
    expected_digits: u32,
) -> Result<OperandRange, UtilsError> {
    let digits = u64::from(count_digits(value)?);
    let expected = u64::from(expected_digits);

    let range = match op {
        Operator::Add => OperandRange::new((digits - 1).max(1), digits),
        Operator::Subtract => {
            let width = digits.max(expected);
            OperandRange::new(width, width)
        }
        Operator::Multiply => OperandRange::new((digits / 2).max(1), digits.div_ceil(2)),
        Operator::Divide => OperandRange::new(expected.max(1), (2 * digits).max(expected)),
    };
    Ok(range)
}

/// Numeric window `[10^(lo-1), 10^hi - 1]`, both widths clamped to `[1, cap]`.
fn window_for_digits(
    min_digits: u64,
    max_digits: u64,
    cap: u32,
) -> Result<OperandRange, UtilsError> {
    let cap = u64::from(cap.max(1));
    // both clamped to cap, so they fit in u32
    let lo = min_digits.clamp(1, cap) as u32;
    let hi = max_digits.clamp(u64::from(lo), cap) as u32;
    Ok(OperandRange::new(pow10(lo - 1)?, pow10(hi)? - 1))
}

/// First window tried for `value`, derived from [`digit_range`].
///
/// # Errors
///
/// Returns an error if `value` is zero or the cap exceeds `u64` range.
pub fn seed_window(
    value: u64,
    op: Operator,
    expected_digits: u32,
    cap: u32,
) -> Result<OperandRange, UtilsError> {
    let digits = digit_range(value, op, expected_digits)?;
    window_for_digits(digits.min, digits.max, cap)
}

/// Window after `bias` widening steps: `10^(max(d - bias, 1) - 1) ..= 10^(d + bias) - 1`.
///
/// # Errors
///
/// Returns an error if the cap exceeds `u64` range.
pub fn widened_window(
    expected_digits: u32,
    bias: u32,
    cap: u32,
) -> Result<OperandRange, UtilsError> {
    let lo = u64::from(expected_digits.saturating_sub(bias).max(1));
    let hi = u64::from(expected_digits) + u64::from(bias);
    window_for_digits(lo, hi, cap)
}
