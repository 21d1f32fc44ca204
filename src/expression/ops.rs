use crate::expression::ast::Operator;
use crate::expression::errors::ExpressionError;

/// Apply `op` to two unsigned operands.
///
/// # Errors
///
/// Returns an error when:
/// - the right operand of a subtraction exceeds the left
/// - a division has a zero divisor or leaves a remainder
/// - an addition or multiplication overflows `u64`
#[inline]
pub fn apply_operator(a: u64, b: u64, op: Operator) -> Result<u64, ExpressionError> {
    match op {
        Operator::Add => a.checked_add(b).ok_or(ExpressionError::Overflow),
        Operator::Subtract => a.checked_sub(b).ok_or(ExpressionError::NegativeResult),
        Operator::Multiply => a.checked_mul(b).ok_or(ExpressionError::Overflow),
        Operator::Divide => {
            if b == 0 {
                Err(ExpressionError::DivisionByZero)
            } else if a % b != 0 {
                Err(ExpressionError::InexactDivision)
            } else {
                Ok(a / b)
            }
        }
    }
}
