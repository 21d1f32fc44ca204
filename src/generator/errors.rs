use thiserror::Error;

use crate::expression::{ExpressionError, Operator};
use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("No operands found for {value} with operator '{operator}' after {max_bias} widening steps")]
    Exhausted {
        value: u64,
        operator: Operator,
        max_bias: u32,
    },
    #[error("Expression evaluation error: {0}")]
    ExpressionError(#[from] ExpressionError),
    #[error("Utils error: {0}")]
    UtilsError(#[from] UtilsError),
}
