use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("Subtraction would produce a negative result")]
    NegativeResult,
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Division leaves a remainder")]
    InexactDivision,
    #[error("Result does not fit in an unsigned 64-bit integer")]
    Overflow,
    #[error("Unknown operator: {0}")]
    InvalidOperator(String),
}
