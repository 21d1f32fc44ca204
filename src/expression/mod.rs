//! Expression tree model and operator semantics

mod ast;
mod display;
mod errors;
mod eval;
mod ops;

pub use ast::{Expression, Operator};
pub use errors::ExpressionError;
pub use ops::apply_operator;
