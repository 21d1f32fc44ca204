use log::trace;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::expression::ops::apply_operator;

impl Expression {
    /// Recompute the value of the tree bottom-up.
    ///
    /// # Errors
    ///
    /// Trees built by the generator always evaluate. A hand-built tree fails when one of
    /// its operations is outside the operator's domain, see [`apply_operator`].
    pub fn evaluate(&self) -> Result<u64, ExpressionError> {
        match self {
            Expression::Value(v) => Ok(*v),
            Expression::Operation { op, left, right } => {
                let l = left.evaluate()?;
                let r = right.evaluate()?;
                let result = apply_operator(l, r, *op);
                if let Err(e) = &result {
                    trace!("Evaluation failed at {} {} {}: {}", l, op.symbol(), r, e);
                }
                result
            }
        }
    }
}
