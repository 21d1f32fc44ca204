use std::fmt;

use crate::expression::ast::{Expression, Operator};

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Value(v) => write!(f, "{}", v),
            Expression::Operation { op, left, right } => {
                write!(f, "({} {} {})", left, op, right)
            }
        }
    }
}

impl Expression {
    /// Infix form with every operation wrapped in parentheses, e.g. `((3 + 4) * 2)`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}
