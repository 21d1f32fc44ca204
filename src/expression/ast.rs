use std::str::FromStr;

use crate::expression::errors::ExpressionError;

/// The four binary operators a drill can use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Add and Subtract undo each other, as do Multiply and Divide.
    pub fn inverse(self) -> Operator {
        match self {
            Operator::Add => Operator::Subtract,
            Operator::Subtract => Operator::Add,
            Operator::Multiply => Operator::Divide,
            Operator::Divide => Operator::Multiply,
        }
    }
}

impl FromStr for Operator {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "+" | "add" | "plus" => Ok(Operator::Add),
            "-" | "sub" | "subtract" | "minus" => Ok(Operator::Subtract),
            "*" | "x" | "×" | "mul" | "multiply" => Ok(Operator::Multiply),
            "/" | "÷" | "div" | "divide" => Ok(Operator::Divide),
            other => Err(ExpressionError::InvalidOperator(other.to_string())),
        }
    }
}

/// An arithmetic expression over unsigned integers.
///
/// Each operation owns both of its operands, so a tree never shares nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Value(u64),
    Operation {
        op: Operator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
}

impl Expression {
    pub fn value(value: u64) -> Self {
        Expression::Value(value)
    }

    pub fn operation(op: Operator, left: Expression, right: Expression) -> Self {
        Expression::Operation {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Number of operation nodes in the tree
    pub fn operation_count(&self) -> usize {
        match self {
            Expression::Value(_) => 0,
            Expression::Operation { left, right, .. } => {
                1 + left.operation_count() + right.operation_count()
            }
        }
    }

    /// Number of value leaves in the tree
    pub fn leaf_count(&self) -> usize {
        match self {
            Expression::Value(_) => 1,
            Expression::Operation { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}
