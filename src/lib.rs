//! Abacus Drill - A library for generating arithmetic practice problems
//!
//! Given a target value, an operator count, an operand digit width and a set of allowed
//! operators, this library builds a random expression tree that evaluates exactly to the
//! target.

pub mod expression;
pub mod generator;
pub mod problem;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Operator};
pub use generator::{ExpressionGenerator, GeneratorConfig, GeneratorError};
pub use problem::{Problem, ProblemSettings};
pub use utils::UtilsError;

use rand::Rng;

/// Generate an expression that evaluates to `value`
///
/// This is a convenience function that uses a generator with the default configuration.
///
/// # Arguments
///
/// * `value` - The target value, must be non-zero
/// * `num_operators` - How many operations the tree should contain
/// * `expected_digits` - Approximate digit width of each operand
/// * `allowed_ops` - Operators the tree may use
/// * `rng` - Source of randomness; seed it for reproducible output
///
/// # Errors
///
/// This function will return an error if:
/// * The target is zero or wider than the search window
/// * `expected_digits` is zero or `allowed_ops` is empty
/// * No operands can be found for some subtree
///
/// # Examples
///
/// ```
/// use abacus_drill::{Operator, generate_expression};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// match generate_expression(24, 2, 1, &[Operator::Add, Operator::Multiply], &mut rng) {
///     Ok(expr) => assert_eq!(expr.evaluate(), Ok(24)),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn generate_expression<R: Rng>(
    value: u64,
    num_operators: usize,
    expected_digits: u32,
    allowed_ops: &[Operator],
    rng: &mut R,
) -> Result<Expression, GeneratorError> {
    let generator = ExpressionGenerator::default();
    generator.generate(value, num_operators, expected_digits, allowed_ops, rng)
}
