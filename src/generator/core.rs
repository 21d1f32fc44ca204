use log::{debug, info};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::expression::{Expression, Operator};
use crate::generator::candidates::{CandidatePair, candidates};
use crate::generator::config::GeneratorConfig;
use crate::generator::errors::GeneratorError;
use crate::utils::count_digits;

/// Builds random expression trees that evaluate to a requested value
#[derive(Debug, Clone, Default)]
pub struct ExpressionGenerator {
    config: GeneratorConfig,
}

impl ExpressionGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the generator configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Build a tree with exactly `num_operators` operations that evaluates to `value`.
    ///
    /// Operators are drawn uniformly from `allowed_ops` (duplicates are ignored) and
    /// operands aim for `expected_digits` decimal digits.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidArgument`] when the constraints cannot be
    /// satisfied as given, and [`GeneratorError::Exhausted`] when the operand search
    /// runs out of room for some subtree.
    pub fn generate<R: Rng>(
        &self,
        value: u64,
        num_operators: usize,
        expected_digits: u32,
        allowed_ops: &[Operator],
        rng: &mut R,
    ) -> Result<Expression, GeneratorError> {
        let ops = dedup_operators(allowed_ops);
        self.validate(value, num_operators, expected_digits, &ops)?;

        info!(
            "Generating expression for {} with {} operators and {}-digit operands",
            value, num_operators, expected_digits
        );

        let expr = self.build(value, num_operators, expected_digits, &ops, rng)?;

        let result = expr.evaluate()?;
        debug_assert_eq!(result, value);
        debug!("Generated {} = {}", expr, result);
        Ok(expr)
    }

    fn validate(
        &self,
        value: u64,
        num_operators: usize,
        expected_digits: u32,
        ops: &[Operator],
    ) -> Result<(), GeneratorError> {
        let cap = self.config.window_digits();

        if value == 0 {
            return Err(GeneratorError::InvalidArgument(
                "target value must be non-zero".to_string(),
            ));
        }
        if expected_digits == 0 {
            return Err(GeneratorError::InvalidArgument(
                "expected digits must be at least 1".to_string(),
            ));
        }
        if expected_digits > cap {
            return Err(GeneratorError::InvalidArgument(format!(
                "expected digits {} exceed the search limit of {}",
                expected_digits, cap
            )));
        }
        if count_digits(value)? > cap {
            return Err(GeneratorError::InvalidArgument(format!(
                "target {} is wider than the search limit of {} digits",
                value, cap
            )));
        }
        if ops.is_empty() {
            return Err(GeneratorError::InvalidArgument(
                "at least one operator must be allowed".to_string(),
            ));
        }
        if num_operators > self.config.max_operators {
            return Err(GeneratorError::InvalidArgument(format!(
                "{} operators requested, limit is {}",
                num_operators, self.config.max_operators
            )));
        }
        if !can_split(value, num_operators, ops) {
            return Err(GeneratorError::InvalidArgument(format!(
                "{} cannot be split into {} positive addends",
                value,
                num_operators + 1
            )));
        }
        Ok(())
    }

    fn build<R: Rng>(
        &self,
        value: u64,
        num_operators: usize,
        expected_digits: u32,
        ops: &[Operator],
        rng: &mut R,
    ) -> Result<Expression, GeneratorError> {
        if num_operators == 0 {
            return Ok(Expression::value(value));
        }

        // operator budget of each side, the root takes one
        let first_count = rng.gen_range(0..num_operators);
        let budgets = (first_count, num_operators - first_count - 1);

        let (op, pair) = self.pick_operands(value, expected_digits, ops, budgets, rng)?;

        let left = self.build(pair.left, budgets.0, expected_digits, ops, rng)?;
        let right = self.build(pair.right, budgets.1, expected_digits, ops, rng)?;
        Ok(Expression::operation(op, left, right))
    }

    /// Pick an operator uniformly, then a candidate pair uniformly among those whose
    /// operands can carry their subtree budgets. An operator with no such pair falls
    /// through to the remaining ones in random order.
    fn pick_operands<R: Rng>(
        &self,
        value: u64,
        expected_digits: u32,
        ops: &[Operator],
        budgets: (usize, usize),
        rng: &mut R,
    ) -> Result<(Operator, CandidatePair), GeneratorError> {
        let mut order = ops.to_vec();
        let first = rng.gen_range(0..order.len());
        order.swap(0, first);
        if let Some(rest) = order.get_mut(1..) {
            rest.shuffle(rng);
        }

        let mut last_error = None;
        for op in order {
            let pairs = match candidates(value, op, expected_digits, &self.config) {
                Ok(pairs) => pairs,
                Err(err @ GeneratorError::Exhausted { .. }) => {
                    debug!("{}", err);
                    last_error = Some(err);
                    continue;
                }
                Err(err) => return Err(err),
            };

            let viable: Vec<CandidatePair> = pairs
                .into_iter()
                .filter(|p| {
                    can_split(p.left, budgets.0, ops) && can_split(p.right, budgets.1, ops)
                })
                .collect();
            if let Some(pair) = viable.choose(rng) {
                return Ok((op, *pair));
            }

            debug!(
                "No pair for {} '{}' fits operator budgets {:?}",
                value, op, budgets
            );
            last_error = Some(GeneratorError::Exhausted {
                value,
                operator: op,
                max_bias: self.config.max_bias,
            });
        }

        Err(last_error.unwrap_or_else(|| {
            GeneratorError::InvalidArgument("at least one operator must be allowed".to_string())
        }))
    }
}

/// Whether `value` can head a subtree with `budget` operators. Only sums are limited:
/// every addend is at least 1, so `value` needs more units than there are operators.
fn can_split(value: u64, budget: usize, ops: &[Operator]) -> bool {
    budget == 0 || ops != [Operator::Add] || value > budget as u64
}

fn dedup_operators(ops: &[Operator]) -> Vec<Operator> {
    let mut unique = Vec::with_capacity(ops.len());
    for op in ops {
        if !unique.contains(op) {
            unique.push(*op);
        }
    }
    unique
}
