use log::debug;

use crate::expression::{Operator, apply_operator};
use crate::generator::config::GeneratorConfig;
use crate::generator::errors::GeneratorError;
use crate::generator::range::{OperandRange, seed_window, widened_window};
use crate::utils::divisors;

/// Operands satisfying `left op right == target`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidatePair {
    pub left: u64,
    pub right: u64,
}

impl CandidatePair {
    pub fn new(left: u64, right: u64) -> Self {
        Self { left, right }
    }
}

/// Solve `left op right == value` for `right`, if an unsigned solution exists.
#[inline]
fn solve_right(value: u64, op: Operator, left: u64) -> Option<u64> {
    match op {
        Operator::Add | Operator::Multiply => apply_operator(value, left, op.inverse()).ok(),
        Operator::Subtract | Operator::Divide => apply_operator(left, value, op).ok(),
    }
}

/// Every pair with both operands inside `window` that evaluates to `value` under `op`,
/// ordered by ascending left operand.
pub fn candidates_in(value: u64, op: Operator, window: OperandRange) -> Vec<CandidatePair> {
    if window.is_empty() {
        return Vec::new();
    }

    let accept = |left: u64| -> Option<CandidatePair> {
        let right = solve_right(value, op, left)?;
        if !window.contains(right) {
            return None;
        }
        match apply_operator(left, right, op) {
            Ok(result) if result == value => Some(CandidatePair::new(left, right)),
            _ => None,
        }
    };

    // only left operands whose partner can land inside the window
    let pairs: Vec<CandidatePair> = match op {
        Operator::Multiply => divisors(value)
            .into_iter()
            .filter(|d| window.contains(*d))
            .filter_map(accept)
            .collect(),
        Operator::Add => {
            let lo = window.min.max(value.saturating_sub(window.max));
            let hi = window.max.min(value.saturating_sub(window.min));
            (lo..=hi).filter_map(accept).collect()
        }
        Operator::Subtract => {
            let lo = window.min.max(value.saturating_add(window.min));
            let hi = window.max.min(value.saturating_add(window.max));
            (lo..=hi).filter_map(accept).collect()
        }
        Operator::Divide if value == 0 => Vec::new(),
        Operator::Divide => {
            // lefts are the multiples of value
            let first = window.min.div_ceil(value).saturating_mul(value);
            let step = usize::try_from(value).unwrap_or(usize::MAX);
            (first..=window.max).step_by(step).filter_map(accept).collect()
        }
    };

    debug!(
        "{} candidate pairs for {} with '{}' in {}..={}",
        pairs.len(),
        value,
        op,
        window.min,
        window.max
    );
    pairs
}

/// Find operand pairs for `value`, starting from the seed window and widening the
/// search by one digit on each side per step until something turns up.
///
/// # Errors
///
/// Returns [`GeneratorError::Exhausted`] when every window up to `config.max_bias`
/// is empty, or a utils error if `value` is zero.
pub fn candidates(
    value: u64,
    op: Operator,
    expected_digits: u32,
    config: &GeneratorConfig,
) -> Result<Vec<CandidatePair>, GeneratorError> {
    let cap = config.window_digits();

    let seed = seed_window(value, op, expected_digits, cap)?;
    let pairs = candidates_in(value, op, seed);
    if !pairs.is_empty() {
        return Ok(pairs);
    }

    let mut previous = seed;
    for bias in 0..=config.max_bias {
        let window = widened_window(expected_digits, bias, cap)?;
        if window == previous {
            continue;
        }
        previous = window;

        debug!("Widening search for {} '{}' to bias {}", value, op, bias);
        let pairs = candidates_in(value, op, window);
        if !pairs.is_empty() {
            return Ok(pairs);
        }
    }

    Err(GeneratorError::Exhausted {
        value,
        operator: op,
        max_bias: config.max_bias,
    })
}
