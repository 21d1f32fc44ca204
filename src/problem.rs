//! A drill question: a random target and an expression that evaluates to it

use log::info;
use rand::Rng;

use crate::expression::{Expression, Operator};
use crate::generator::{ExpressionGenerator, GeneratorError};
use crate::utils::pow10;

/// Parameters for generating drill problems
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemSettings {
    /// Number of decimal digits in the answer
    pub result_digits: u32,
    pub num_operators: usize,
    /// Digit width each operand should roughly have
    pub expected_digits: u32,
    pub allowed_ops: Vec<Operator>,
}

impl Default for ProblemSettings {
    fn default() -> Self {
        Self {
            result_digits: 2,
            num_operators: 1,
            expected_digits: 1,
            allowed_ops: Operator::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    answer: u64,
    expression: Expression,
}

impl Problem {
    /// Draw a target with exactly `settings.result_digits` digits and build an
    /// expression for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid or no expression can be built.
    pub fn generate<R: Rng>(
        settings: &ProblemSettings,
        generator: &ExpressionGenerator,
        rng: &mut R,
    ) -> Result<Self, GeneratorError> {
        if settings.result_digits == 0 {
            return Err(GeneratorError::InvalidArgument(
                "result digits must be at least 1".to_string(),
            ));
        }

        let low = pow10(settings.result_digits - 1)?;
        let high = pow10(settings.result_digits)?;
        let target = rng.gen_range(low..high);
        info!("Drew target {}", target);

        Self::with_target(target, settings, generator, rng)
    }

    /// Build a problem for a fixed target; `settings.result_digits` is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid or no expression can be built.
    pub fn with_target<R: Rng>(
        target: u64,
        settings: &ProblemSettings,
        generator: &ExpressionGenerator,
        rng: &mut R,
    ) -> Result<Self, GeneratorError> {
        let expression = generator.generate(
            target,
            settings.num_operators,
            settings.expected_digits,
            &settings.allowed_ops,
            rng,
        )?;
        Ok(Self {
            answer: target,
            expression,
        })
    }

    pub fn answer(&self) -> u64 {
        self.answer
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// The prompt shown to the learner, e.g. `(3 + 4) = `
    pub fn question(&self) -> String {
        format!("{} = ", self.expression)
    }

    /// Compare a fixed-width readout (such as an abacus with `width` rods) to the answer.
    /// The answer is left-padded with zeros to `width` before comparing.
    pub fn check_answer(&self, reading: &str, width: usize) -> bool {
        reading == format!("{:0width$}", self.answer, width = width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::GeneratorConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generate_respects_result_digits() {
        let generator = ExpressionGenerator::default();
        let mut rng = StdRng::seed_from_u64(42);
        let settings = ProblemSettings {
            result_digits: 3,
            num_operators: 2,
            expected_digits: 1,
            allowed_ops: Operator::ALL.to_vec(),
        };

        for _ in 0..20 {
            let result = Problem::generate(&settings, &generator, &mut rng);
            assert!(result.is_ok(), "{:?}", result);
            if let Ok(problem) = result {
                assert!((100..1000).contains(&problem.answer()));
                assert_eq!(problem.expression().evaluate(), Ok(problem.answer()));
                assert_eq!(problem.expression().operation_count(), 2);
            }
        }
    }

    #[test]
    fn test_zero_result_digits_rejected() {
        let generator = ExpressionGenerator::default();
        let mut rng = StdRng::seed_from_u64(1);
        let settings = ProblemSettings {
            result_digits: 0,
            ..ProblemSettings::default()
        };
        let result = Problem::generate(&settings, &generator, &mut rng);
        assert!(matches!(result, Err(GeneratorError::InvalidArgument(_))));
    }

    #[test]
    fn test_result_digits_beyond_window_rejected() {
        let generator = ExpressionGenerator::new(GeneratorConfig::new().with_max_window_digits(2));
        let mut rng = StdRng::seed_from_u64(1);
        let settings = ProblemSettings {
            result_digits: 3,
            ..ProblemSettings::default()
        };
        let result = Problem::generate(&settings, &generator, &mut rng);
        assert!(matches!(result, Err(GeneratorError::InvalidArgument(_))));
    }

    #[test]
    fn test_question_text() {
        let generator = ExpressionGenerator::default();
        let mut rng = StdRng::seed_from_u64(9);
        let settings = ProblemSettings {
            num_operators: 0,
            ..ProblemSettings::default()
        };
        let result = Problem::with_target(58, &settings, &generator, &mut rng);
        assert!(result.is_ok());
        if let Ok(problem) = result {
            assert_eq!(problem.question(), "58 = ");
        }
    }

    #[test]
    fn test_check_answer_pads_to_width() {
        let generator = ExpressionGenerator::default();
        let mut rng = StdRng::seed_from_u64(2);
        let settings = ProblemSettings::default();
        let result = Problem::with_target(42, &settings, &generator, &mut rng);
        assert!(result.is_ok());
        if let Ok(problem) = result {
            assert!(problem.check_answer("0042", 4));
            assert!(problem.check_answer("42", 2));
            assert!(!problem.check_answer("42", 4));
            assert!(!problem.check_answer("0041", 4));
        }
    }
}
