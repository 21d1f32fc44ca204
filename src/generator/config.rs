use crate::generator::constants::{
    DEFAULT_MAX_BIAS, DEFAULT_MAX_OPERATORS, DEFAULT_MAX_WINDOW_DIGITS, WINDOW_DIGITS_LIMIT,
};

/// Limits applied to every generation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of widening steps tried after the seed window comes up empty.
    pub max_bias: u32,
    /// No search window spans more decimal digits than this. Values outside
    /// `1..=WINDOW_DIGITS_LIMIT` are clamped when read, see [`Self::window_digits`].
    pub max_window_digits: u32,
    pub max_operators: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_bias: DEFAULT_MAX_BIAS,
            max_window_digits: DEFAULT_MAX_WINDOW_DIGITS,
            max_operators: DEFAULT_MAX_OPERATORS,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_bias(mut self, max_bias: u32) -> Self {
        self.max_bias = max_bias;
        self
    }

    /// Clamped to `1..=WINDOW_DIGITS_LIMIT`.
    pub fn with_max_window_digits(mut self, digits: u32) -> Self {
        self.max_window_digits = digits.clamp(1, WINDOW_DIGITS_LIMIT);
        self
    }

    pub fn with_max_operators(mut self, count: usize) -> Self {
        self.max_operators = count;
        self
    }

    /// Window width the search actually uses
    pub fn window_digits(&self) -> u32 {
        self.max_window_digits.clamp(1, WINDOW_DIGITS_LIMIT)
    }
}
