pub mod constants;
mod candidates;
mod config;
mod core;
mod errors;
mod range;

pub use candidates::{CandidatePair, candidates, candidates_in};
pub use config::GeneratorConfig;
pub use self::core::ExpressionGenerator;
pub use errors::GeneratorError;
pub use range::{OperandRange, digit_range, seed_window, widened_window};
