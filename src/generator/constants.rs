// Defaults for the candidate search
pub const DEFAULT_MAX_BIAS: u32 = 6;
pub const DEFAULT_MAX_WINDOW_DIGITS: u32 = 4;
pub const DEFAULT_MAX_OPERATORS: usize = 32;

/// Widest search window any configuration can ask for. A 6-digit window holds at most
/// about a million candidate pairs.
pub const WINDOW_DIGITS_LIMIT: u32 = 6;
