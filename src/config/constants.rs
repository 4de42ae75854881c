/// Maximum allowed input length for a single parse call (in characters)
///
/// This limit keeps scan times bounded on pathological inputs.
/// Inputs exceeding this limit will be rejected with an error.
pub const MAX_TEXT_LENGTH: usize = 10_000;

/// Largest amount the parser will produce (2^53 - 1)
///
/// Amounts are carried as f64, which represents every integer up to
/// 2^53 exactly. Any computed amount above this ceiling is reported as
/// an overflow instead of being returned with silent precision loss.
pub const MAX_SAFE_AMOUNT: f64 = 9_007_199_254_740_991.0;
