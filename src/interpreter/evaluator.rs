/// The grammar driver.
///
/// Holds the lookahead token, validates the token sequence against the
/// grammar, and accumulates the result.
pub mod core;

/// Binary operator application.
///
/// Maps operator tokens to operators and applies them with checked `i64`
/// arithmetic.
pub mod binary;
