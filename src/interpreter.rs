/// The evaluator module parses and evaluates a token stream in one pass.
///
/// There is no syntax tree. The evaluator pulls tokens from the lexer one at
/// a time, checks them against the grammar, and folds operands into an
/// accumulator left to right.
///
/// # Responsibilities
/// - Enforces `expr := factor (op factor)*` followed by end of input.
/// - Applies `+ - * /` with checked integer arithmetic.
/// - Reports syntax errors, division by zero, and overflow.
pub mod evaluator;
/// The lexer module tokenizes a line of input on demand.
///
/// The lexer walks the input with a single forward-only cursor and produces
/// one token per request, ending with an explicit end-of-input token.
///
/// # Responsibilities
/// - Skips whitespace and groups digit runs into integer literals.
/// - Recognises the four operator characters.
/// - Reports invalid characters and oversized literals.
pub mod lexer;
/// Token definitions shared by the lexer and the evaluator.
pub mod token;
