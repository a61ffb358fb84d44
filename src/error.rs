/// Lexing errors.
///
/// Raised when an input character cannot start any token, or when an integer
/// literal does not fit the numeric domain.
pub mod lex_error;
/// Parsing errors.
///
/// Raised when the token sequence does not match the grammar: a token of the
/// wrong kind where another was expected, or tokens left over after a
/// complete expression.
pub mod parse_error;
/// Runtime errors.
///
/// Raised while folding a well-formed expression into a value, such as
/// division by zero or integer overflow.
pub mod runtime_error;

use std::fmt;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Coarse classification of a failed evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// An input character does not start any valid token.
    Lexical,
    /// The token sequence does not match the grammar.
    Syntax,
    /// The right-hand operand of `/` was zero.
    DivisionByZero,
    /// An intermediate result left the `i64` range.
    Overflow,
}

impl ErrorCategory {
    /// Short lower-case name, as used by the script fixtures and the CLI.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lexical => "lexical",
            Self::Syntax => "syntax",
            Self::DivisionByZero => "division-by-zero",
            Self::Overflow => "overflow",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Any failure that can end the evaluation of a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Failure while scanning characters into tokens.
    Lex(LexError),
    /// Failure while matching tokens against the grammar.
    Parse(ParseError),
    /// Failure while applying an operator.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the category of this failure.
    ///
    /// # Example
    /// ```
    /// use tally::{error::ErrorCategory, evaluate};
    ///
    /// let err = evaluate("5 / 0").unwrap_err();
    /// assert_eq!(err.category(), ErrorCategory::DivisionByZero);
    /// ```
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Lex(_) => ErrorCategory::Lexical,
            Self::Parse(_) => ErrorCategory::Syntax,
            Self::Runtime(RuntimeError::DivisionByZero { .. }) => ErrorCategory::DivisionByZero,
            Self::Runtime(RuntimeError::Overflow { .. }) => ErrorCategory::Overflow,
        }
    }

    /// Byte offset into the input at which the failure was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Lex(e) => e.position(),
            Self::Parse(e) => e.position(),
            Self::Runtime(e) => e.position(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
