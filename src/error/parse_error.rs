use crate::interpreter::token::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while matching tokens to the grammar.
pub enum ParseError {
    /// Found a token of a different kind than the grammar requires.
    UnexpectedToken {
        /// The kind the grammar asked for.
        expected: TokenKind,
        /// The token actually encountered.
        found:    Token,
        /// Byte offset at which `found` begins.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first leftover token.
        found:    Token,
        /// Byte offset at which `found` begins.
        position: usize,
    },
}

impl ParseError {
    /// Byte offset at which the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedTrailingTokens { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found: Token::EndOfInput,
                                    position, } => write!(f,
                                                          "Error at column {position}: Unexpected end of input, expected {expected}."),

            Self::UnexpectedToken { expected, found, position } => write!(f,
                                                                          "Error at column {position}: Unexpected token {found}, expected {expected}."),

            Self::UnexpectedTrailingTokens { found, position } => write!(f,
                                                                         "Error at column {position}: Extra tokens after expression, starting with {found}."),
        }
    }
}

impl std::error::Error for ParseError {}
