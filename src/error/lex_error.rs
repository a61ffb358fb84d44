#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning characters.
pub enum LexError {
    /// A character that is not whitespace, a digit, or an operator.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        position:  usize,
    },
    /// A digit run too large to be represented as an `i64`.
    LiteralTooLarge {
        /// The digits as written.
        literal:  String,
        /// Byte offset of the first digit.
        position: usize,
    },
}

impl LexError {
    /// Byte offset at which the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidCharacter { position, .. } | Self::LiteralTooLarge { position, .. } => {
                *position
            },
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, position } => {
                write!(f, "Error at column {position}: Invalid character '{character}'.")
            },
            Self::LiteralTooLarge { literal, position } => write!(f,
                                                                  "Error at column {position}: Literal {literal} is too large."),
        }
    }
}

impl std::error::Error for LexError {}
