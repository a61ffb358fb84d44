use std::fmt;

/// The closed set of token categories produced by the lexer.
///
/// Every dispatch on a token category (lexer construction, evaluator
/// `consume` checks) matches on this enum, so adding a category is caught at
/// each site by exhaustiveness checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of ASCII digits.
    Integer,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// The sentinel produced once the input is exhausted.
    EndOfInput,
}

impl TokenKind {
    /// Returns `true` for the four binary operator kinds.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        matches!(self, Self::Plus | Self::Minus | Self::Multiply | Self::Divide)
    }

    /// Upper-case name used when rendering tokens and error messages.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Multiply => "MULT",
            Self::Divide => "DIV",
            Self::EndOfInput => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The payload carried by a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenValue {
    /// Value of an `Integer` token.
    Integer(i64),
    /// Literal character of an operator token.
    Operator(char),
}

/// A lexical token.
///
/// The payload lives inside the variant, so an `Integer` token always holds a
/// number, operators hold nothing beyond their character, and `EndOfInput`
/// holds nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Integer literal such as `42`.
    Integer(i64),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// End of input sentinel.
    EndOfInput,
}

impl Token {
    /// Returns the category of this token.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::token::{Token, TokenKind};
    ///
    /// assert_eq!(Token::Integer(7).kind(), TokenKind::Integer);
    /// assert_eq!(Token::EndOfInput.kind(), TokenKind::EndOfInput);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Integer(_) => TokenKind::Integer,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Multiply => TokenKind::Multiply,
            Self::Divide => TokenKind::Divide,
            Self::EndOfInput => TokenKind::EndOfInput,
        }
    }

    /// Returns the payload of this token, or `None` for `EndOfInput`.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::token::{Token, TokenValue};
    ///
    /// assert_eq!(Token::Integer(12).value(), Some(TokenValue::Integer(12)));
    /// assert_eq!(Token::Divide.value(), Some(TokenValue::Operator('/')));
    /// assert_eq!(Token::EndOfInput.value(), None);
    /// ```
    #[must_use]
    pub const fn value(&self) -> Option<TokenValue> {
        match self {
            Self::Integer(n) => Some(TokenValue::Integer(*n)),
            Self::Plus => Some(TokenValue::Operator('+')),
            Self::Minus => Some(TokenValue::Operator('-')),
            Self::Multiply => Some(TokenValue::Operator('*')),
            Self::Divide => Some(TokenValue::Operator('/')),
            Self::EndOfInput => None,
        }
    }

    /// Maps an operator character to its token.
    #[must_use]
    pub const fn from_operator(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(TokenValue::Integer(n)) => write!(f, "Token({}, {n})", self.kind()),
            Some(TokenValue::Operator(c)) => write!(f, "Token({}, '{c}')", self.kind()),
            None => write!(f, "Token({}, None)", self.kind()),
        }
    }
}
