use std::fmt;

use crate::{
    error::RuntimeError,
    interpreter::token::{Token, TokenKind},
};

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, truncating toward zero.
    Div,
}

impl Operator {
    /// Maps an operator token to its operator; `None` for anything else.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::{evaluator::binary::Operator, token::Token};
    ///
    /// assert_eq!(Operator::from_token(Token::Plus), Some(Operator::Add));
    /// assert_eq!(Operator::from_token(Token::Integer(1)), None);
    /// ```
    #[must_use]
    pub const fn from_token(token: Token) -> Option<Self> {
        match token {
            Token::Plus => Some(Self::Add),
            Token::Minus => Some(Self::Sub),
            Token::Multiply => Some(Self::Mul),
            Token::Divide => Some(Self::Div),
            Token::Integer(_) | Token::EndOfInput => None,
        }
    }

    /// The token kind this operator is spelled with.
    #[must_use]
    pub const fn kind(self) -> TokenKind {
        match self {
            Self::Add => TokenKind::Plus,
            Self::Sub => TokenKind::Minus,
            Self::Mul => TokenKind::Multiply,
            Self::Div => TokenKind::Divide,
        }
    }

    /// Source character of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Applies the operator to `left` and `right`.
    ///
    /// All four operations are checked. Division truncates toward zero.
    ///
    /// # Parameters
    /// - `left`: Accumulated value so far.
    /// - `right`: The operand that follows the operator.
    /// - `position`: Offset of the operator, for error reporting.
    ///
    /// # Errors
    /// - `DivisionByZero` if `self` is `Div` and `right` is zero.
    /// - `Overflow` if the result does not fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use tally::{error::RuntimeError, interpreter::evaluator::binary::Operator};
    ///
    /// assert_eq!(Operator::Div.apply(7, 2, 0), Ok(3));
    /// assert_eq!(Operator::Div.apply(-7, 2, 0), Ok(-3));
    /// assert_eq!(Operator::Div.apply(1, 0, 4),
    ///            Err(RuntimeError::DivisionByZero { position: 4 }));
    /// ```
    pub const fn apply(self, left: i64, right: i64, position: usize) -> Result<i64, RuntimeError> {
        let result = match self {
            Self::Add => left.checked_add(right),
            Self::Sub => left.checked_sub(right),
            Self::Mul => left.checked_mul(right),
            Self::Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero { position });
                }
                left.checked_div(right)
            },
        };

        match result {
            Some(value) => Ok(value),
            None => Err(RuntimeError::Overflow { operator: self,
                                                 position }),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
