use tracing::debug;

use crate::{
    error::{Error, ParseError},
    interpreter::{
        evaluator::binary::Operator,
        lexer::Lexer,
        token::{Token, TokenKind},
    },
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, Error>;

/// A fused parser and interpreter for one line of input.
///
/// The evaluator holds a single lookahead token and pulls the next one from
/// its [`Lexer`] whenever it consumes the current one. It recognises
///
/// ```text
/// expr   := factor ( (PLUS | MINUS | MULT | DIV) factor )*
/// factor := INTEGER
/// ```
///
/// and folds the operands into an accumulator strictly left to right. There
/// are no precedence tiers: `10 - 2 * 3` is `(10 - 2) * 3`.
///
/// `evaluate` and `validate` take `self` by value; an evaluator is used for
/// exactly one pass.
#[derive(Debug)]
pub struct Evaluator<'a> {
    lexer:          Lexer<'a>,
    current_token:  Token,
    token_position: usize,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator and primes the lookahead with the first token.
    ///
    /// # Errors
    /// Returns a lexical error if the first token cannot be scanned.
    pub fn new(mut lexer: Lexer<'a>) -> EvalResult<Self> {
        let current_token = lexer.next_token()?;
        let token_position = lexer.token_start();
        Ok(Self { lexer,
                  current_token,
                  token_position })
    }

    /// The lookahead token.
    #[must_use]
    pub const fn current_token(&self) -> Token {
        self.current_token
    }

    /// Replaces the lookahead with the next token if it has kind `expected`.
    ///
    /// # Errors
    /// - `UnexpectedToken` if the lookahead has a different kind.
    /// - Any lexical error raised while scanning the next token.
    pub fn consume(&mut self, expected: TokenKind) -> EvalResult<()> {
        if self.current_token.kind() != expected {
            return Err(self.unexpected(expected));
        }

        self.current_token = self.lexer.next_token()?;
        self.token_position = self.lexer.token_start();
        Ok(())
    }

    /// Consumes one `Integer` token and returns its value.
    ///
    /// # Errors
    /// `UnexpectedToken` if the lookahead is not an integer.
    pub fn factor(&mut self) -> EvalResult<i64> {
        let Token::Integer(value) = self.current_token else {
            return Err(self.unexpected(TokenKind::Integer));
        };
        self.consume(TokenKind::Integer)?;
        Ok(value)
    }

    /// Parses the whole line and returns its value.
    ///
    /// # Errors
    /// - Lexical errors from the underlying lexer.
    /// - `UnexpectedToken` where an integer or operator is missing, including
    ///   on empty input.
    /// - `UnexpectedTrailingTokens` if anything but end of input follows a
    ///   complete expression.
    /// - `DivisionByZero` or `Overflow` from applying an operator.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::{evaluator::core::Evaluator, lexer::Lexer};
    ///
    /// let evaluator = Evaluator::new(Lexer::new("10 - 2 * 3")).unwrap();
    /// assert_eq!(evaluator.evaluate().unwrap(), 24);
    /// ```
    pub fn evaluate(mut self) -> EvalResult<i64> {
        let result = self.expr(true)?;
        debug!(result, "evaluated expression");
        Ok(result)
    }

    /// Checks that the line matches the grammar without computing anything.
    ///
    /// Never raises a runtime error, so `1 / 0` is valid here.
    ///
    /// # Errors
    /// The same lexical and syntax errors as [`Evaluator::evaluate`].
    pub fn validate(mut self) -> EvalResult<()> {
        self.expr(false)?;
        debug!("expression is valid");
        Ok(())
    }

    fn expr(&mut self, compute: bool) -> EvalResult<i64> {
        let mut result = self.factor()?;

        while let Some(operator) = Operator::from_token(self.current_token) {
            let position = self.token_position;
            self.consume(operator.kind())?;
            let rhs = self.factor()?;

            if compute {
                let value = operator.apply(result, rhs, position)?;
                debug!(lhs = result, %operator, rhs, value, "applied operator");
                result = value;
            }
        }

        if self.current_token.kind() != TokenKind::EndOfInput {
            return Err(ParseError::UnexpectedTrailingTokens { found:    self.current_token,
                                                              position: self.token_position, }.into());
        }

        Ok(result)
    }

    fn unexpected(&self, expected: TokenKind) -> Error {
        ParseError::UnexpectedToken { expected,
                                      found: self.current_token,
                                      position: self.token_position }.into()
    }
}
