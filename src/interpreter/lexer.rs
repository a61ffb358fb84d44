use std::iter::FusedIterator;

use tracing::trace;

use crate::{error::LexError, interpreter::token::Token};

/// An on-demand scanner over a single line of input.
///
/// The lexer keeps no token queue. Each call to [`Lexer::next_token`] moves
/// the cursor forward past exactly one token and returns it. The cursor only
/// ever moves forward; once the input is exhausted every further call yields
/// [`Token::EndOfInput`].
///
/// # Example
/// ```
/// use tally::interpreter::{lexer::Lexer, token::Token};
///
/// let mut lexer = Lexer::new("12 * 3");
/// assert_eq!(lexer.next_token(), Ok(Token::Integer(12)));
/// assert_eq!(lexer.next_token(), Ok(Token::Multiply));
/// assert_eq!(lexer.next_token(), Ok(Token::Integer(3)));
/// assert_eq!(lexer.next_token(), Ok(Token::EndOfInput));
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    text:         &'a str,
    position:     usize,
    current_char: Option<char>,
    token_start:  usize,
    finished:     bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at the first character of `text`.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self { text,
               position: 0,
               current_char: text.chars().next(),
               token_start: 0,
               finished: false }
    }

    /// Byte offset of the next unconsumed character.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The character under the cursor, or `None` past the end of input.
    #[must_use]
    pub const fn current_char(&self) -> Option<char> {
        self.current_char
    }

    /// Byte offset at which the most recently returned token began.
    #[must_use]
    pub const fn token_start(&self) -> usize {
        self.token_start
    }

    /// Returns the next token and advances past it.
    ///
    /// # Errors
    /// - `InvalidCharacter` if the character under the cursor is not
    ///   whitespace, a digit, or one of `+ - * /`. The cursor is left on the
    ///   offending character.
    /// - `LiteralTooLarge` if a digit run does not fit in an `i64`.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        self.token_start = self.position;

        let token = match self.current_char {
            None => Token::EndOfInput,
            Some(c) if c.is_ascii_digit() => Token::Integer(self.read_integer()?),
            Some(c) => match Token::from_operator(c) {
                Some(token) => {
                    self.advance();
                    token
                },
                None => {
                    return Err(LexError::InvalidCharacter { character: c,
                                                            position:  self.position, });
                },
            },
        };

        trace!(%token, position = self.token_start, "lexed token");
        Ok(token)
    }

    fn advance(&mut self) {
        if let Some(c) = self.current_char {
            self.position += c.len_utf8();
        }
        self.current_char = self.text[self.position..].chars().next();
    }

    fn skip_whitespace(&mut self) {
        while self.current_char.is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Consumes a run of digits. Must only be called with a digit under the
    /// cursor.
    fn read_integer(&mut self) -> Result<i64, LexError> {
        let start = self.position;
        let mut digits = String::new();
        while let Some(c) = self.current_char
              && c.is_ascii_digit()
        {
            digits.push(c);
            self.advance();
        }

        digits.parse()
              .map_err(|_| LexError::LiteralTooLarge { literal:  digits.clone(),
                                                       position: start, })
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    /// Yields every token including a single trailing `EndOfInput`, then
    /// `None`. A lexical error is yielded once and ends the sequence.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let item = self.next_token();
        if matches!(item, Ok(Token::EndOfInput) | Err(_)) {
            self.finished = true;
        }
        Some(item)
    }
}

impl FusedIterator for Lexer<'_> {}

/// Collects the full token stream of `text`, including the trailing
/// `EndOfInput`.
///
/// # Errors
/// Returns the first [`LexError`] encountered.
///
/// # Example
/// ```
/// use tally::interpreter::{lexer::tokenize, token::Token};
///
/// let tokens = tokenize("123+4").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Integer(123), Token::Plus, Token::Integer(4), Token::EndOfInput]);
/// ```
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(text).collect()
}
