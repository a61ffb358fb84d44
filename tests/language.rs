use tally::{
    Error,
    error::{ErrorCategory, LexError, ParseError, RuntimeError},
    evaluate,
    interpreter::{
        evaluator::{binary::Operator, core::Evaluator},
        lexer::Lexer,
        token::{Token, TokenKind},
    },
    validate,
};

fn assert_value(src: &str, expected: i64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "wrong value for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, category: ErrorCategory) {
    match evaluate(src) {
        Ok(value) => panic!("Expression {src:?} evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(e.category(), category, "wrong category for {src:?}: {e}"),
    }
}

#[test]
fn single_integer_evaluates_to_itself() {
    for n in [0, 1, 7, 42, 1234, 9_223_372_036_854_775_807] {
        assert_value(&n.to_string(), n);
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1+1", 2);
    assert_value("13 - 12", 1);
    assert_value("2 * 3", 6);
    assert_value("4 / 2", 2);
    assert_value("1 - 5", -4);
}

#[test]
fn operators_fold_left_to_right_without_precedence() {
    assert_value("1 + 5 / 2", 3);
    assert_value("10 - 2 * 3", 24);
    assert_value("2 + 4 / 2 * 3", 9);
    assert_value("160/2*30", 2400);
    assert_value("1 - 2 - 3", -4);
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("3 / 2", 1);
    assert_value("4 / 2", 2);
    assert_value("0 - 7 / 2", -3);
    assert_value("1 / 3", 0);
}

#[test]
fn whitespace_is_insignificant() {
    assert_value("1+1", 2);
    assert_value("1 + 1", 2);
    assert_value("  1 \t+\t 1  ", 2);
    assert_value("1\u{3000}+\u{a0}2", 3);
}

#[test]
fn multi_digit_integers_are_single_tokens() {
    assert_value("123+4", 127);
    assert_value("007 * 2", 14);
}

#[test]
fn invalid_character_is_lexical_error() {
    assert_failure("1 & 2", ErrorCategory::Lexical);
    assert_failure("(1 + 2)", ErrorCategory::Lexical);
    assert_failure("1.5", ErrorCategory::Lexical);
    assert_failure("x", ErrorCategory::Lexical);

    assert_eq!(evaluate("1 & 2"),
               Err(Error::Lex(LexError::InvalidCharacter { character: '&',
                                                           position:  2, })));
}

#[test]
fn invalid_character_after_valid_prefix_is_reported_where_it_occurs() {
    assert_eq!(evaluate("1 + 2 $"),
               Err(Error::Lex(LexError::InvalidCharacter { character: '$',
                                                           position:  6, })));
    assert_eq!(evaluate("é"),
               Err(Error::Lex(LexError::InvalidCharacter { character: 'é',
                                                           position:  0, })));
}

#[test]
fn division_by_zero_is_runtime_error() {
    assert_failure("5 / 0", ErrorCategory::DivisionByZero);
    assert_failure("1 + 1 - 2 / 0", ErrorCategory::DivisionByZero);
    assert_failure("4 / 2 / 0", ErrorCategory::DivisionByZero);
    assert_value("5 / 2 / 3 / 4", 0);

    assert_eq!(evaluate("5 / 0"),
               Err(Error::Runtime(RuntimeError::DivisionByZero { position: 2 })));
}

#[test]
fn repeated_operator_is_syntax_error() {
    assert_failure("1 + + 2", ErrorCategory::Syntax);
    assert_eq!(evaluate("1 + + 2"),
               Err(Error::Parse(ParseError::UnexpectedToken { expected: TokenKind::Integer,
                                                              found:    Token::Plus,
                                                              position: 4, })));
}

#[test]
fn missing_operands_are_syntax_errors() {
    assert_failure("+ 1", ErrorCategory::Syntax);
    assert_failure("1 +", ErrorCategory::Syntax);
    assert_eq!(evaluate("1 +"),
               Err(Error::Parse(ParseError::UnexpectedToken { expected: TokenKind::Integer,
                                                              found:    Token::EndOfInput,
                                                              position: 3, })));
}

#[test]
fn trailing_tokens_are_syntax_errors() {
    assert_failure("1 2", ErrorCategory::Syntax);
    assert_eq!(evaluate("12 34"),
               Err(Error::Parse(ParseError::UnexpectedTrailingTokens { found:    Token::Integer(34),
                                                                       position: 3, })));
}

#[test]
fn empty_input_fails() {
    assert_failure("", ErrorCategory::Syntax);
    assert_failure("   ", ErrorCategory::Syntax);
    assert_eq!(evaluate("   "),
               Err(Error::Parse(ParseError::UnexpectedToken { expected: TokenKind::Integer,
                                                              found:    Token::EndOfInput,
                                                              position: 3, })));
}

#[test]
fn oversized_literal_is_lexical_error() {
    assert_eq!(evaluate("1 + 9223372036854775808"),
               Err(Error::Lex(LexError::LiteralTooLarge { literal:  "9223372036854775808".to_string(),
                                                          position: 4, })));
}

#[test]
fn overflow_is_runtime_error() {
    assert_failure("9223372036854775807 + 1", ErrorCategory::Overflow);
    assert_failure("0 - 9223372036854775807 - 2", ErrorCategory::Overflow);
    assert_failure("4294967296 * 4294967296", ErrorCategory::Overflow);
    assert_value("0 - 9223372036854775807 - 1", i64::MIN);
}

#[test]
fn checked_division_overflow() {
    assert_eq!(Operator::Div.apply(i64::MIN, -1, 9),
               Err(RuntimeError::Overflow { operator: Operator::Div,
                                            position: 9, }));
}

#[test]
fn failure_does_not_affect_next_line() {
    assert_failure("5 / 0", ErrorCategory::DivisionByZero);
    assert_value("5 / 1", 5);
    assert_failure("1 & 1", ErrorCategory::Lexical);
    assert_value("1 + 1", 2);
}

#[test]
fn validate_checks_grammar_only() {
    assert!(validate("5 / 0").is_ok());
    assert!(validate("9223372036854775807 + 1").is_ok());
    assert!(validate("1 + 2 * 3").is_ok());

    assert_eq!(validate("1 + + 2").map_err(|e| e.category()), Err(ErrorCategory::Syntax));
    assert_eq!(validate("1 ^ 2").map_err(|e| e.category()), Err(ErrorCategory::Lexical));
    assert_eq!(validate("").map_err(|e| e.category()), Err(ErrorCategory::Syntax));
}

#[test]
fn evaluator_steps_through_tokens() {
    let mut evaluator = Evaluator::new(Lexer::new("6 / 2")).unwrap();
    assert_eq!(evaluator.current_token(), Token::Integer(6));

    assert_eq!(evaluator.factor(), Ok(6));
    assert_eq!(evaluator.current_token(), Token::Divide);

    assert!(matches!(evaluator.consume(TokenKind::Integer),
                     Err(Error::Parse(ParseError::UnexpectedToken { expected: TokenKind::Integer,
                                                                    found: Token::Divide,
                                                                    position: 2 }))));
    assert_eq!(evaluator.current_token(), Token::Divide);

    assert_eq!(evaluator.consume(TokenKind::Divide), Ok(()));
    assert_eq!(evaluator.factor(), Ok(2));
    assert_eq!(evaluator.current_token(), Token::EndOfInput);
}

#[test]
fn evaluator_rejects_invalid_first_token() {
    assert!(matches!(Evaluator::new(Lexer::new("?")),
                     Err(Error::Lex(LexError::InvalidCharacter { character: '?', .. }))));
}

#[test]
fn error_messages_name_the_column() {
    assert_eq!(evaluate("1 & 2").unwrap_err().to_string(),
               "Error at column 2: Invalid character '&'.");
    assert_eq!(evaluate("5 / 0").unwrap_err().to_string(),
               "Error at column 2: Division by zero.");
    assert_eq!(evaluate("1 +").unwrap_err().to_string(),
               "Error at column 3: Unexpected end of input, expected INTEGER.");
    assert_eq!(evaluate("1 + * 2").unwrap_err().to_string(),
               "Error at column 4: Unexpected token Token(MULT, '*'), expected INTEGER.");
    assert_eq!(evaluate("1 2").unwrap_err().to_string(),
               "Error at column 2: Extra tokens after expression, starting with Token(INTEGER, 2).");
}
