use rustyline::{DefaultEditor, error::ReadlineError};
use tally::interpreter::lexer::Lexer;
use tracing::{debug, warn};

/// What to do with each line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print the value of the expression.
    Evaluate,
    /// Print `Valid` if the expression is well-formed.
    Check,
    /// Print the tokens of the line.
    Tokens,
}

/// Runs the interactive prompt until end of input or `exit`.
///
/// Every line is handled independently; an error is reported and the loop
/// keeps going.
pub fn run(prompt: &str, mode: Mode) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "exit" || line == "quit" {
                    break;
                }
                if let Err(e) = rl.add_history_entry(line) {
                    warn!(error = %e, "could not record history entry");
                }
                run_line(line, mode);
            },
            Err(ReadlineError::Interrupted) => {
                debug!("line discarded");
            },
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

/// Handles one line and prints its outcome. Returns `false` on failure.
pub fn run_line(line: &str, mode: Mode) -> bool {
    let outcome = match mode {
        Mode::Evaluate => tally::evaluate(line).map(|value| value.to_string()),
        Mode::Check => tally::validate(line).map(|()| "Valid".to_string()),
        Mode::Tokens => return print_tokens(line),
    };

    match outcome {
        Ok(output) => {
            println!("{output}");
            true
        },
        Err(e) => {
            debug!(category = %e.category(), position = e.position(), "line failed");
            eprintln!("error: {e}");
            false
        },
    }
}

/// Renders every token of `line` on one line, or the lexical error.
fn print_tokens(line: &str) -> bool {
    let mut rendered = Vec::new();
    for token in Lexer::new(line) {
        match token {
            Ok(token) => rendered.push(token.to_string()),
            Err(e) => {
                eprintln!("error: {e}");
                return false;
            },
        }
    }
    println!("{}", rendered.join(" "));
    true
}
