mod repl;

use std::{fs, process::ExitCode};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::repl::Mode;

/// tally evaluates integer expressions strictly left to right.
///
/// Without an expression it starts an interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the argument as a path and evaluate each of its lines.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Only check that the input is well-formed; prints `Valid`.
    #[arg(short, long, conflicts_with = "tokens")]
    check: bool,

    /// Print the token stream instead of evaluating.
    #[arg(short, long)]
    tokens: bool,

    /// Prompt shown by the interactive loop.
    #[arg(long, default_value = "calc> ")]
    prompt: String,

    /// Log filter, e.g. `debug` or `tally=trace`. Defaults to `RUST_LOG`, then
    /// `warn`.
    #[arg(long)]
    log_level: Option<String>,

    /// An expression, or a path when `--file` is given.
    contents: Option<String>,
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt().with_writer(std::io::stderr)
                             .with_env_filter(filter)
                             .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level.as_deref());

    let mode = if args.tokens {
        Mode::Tokens
    } else if args.check {
        Mode::Check
    } else {
        Mode::Evaluate
    };

    let Some(contents) = args.contents else {
        return match repl::run(&args.prompt, mode) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            },
        };
    };

    if args.file {
        let script = match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{contents}': {e}");
                return ExitCode::FAILURE;
            },
        };

        let mut failed = false;
        for line in script.lines().map(str::trim).filter(|line| !line.is_empty()) {
            failed |= !repl::run_line(line, mode);
        }
        return if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS };
    }

    if repl::run_line(contents.trim(), mode) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
