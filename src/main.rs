use std::{fs, process::ExitCode};

use clap::Parser;
use tally::{EvalConfig, TrailingInput, evaluate_with, interpreter::config::DEFAULT_MAX_DEPTH,
            repl::Repl};

/// tally evaluates integer arithmetic expressions using `+ - * / ( )`.
///
/// Without arguments it starts an interactive shell.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells tally to read expressions, one per line, from the file named by
    /// `contents`.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Reject input left over after a complete expression.
    #[arg(short, long)]
    strict: bool,

    /// Maximum depth of nested parentheses.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// An expression to evaluate, or a file path with `--file`.
    contents: Option<String>,
}

impl Args {
    const fn config(&self) -> EvalConfig {
        EvalConfig { max_depth:      self.max_depth,
                     trailing_input: if self.strict {
                         TrailingInput::Reject
                     } else {
                         TrailingInput::Ignore
                     }, }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let config = args.config();

    match args.contents {
        None => {
            if let Err(e) = Repl::new_with_defaults(config).run() {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        },
        Some(path) if args.file => {
            let Ok(script) = fs::read_to_string(&path) else {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            };
            evaluate_lines(&script, &config)
        },
        Some(expression) => evaluate_lines(&expression, &config),
    }
}

/// Evaluates every non-blank line, printing each result or error.
fn evaluate_lines(script: &str, config: &EvalConfig) -> ExitCode {
    let mut status = ExitCode::SUCCESS;

    for line in script.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match evaluate_with(line, config) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                status = ExitCode::FAILURE;
            },
        }
    }

    status
}
