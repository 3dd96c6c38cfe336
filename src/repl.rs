use std::io::{BufRead, StdinLock, Stdout, Write, stdin, stdout};

use log::debug;

use crate::{evaluate_with, interpreter::config::EvalConfig};

/// Text written before every line read.
pub const PROMPT: &str = "Enter an expression (or \"exit\"): ";

/// What a single input line asks the shell to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `exit` in any letter case: leave the loop.
    Exit,
    /// A blank line: do nothing.
    Empty,
    /// Anything else, trimmed.
    Evaluate(&'a str),
}

impl<'a> Command<'a> {
    /// Classifies a raw input line.
    ///
    /// # Example
    /// ```
    /// use tally::repl::Command;
    ///
    /// assert_eq!(Command::parse("  EXIT \n"), Command::Exit);
    /// assert_eq!(Command::parse("   "), Command::Empty);
    /// assert_eq!(Command::parse(" 1 + 1\n"), Command::Evaluate("1 + 1"));
    /// ```
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        let text = line.trim();
        if text.eq_ignore_ascii_case("exit") {
            Self::Exit
        } else if text.is_empty() {
            Self::Empty
        } else {
            Self::Evaluate(text)
        }
    }
}

/// Interactive read-evaluate-print loop.
///
/// Reads one expression per line, prints `Result: <value>` or the error
/// message, and keeps going until `exit` or end of input. Evaluation errors
/// never end the loop; only I/O errors do.
pub struct Repl<R, W>
    where R: BufRead,
          W: Write
{
    reader: R,
    writer: W,
    config: EvalConfig,
}

impl Repl<StdinLock<'static>, Stdout> {
    /// Creates a shell on the process's standard input and output.
    #[must_use]
    pub fn new_with_defaults(config: EvalConfig) -> Self {
        Self::new(stdin().lock(), stdout(), config)
    }
}

impl<R, W> Repl<R, W>
    where R: BufRead,
          W: Write
{
    /// Creates a shell that reads lines from `reader` and writes prompts,
    /// results and error messages to `writer`.
    pub const fn new(reader: R, writer: W, config: EvalConfig) -> Self {
        Self { reader,
               writer,
               config }
    }

    /// Runs the loop until `exit` or end of input.
    ///
    /// # Errors
    /// Returns any error raised while reading input or writing output.
    ///
    /// # Example
    /// ```
    /// use tally::{EvalConfig, repl::Repl};
    ///
    /// let input = "2 + 3 * 4\n7 / 0\nexit\n1 + 1\n".as_bytes();
    /// let mut output = Vec::new();
    /// Repl::new(input, &mut output, EvalConfig::default()).run().unwrap();
    ///
    /// let output = String::from_utf8(output).unwrap();
    /// assert!(output.contains("Result: 14"));
    /// assert!(output.contains("Division by zero"));
    /// assert!(!output.contains("Result: 2"));
    /// ```
    pub fn run(&mut self) -> std::io::Result<()> {
        let mut line = String::new();
        loop {
            write!(self.writer, "{PROMPT}")?;
            self.writer.flush()?;

            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                writeln!(self.writer)?;
                debug!("end of input");
                return Ok(());
            }

            match Command::parse(&line) {
                Command::Exit => return Ok(()),
                Command::Empty => {},
                Command::Evaluate(text) => self.print_evaluation(text)?,
            }
        }
    }

    /// Evaluates `text` and writes the outcome as one line: `Result: <value>`,
    /// or the error's own message (`Error at position <n>: ...`).
    ///
    /// # Errors
    /// Returns an error only if writing fails.
    pub fn print_evaluation(&mut self, text: &str) -> std::io::Result<()> {
        match evaluate_with(text, &self.config) {
            Ok(value) => writeln!(self.writer, "Result: {value}"),
            Err(e) => writeln!(self.writer, "{e}"),
        }
    }

    /// Consumes the shell and returns its writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}
