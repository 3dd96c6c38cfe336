use tally::{
    EvalConfig, TrailingInput,
    repl::{Command, PROMPT, Repl},
};

fn run(input: &str, config: EvalConfig) -> String {
    let mut repl = Repl::new(input.as_bytes(), Vec::new(), config);
    repl.run().expect("in-memory I/O cannot fail");
    String::from_utf8(repl.into_writer()).expect("output is UTF-8")
}

fn results(output: &str) -> Vec<&str> {
    output.split(PROMPT)
          .map(str::trim)
          .filter(|s| !s.is_empty())
          .collect()
}

#[test]
fn prints_results_and_errors_without_stopping() {
    let output = run("2 + 3 * 4\n3 + @\n(1 + 2\n7 / 0\n10 / 4\n", EvalConfig::default());

    let lines = results(&output);
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Result: 14");
    assert!(lines[1].contains("Unknown character '@'"));
    assert!(lines[2].contains("Expected ')', found end of input"));
    assert!(lines[3].contains("Division by zero"));
    assert_eq!(lines[4], "Result: 2.5");
}

#[test]
fn errors_are_written_as_their_message() {
    let output = run("3 + @\n7 / 0\n", EvalConfig::default());

    assert_eq!(results(&output),
               vec!["Error at position 4: Unknown character '@'.",
                    "Error at position 2: Division by zero."]);
}

#[test]
fn exit_is_case_insensitive_and_trimmed() {
    let output = run("1 + 1\n   ExIt  \n2 + 2\n", EvalConfig::default());

    assert_eq!(results(&output), vec!["Result: 2"]);
}

#[test]
fn blank_lines_are_skipped() {
    let output = run("\n   \n5\n", EvalConfig::default());

    assert_eq!(results(&output), vec!["Result: 5"]);
    assert_eq!(output.matches(PROMPT).count(), 4);
}

#[test]
fn end_of_input_ends_the_loop() {
    let output = run("", EvalConfig::default());

    assert_eq!(output, format!("{PROMPT}\n"));
}

#[test]
fn shell_uses_its_configuration() {
    let strict = EvalConfig { trailing_input: TrailingInput::Reject,
                              ..EvalConfig::default() };

    assert_eq!(results(&run("4 5\n", EvalConfig::default())), vec!["Result: 4"]);
    assert!(results(&run("4 5\n", strict))[0].contains("Expected end of input"));
}

#[test]
fn commands_are_classified() {
    assert_eq!(Command::parse("exit"), Command::Exit);
    assert_eq!(Command::parse("EXIT\n"), Command::Exit);
    assert_eq!(Command::parse("exit now"), Command::Evaluate("exit now"));
    assert_eq!(Command::parse("\t\n"), Command::Empty);
}
