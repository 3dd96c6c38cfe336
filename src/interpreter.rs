/// Evaluation settings.
///
/// Declares [`config::EvalConfig`], which bounds parenthesis nesting and
/// decides whether input after a complete expression is an error.
pub mod config;
/// The lexer module tokenizes source text for the parser.
///
/// The lexer reads the raw input and produces tokens on demand: integer
/// literals, the four operators and parentheses, and an end-of-input marker.
///
/// # Responsibilities
/// - Skips whitespace between tokens.
/// - Converts digit runs into exact integer values.
/// - Reports lexical errors for characters that start no token.
pub mod lexer;
/// Binary operators and their arithmetic.
///
/// Maps operator tokens to [`operator::BinaryOperator`] and combines two
/// operands, checking division by zero and overflow.
pub mod operator;
/// The parser module evaluates expressions by recursive descent.
///
/// The parser pulls tokens from the lexer one at a time and computes the
/// value of the expression while it recognizes it. One method per grammar
/// level gives `*` and `/` precedence over `+` and `-`.
///
/// # Responsibilities
/// - Matches tokens against the grammar, reporting syntax errors with the
///   expected and found token kinds.
/// - Evaluates left to right within a precedence level.
/// - Bounds recursion depth on nested parentheses.
pub mod parser;
