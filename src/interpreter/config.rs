/// Default limit on nested parentheses.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// What the parser does with tokens left over after a complete expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingInput {
    /// Stop after the expression and drop whatever follows, so `1 + 2 )`
    /// evaluates to `3`.
    #[default]
    Ignore,
    /// Require the expression to be followed by end of input.
    Reject,
}

/// Settings for a single evaluation.
///
/// ## Usage
///
/// The defaults reproduce the loose entry point of the grammar: trailing
/// input is ignored. Set [`TrailingInput::Reject`] for strict parsing.
///
/// ```
/// use tally::{EvalConfig, TrailingInput, evaluate_with};
///
/// let strict = EvalConfig { trailing_input: TrailingInput::Reject,
///                           ..EvalConfig::default() };
///
/// assert_eq!(evaluate_with("1 + 2 )", &EvalConfig::default()), Ok(3.0));
/// assert!(evaluate_with("1 + 2 )", &strict).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalConfig {
    /// Maximum depth of nested parentheses. Bounds the recursion of the
    /// parser, and with it stack usage.
    pub max_depth:      usize,
    /// Handling of input after the expression.
    pub trailing_input: TrailingInput,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self { max_depth:      DEFAULT_MAX_DEPTH,
               trailing_input: TrailingInput::default(), }
    }
}
