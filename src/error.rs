/// Lexical errors.
///
/// Raised by the lexer when the input contains a character that starts no
/// token.
pub mod lexical_error;
/// Syntax errors.
///
/// Raised by the parser when a token appears where the grammar does not allow
/// it, or when parentheses are nested past the configured limit.
pub mod syntax_error;
/// Arithmetic errors.
///
/// Raised while evaluating a well-formed expression whose value is undefined,
/// such as a division by zero.
pub mod arithmetic_error;

pub use arithmetic_error::ArithmeticError;
pub use lexical_error::LexicalError;
pub use syntax_error::SyntaxError;

/// Result type of a full evaluation.
pub type EvalResult<T> = Result<T, EvalError>;

/// The single error surface of [`crate::evaluate`].
///
/// Each variant wraps one of the three error kinds. Conversions are provided
/// so that `?` lifts any of them into an `EvalError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The input could not be tokenized.
    Lexical(LexicalError),
    /// The tokens do not form an expression.
    Syntax(SyntaxError),
    /// The expression has no defined value.
    Arithmetic(ArithmeticError),
}

impl EvalError {
    /// Byte offset in the input where the first fault was detected.
    ///
    /// # Example
    /// ```
    /// let err = tally::evaluate("3 + @").unwrap_err();
    /// assert_eq!(err.position(), 4);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Lexical(e) => e.position(),
            Self::Syntax(e) => e.position(),
            Self::Arithmetic(e) => e.position(),
        }
    }
}

impl From<LexicalError> for EvalError {
    fn from(value: LexicalError) -> Self {
        Self::Lexical(value)
    }
}

impl From<SyntaxError> for EvalError {
    fn from(value: SyntaxError) -> Self {
        Self::Syntax(value)
    }
}

impl From<ArithmeticError> for EvalError {
    fn from(value: ArithmeticError) -> Self {
        Self::Arithmetic(value)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Arithmetic(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lexical(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Arithmetic(e) => Some(e),
        }
    }
}
