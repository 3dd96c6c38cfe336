use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while matching tokens against the
/// grammar.
pub enum SyntaxError {
    /// The current token is not the one the grammar requires here.
    UnexpectedToken {
        /// The kind the grammar asked for.
        expected: TokenKind,
        /// The kind actually found.
        found:    TokenKind,
        /// Byte offset of the found token.
        position: usize,
    },
    /// Parentheses are nested deeper than the configured limit.
    NestingTooDeep {
        /// The configured maximum depth.
        limit:    usize,
        /// Byte offset of the opening parenthesis that crossed the limit.
        position: usize,
    },
}

impl SyntaxError {
    /// Byte offset in the input where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. } | Self::NestingTooDeep { position, .. } => {
                *position
            },
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    position, } => write!(f,
                                                          "Error at position {position}: Expected {expected}, found {found}."),
            Self::NestingTooDeep { limit, position } => write!(f,
                                                               "Error at position {position}: Parentheses nested deeper than {limit} levels."),
        }
    }
}

impl std::error::Error for SyntaxError {}
