#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing the input.
///
/// Digit runs of any length are valid, so the only failure is a character
/// that starts no token.
pub enum LexicalError {
    /// Found a character that does not start any token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        position:  usize,
    },
}

impl LexicalError {
    /// Byte offset in the input where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, position } => {
                write!(f, "Error at position {position}: Unknown character {character:?}.")
            },
        }
    }
}

impl std::error::Error for LexicalError {}
