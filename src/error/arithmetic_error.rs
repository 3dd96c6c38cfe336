#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents a well-formed expression whose value cannot be computed.
pub enum ArithmeticError {
    /// Attempted division by zero.
    DivisionByZero {
        /// Byte offset of the `/` operator.
        position: usize,
    },
    /// An intermediate result left the finite range of `f64`.
    Overflow {
        /// Byte offset of the operator that overflowed.
        position: usize,
    },
}

impl ArithmeticError {
    /// Byte offset of the operator that failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::DivisionByZero { position } | Self::Overflow { position } => *position,
        }
    }
}

impl std::fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
            Self::Overflow { position } => write!(f,
                                                  "Error at position {position}: Overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for ArithmeticError {}
