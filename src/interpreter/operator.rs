use crate::{error::ArithmeticError, interpreter::lexer::TokenKind, util::num::finite_checked};

/// The four binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Maps a token kind to its binary operator.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::{lexer::TokenKind, operator::BinaryOperator};
    ///
    /// assert_eq!(BinaryOperator::from_token(TokenKind::Div), Some(BinaryOperator::Div));
    /// assert_eq!(BinaryOperator::from_token(TokenKind::LParen), None);
    /// ```
    #[must_use]
    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            TokenKind::Mul => Some(Self::Mul),
            TokenKind::Div => Some(Self::Div),
            TokenKind::Integer | TokenKind::LParen | TokenKind::RParen | TokenKind::EndOfInput => {
                None
            },
        }
    }

    /// The token kind that spells this operator.
    #[must_use]
    pub const fn token_kind(self) -> TokenKind {
        match self {
            Self::Add => TokenKind::Plus,
            Self::Sub => TokenKind::Minus,
            Self::Mul => TokenKind::Mul,
            Self::Div => TokenKind::Div,
        }
    }

    /// Returns `true` for `+` and `-`.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }

    /// Returns `true` for `*` and `/`.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }

    /// Combines two operands.
    ///
    /// Division is real division and never truncates. Division by zero is
    /// checked explicitly.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Byte offset of the operator, for error reporting.
    ///
    /// # Errors
    /// - [`ArithmeticError::DivisionByZero`] if `self` is `Div` and `right`
    ///   is zero.
    /// - [`ArithmeticError::Overflow`] if the result is not finite.
    ///
    /// # Example
    /// ```
    /// use tally::{error::ArithmeticError, interpreter::operator::BinaryOperator};
    ///
    /// assert_eq!(BinaryOperator::Div.apply(7.0, 2.0, 2), Ok(3.5));
    /// assert_eq!(BinaryOperator::Div.apply(7.0, 0.0, 2),
    ///            Err(ArithmeticError::DivisionByZero { position: 2 }));
    /// ```
    pub fn apply(self, left: f64, right: f64, position: usize) -> Result<f64, ArithmeticError> {
        let value = match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => {
                if right == 0.0 {
                    return Err(ArithmeticError::DivisionByZero { position });
                }
                left / right
            },
        };

        finite_checked(value, position)
    }
}
