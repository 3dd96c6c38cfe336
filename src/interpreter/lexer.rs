use log::trace;
use logos::Logos;

use crate::{error::LexicalError, util::num::u64_to_f64};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexicalError>;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Only [`Token::Integer`] carries a value; every other variant is a single
/// character, except [`Token::EndOfInput`] which marks exhausted input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    Integer(Literal),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// No characters are left.
    EndOfInput,
}

/// The value of an integer literal.
///
/// Digit runs have no length limit. A run that fits into a `u64` keeps its
/// exact value; a longer one is stored as the nearest `f64`, which is the
/// result type anyway.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    /// The digit run fits into a `u64`.
    Exact(u64),
    /// The digit run exceeds `u64::MAX`.
    Rounded(f64),
}

impl Literal {
    /// Reads a run of ASCII digits.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::lexer::Literal;
    ///
    /// assert_eq!(Literal::from_digits("18446744073709551615"), Literal::Exact(u64::MAX));
    /// assert_eq!(Literal::from_digits("100000000000000000000"), Literal::Rounded(1e20));
    /// ```
    #[must_use]
    pub fn from_digits(digits: &str) -> Self {
        digits.parse()
              .map_or_else(|_| Self::Rounded(digits.parse().unwrap_or(f64::INFINITY)),
                           Self::Exact)
    }

    /// The literal as a result value.
    #[must_use]
    pub const fn to_f64(self) -> f64 {
        match self {
            Self::Exact(value) => u64_to_f64(value),
            Self::Rounded(value) => value,
        }
    }
}

/// The kind of a [`Token`], without its value.
///
/// The parser matches on kinds when consuming tokens, and syntax errors
/// report the expected and found kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Integer,
    Plus,
    Minus,
    Mul,
    Div,
    LParen,
    RParen,
    EndOfInput,
}

impl Token {
    /// Returns the kind of this token.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::lexer::{Literal, Token, TokenKind};
    ///
    /// assert_eq!(Token::Integer(Literal::Exact(7)).kind(), TokenKind::Integer);
    /// assert_eq!(Token::EndOfInput.kind(), TokenKind::EndOfInput);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Integer(_) => TokenKind::Integer,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Mul => TokenKind::Mul,
            Self::Div => TokenKind::Div,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::EndOfInput => TokenKind::EndOfInput,
        }
    }

    /// Returns the value of an integer token, `None` for every other kind.
    #[must_use]
    pub const fn value(&self) -> Option<Literal> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Mul => write!(f, "'*'"),
            Self::Div => write!(f, "'/'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// Raw scanner output. Whitespace is skipped by the automaton itself.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"\s+")]
enum Lexeme {
    #[regex(r"[0-9]+", |lex| Literal::from_digits(lex.slice()))]
    Integer(Literal),
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Mul,
    #[token("/")]
    Div,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

impl From<Lexeme> for Token {
    fn from(value: Lexeme) -> Self {
        match value {
            Lexeme::Integer(n) => Self::Integer(n),
            Lexeme::Plus => Self::Plus,
            Lexeme::Minus => Self::Minus,
            Lexeme::Mul => Self::Mul,
            Lexeme::Div => Self::Div,
            Lexeme::LParen => Self::LParen,
            Lexeme::RParen => Self::RParen,
        }
    }
}

/// Pull-based tokenizer over a borrowed input string.
///
/// Tokens are produced one at a time by [`Lexer::next_token`]; nothing is
/// scanned ahead of the caller. Once the input is exhausted every further call
/// returns [`Token::EndOfInput`].
///
/// # Example
/// ```
/// use tally::interpreter::lexer::{Lexer, Literal, Token};
///
/// let mut lexer = Lexer::new("12 * (3)");
/// assert_eq!(lexer.next_token(), Ok(Token::Integer(Literal::Exact(12))));
/// assert_eq!(lexer.next_token(), Ok(Token::Mul));
/// assert_eq!(lexer.next_token(), Ok(Token::LParen));
/// assert_eq!(lexer.next_token(), Ok(Token::Integer(Literal::Exact(3))));
/// assert_eq!(lexer.next_token(), Ok(Token::RParen));
/// assert_eq!(lexer.next_token(), Ok(Token::EndOfInput));
/// assert_eq!(lexer.next_token(), Ok(Token::EndOfInput));
/// ```
pub struct Lexer<'source> {
    inner:    logos::Lexer<'source, Lexeme>,
    position: usize,
}

impl<'source> Lexer<'source> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { inner:    Lexeme::lexer(source),
               position: 0, }
    }

    /// Byte offset where the most recently produced token starts.
    ///
    /// For [`Token::EndOfInput`] this is the length of the input.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Produces the next token.
    ///
    /// Leading whitespace is skipped. A maximal run of ASCII digits of any
    /// length becomes a [`Token::Integer`]; each of `+ - * / ( )` becomes its
    /// own token.
    ///
    /// # Errors
    /// [`LexicalError::UnexpectedCharacter`] if the next non-whitespace
    /// character starts no token.
    pub fn next_token(&mut self) -> LexResult<Token> {
        let Some(lexeme) = self.inner.next() else {
            self.position = self.inner.source().len();
            trace!("lexed {:?} at {}", Token::EndOfInput, self.position);
            return Ok(Token::EndOfInput);
        };

        self.position = self.inner.span().start;
        match lexeme {
            Ok(lexeme) => {
                let token = Token::from(lexeme);
                trace!("lexed {token:?} at {}", self.position);
                Ok(token)
            },
            Err(()) => Err(self.error_at_position()),
        }
    }

    fn error_at_position(&self) -> LexicalError {
        let rest = self.inner.source().get(self.position..).unwrap_or_default();

        LexicalError::UnexpectedCharacter { character: rest.chars()
                                                           .next()
                                                           .unwrap_or(char::REPLACEMENT_CHARACTER),
                                            position:  self.position, }
    }
}
