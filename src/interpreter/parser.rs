use log::{debug, trace};

use crate::{
    error::{EvalResult, SyntaxError},
    interpreter::{
        config::{EvalConfig, TrailingInput},
        lexer::{Lexer, Literal, Token, TokenKind},
        operator::BinaryOperator,
    },
    util::num::finite_checked,
};

/// Result type used by the parser.
///
/// The parser pulls tokens while it runs, so any of the three error kinds can
/// surface from a grammar rule.
pub type ParseResult<T> = EvalResult<T>;

/// Recursive-descent parser that evaluates while it parses.
///
/// Grammar, lowest to highest precedence:
/// ```text
///     expr   := term (("+" | "-") term)*
///     term   := factor (("*" | "/") factor)*
///     factor := INTEGER | "(" expr ")"
/// ```
/// Each rule returns the value of the text it consumed. No syntax tree is
/// built. The parser keeps one token of lookahead; after every public method
/// returns, [`Parser::current_token`] is the first token no rule has consumed.
///
/// # Example
/// ```
/// use tally::interpreter::{lexer::Lexer, parser::Parser};
///
/// let mut parser = Parser::new(Lexer::new("(2 + 3) * 4")).unwrap();
/// assert_eq!(parser.expr().unwrap(), 20.0);
/// ```
pub struct Parser<'source> {
    lexer:    Lexer<'source>,
    current:  Token,
    position: usize,
    depth:    usize,
    config:   EvalConfig,
}

impl<'source> Parser<'source> {
    /// Creates a parser with the default [`EvalConfig`] and pulls the first
    /// token.
    ///
    /// # Errors
    /// Returns a lexical error if the first token cannot be produced.
    pub fn new(lexer: Lexer<'source>) -> ParseResult<Self> {
        Self::with_config(lexer, EvalConfig::default())
    }

    /// Creates a parser with an explicit configuration and pulls the first
    /// token.
    ///
    /// # Errors
    /// Returns a lexical error if the first token cannot be produced.
    pub fn with_config(mut lexer: Lexer<'source>, config: EvalConfig) -> ParseResult<Self> {
        let current = lexer.next_token()?;
        let position = lexer.position();

        Ok(Self { lexer,
                  current,
                  position,
                  depth: 0,
                  config })
    }

    /// The lookahead token.
    #[must_use]
    pub const fn current_token(&self) -> Token {
        self.current
    }

    /// Byte offset where the lookahead token starts.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Consumes the lookahead token if it has the expected kind.
    ///
    /// This is the only way the parser advances: on a match the lookahead is
    /// replaced by the next token from the lexer.
    ///
    /// # Errors
    /// - [`SyntaxError::UnexpectedToken`] if the lookahead has another kind.
    /// - A lexical error if the next token cannot be produced.
    pub fn eat(&mut self, expected: TokenKind) -> ParseResult<()> {
        if self.current.kind() != expected {
            return Err(self.unexpected(expected).into());
        }

        self.current = self.lexer.next_token()?;
        self.position = self.lexer.position();
        Ok(())
    }

    /// Parses and evaluates a factor.
    ///
    /// Grammar: `factor := INTEGER | "(" expr ")"`
    ///
    /// # Errors
    /// - [`SyntaxError::UnexpectedToken`] if the lookahead is neither an
    ///   integer nor `(`, or a `)` is missing.
    /// - [`SyntaxError::NestingTooDeep`] if `(` would exceed
    ///   [`EvalConfig::max_depth`].
    /// - [`ArithmeticError::Overflow`](crate::error::ArithmeticError::Overflow)
    ///   if a literal is too long to be a finite `f64`.
    /// - Any error of the nested expression.
    pub fn factor(&mut self) -> ParseResult<f64> {
        match self.current {
            Token::LParen => {
                if self.depth >= self.config.max_depth {
                    return Err(SyntaxError::NestingTooDeep { limit:    self.config.max_depth,
                                                             position: self.position, }.into());
                }
                self.eat(TokenKind::LParen)?;
                self.depth += 1;
                let value = self.expr()?;
                self.depth -= 1;
                self.eat(TokenKind::RParen)?;
                Ok(value)
            },
            Token::Integer(literal) => {
                if let Literal::Rounded(value) = literal {
                    debug!("literal at {} rounded to {value}", self.position);
                }
                let value = finite_checked(literal.to_f64(), self.position)?;
                self.eat(TokenKind::Integer)?;
                Ok(value)
            },
            Token::Plus
            | Token::Minus
            | Token::Mul
            | Token::Div
            | Token::RParen
            | Token::EndOfInput => Err(self.unexpected(TokenKind::Integer).into()),
        }
    }

    /// Parses and evaluates multiplication and division.
    ///
    /// Grammar: `term := factor (("*" | "/") factor)*`, left to right.
    ///
    /// # Errors
    /// Propagates factor errors, and arithmetic errors from
    /// [`BinaryOperator::apply`].
    pub fn term(&mut self) -> ParseResult<f64> {
        let mut result = self.factor()?;
        while let Some(op) =
            BinaryOperator::from_token(self.current.kind()).filter(|op| op.is_multiplicative())
        {
            let position = self.position;
            self.eat(op.token_kind())?;
            let right = self.factor()?;
            trace!("{result} {op:?} {right} at {position}");
            result = op.apply(result, right, position)?;
        }
        Ok(result)
    }

    /// Parses and evaluates addition and subtraction.
    ///
    /// Grammar: `expr := term (("+" | "-") term)*`, left to right.
    ///
    /// This is the entry rule of the grammar. It stops at the first token
    /// that cannot continue the expression and leaves it as the lookahead.
    ///
    /// # Errors
    /// Propagates term errors, and arithmetic errors from
    /// [`BinaryOperator::apply`].
    pub fn expr(&mut self) -> ParseResult<f64> {
        let mut result = self.term()?;
        while let Some(op) =
            BinaryOperator::from_token(self.current.kind()).filter(|op| op.is_additive())
        {
            let position = self.position;
            self.eat(op.token_kind())?;
            let right = self.term()?;
            trace!("{result} {op:?} {right} at {position}");
            result = op.apply(result, right, position)?;
        }
        Ok(result)
    }

    /// Parses one complete expression and applies the trailing-input policy.
    ///
    /// # Errors
    /// Any error of [`Parser::expr`]. With [`TrailingInput::Reject`], a
    /// [`SyntaxError::UnexpectedToken`] expecting end of input if tokens
    /// remain.
    pub fn parse(&mut self) -> ParseResult<f64> {
        let value = self.expr()?;

        match self.config.trailing_input {
            TrailingInput::Ignore => {
                if self.current != Token::EndOfInput {
                    debug!("ignoring input after position {}", self.position);
                }
            },
            TrailingInput::Reject => self.eat(TokenKind::EndOfInput)?,
        }

        Ok(value)
    }

    const fn unexpected(&self, expected: TokenKind) -> SyntaxError {
        SyntaxError::UnexpectedToken { expected,
                                       found: self.current.kind(),
                                       position: self.position }
    }
}
