use tally::{
    EvalConfig, EvalError,
    error::SyntaxError,
    interpreter::{
        lexer::{Lexer, Literal, Token, TokenKind},
        parser::Parser,
    },
};

fn parser(src: &str) -> Parser<'_> {
    Parser::new(Lexer::new(src)).expect("first token lexes")
}

#[test]
fn construction_pulls_the_first_token() {
    let parser = parser("  42 + 1");
    assert_eq!(parser.current_token(), Token::Integer(Literal::Exact(42)));
    assert_eq!(parser.position(), 2);
}

#[test]
fn eat_advances_on_the_expected_kind() {
    let mut parser = parser("1 + 2");
    assert_eq!(parser.eat(TokenKind::Integer), Ok(()));
    assert_eq!(parser.current_token(), Token::Plus);
    assert_eq!(parser.position(), 2);
}

#[test]
fn eat_with_another_kind_keeps_the_lookahead() {
    let mut parser = parser("1 + 2");

    assert_eq!(parser.eat(TokenKind::Plus),
               Err(EvalError::Syntax(SyntaxError::UnexpectedToken { expected: TokenKind::Plus,
                                                                    found:    TokenKind::Integer,
                                                                    position: 0, })));
    assert_eq!(parser.current_token(), Token::Integer(Literal::Exact(1)));
    assert_eq!(parser.position(), 0);

    assert_eq!(parser.eat(TokenKind::Integer), Ok(()));
}

#[test]
fn factor_consumes_a_whole_group() {
    let mut parser = parser("(1)");
    assert_eq!(parser.factor(), Ok(1.0));
    assert_eq!(parser.current_token(), Token::EndOfInput);
    assert_eq!(parser.position(), 3);
}

#[test]
fn factor_consumes_one_literal_only() {
    let mut parser = parser("7 * 2");
    assert_eq!(parser.factor(), Ok(7.0));
    assert_eq!(parser.current_token(), Token::Mul);
}

#[test]
fn term_stops_at_an_additive_operator() {
    let mut parser = parser("2 * 3 + 4");
    assert_eq!(parser.term(), Ok(6.0));
    assert_eq!(parser.current_token(), Token::Plus);
    assert_eq!(parser.position(), 6);
}

#[test]
fn expr_stops_at_the_first_token_it_cannot_use() {
    let mut parser = parser("1 + 2 ) 3");
    assert_eq!(parser.expr(), Ok(3.0));
    assert_eq!(parser.current_token(), Token::RParen);
    assert_eq!(parser.position(), 6);
}

#[test]
fn parse_leaves_ignored_input_unconsumed() {
    let mut parser = Parser::with_config(Lexer::new("4 5"), EvalConfig::default()).unwrap();
    assert_eq!(parser.parse(), Ok(4.0));
    assert_eq!(parser.current_token(), Token::Integer(Literal::Exact(5)));
}
