use tally::{
    error::LexicalError,
    interpreter::lexer::{Lexer, Literal, Token, TokenKind},
};

fn int(value: u64) -> Token {
    Token::Integer(Literal::Exact(value))
}

fn tokenize(src: &str) -> Result<Vec<Token>, LexicalError> {
    let mut lexer = Lexer::new(src);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        tokens.push(token);
        if token == Token::EndOfInput {
            return Ok(tokens);
        }
    }
}

#[test]
fn every_operator_and_paren_is_a_token() {
    assert_eq!(tokenize("+-*/()"),
               Ok(vec![Token::Plus,
                       Token::Minus,
                       Token::Mul,
                       Token::Div,
                       Token::LParen,
                       Token::RParen,
                       Token::EndOfInput]));
}

#[test]
fn digit_runs_are_maximal() {
    assert_eq!(tokenize("12 345"),
               Ok(vec![int(12), int(345), Token::EndOfInput]));
    assert_eq!(tokenize("007"), Ok(vec![int(7), Token::EndOfInput]));
}

#[test]
fn literals_up_to_u64_max_are_exact() {
    assert_eq!(tokenize("123456789012345678"),
               Ok(vec![int(123_456_789_012_345_678), Token::EndOfInput]));
    assert_eq!(tokenize("18446744073709551615"), Ok(vec![int(u64::MAX), Token::EndOfInput]));
}

#[test]
fn longer_literals_are_rounded() {
    assert_eq!(tokenize("18446744073709551616"),
               Ok(vec![Token::Integer(Literal::Rounded(18_446_744_073_709_551_616.0)),
                       Token::EndOfInput]));
    assert_eq!(tokenize("100000000000000000000 1"),
               Ok(vec![Token::Integer(Literal::Rounded(1e20)), int(1), Token::EndOfInput]));

    let digits = "123456789012345678901234567890";
    let expected = digits.parse::<f64>().unwrap();
    assert_eq!(tokenize(digits),
               Ok(vec![Token::Integer(Literal::Rounded(expected)), Token::EndOfInput]));
}

#[test]
fn literals_past_the_f64_range_are_infinite() {
    let digits = "9".repeat(400);
    let tokens = tokenize(&digits).unwrap();
    assert_eq!(tokens[0].value(), Some(Literal::Rounded(f64::INFINITY)));
}

#[test]
fn only_integer_tokens_carry_a_value() {
    assert_eq!(int(9).value(), Some(Literal::Exact(9)));
    assert_eq!(Literal::Exact(9).to_f64(), 9.0);
    assert_eq!(Token::Plus.value(), None);
    assert_eq!(Token::EndOfInput.value(), None);
    assert_eq!(Token::Div.kind(), TokenKind::Div);
}

#[test]
fn end_of_input_repeats() {
    let mut lexer = Lexer::new(" 1 ");
    assert_eq!(lexer.next_token(), Ok(int(1)));
    for _ in 0..3 {
        assert_eq!(lexer.next_token(), Ok(Token::EndOfInput));
        assert_eq!(lexer.position(), 3);
    }
}

#[test]
fn empty_input_is_immediately_exhausted() {
    assert_eq!(tokenize(""), Ok(vec![Token::EndOfInput]));
    assert_eq!(tokenize(" \t\n "), Ok(vec![Token::EndOfInput]));
}

#[test]
fn positions_point_at_token_starts() {
    let mut lexer = Lexer::new("  42 +   (");
    let mut positions = Vec::new();
    while lexer.next_token().map(|t| t != Token::EndOfInput) == Ok(true) {
        positions.push(lexer.position());
    }
    assert_eq!(positions, vec![2, 5, 9]);
}

#[test]
fn unknown_characters_are_reported() {
    assert_eq!(tokenize("3 + @"),
               Err(LexicalError::UnexpectedCharacter { character: '@',
                                                       position:  4, }));
    assert_eq!(tokenize("1 + é"),
               Err(LexicalError::UnexpectedCharacter { character: 'é',
                                                       position:  4, }));
    assert!(matches!(tokenize("2.5"),
                     Err(LexicalError::UnexpectedCharacter { character: '.', .. })));
}

#[test]
fn tokens_are_produced_on_demand() {
    let mut lexer = Lexer::new("1 + @");
    assert_eq!(lexer.next_token(), Ok(int(1)));
    assert_eq!(lexer.next_token(), Ok(Token::Plus));
    assert!(lexer.next_token().is_err());
}

#[test]
fn token_kinds_render_for_messages() {
    assert_eq!(TokenKind::Integer.to_string(), "integer");
    assert_eq!(TokenKind::RParen.to_string(), "')'");
    assert_eq!(TokenKind::EndOfInput.to_string(), "end of input");
}
