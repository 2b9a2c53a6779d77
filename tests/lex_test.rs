use bcode::lang::{lex, token::*, ErrorCode, Scanner};

fn tokens(s: &str) -> Vec<Token> {
    lex(s).unwrap().into_iter().map(|(_, t)| t).collect()
}

fn ident(s: &str) -> Token {
    Token::Ident(s.to_string())
}

fn literal(s: &str) -> Token {
    Token::Literal(s.to_string())
}

#[test]
fn test_line() {
    assert_eq!(
        tokens("10 A=5+3"),
        vec![
            literal("10"),
            ident("A"),
            Token::Operator(Operator::Equal),
            literal("5"),
            Token::Operator(Operator::Plus),
            literal("3"),
        ]
    );
}

#[test]
fn test_operators_keep_their_codes() {
    let codes: Vec<String> = tokens("+-<=").iter().map(|t| t.value()).collect();
    assert_eq!(codes, ["1", "2", "3", "4"]);
}

#[test]
fn test_reserved_words() {
    assert_eq!(
        tokens("IF GOTO PRINT STOP"),
        vec![
            Token::Word(Word::If),
            Token::Word(Word::Goto),
            Token::Word(Word::Print),
            Token::Word(Word::Stop),
        ]
    );
}

#[test]
fn test_reserved_word_ends_run() {
    assert_eq!(tokens("GOTOX"), vec![Token::Word(Word::Goto), ident("X")]);
    assert_eq!(tokens("PRINTA"), vec![Token::Word(Word::Print), ident("A")]);
    assert_eq!(tokens("STOPSTOP"), vec![Token::Word(Word::Stop), Token::Word(Word::Stop)]);
}

#[test]
fn test_reserved_word_inside_identifier() {
    assert_eq!(tokens("XIF"), vec![ident("XIF")]);
    assert_eq!(tokens("GOT"), vec![ident("GOT")]);
}

#[test]
fn test_numbers_are_literals() {
    assert_eq!(tokens("1000 007 5A"), vec![literal("1000"), literal("007"), literal("5"), ident("A")]);
}

#[test]
fn test_whitespace() {
    assert_eq!(tokens(" \t10\r\n  STOP \n"), vec![literal("10"), Token::Word(Word::Stop)]);
    assert_eq!(tokens(""), Vec::<Token>::new());
    assert_eq!(tokens("\n\t\r"), Vec::<Token>::new());
}

#[test]
fn test_columns() {
    let cols: Vec<_> = lex("10 GOTO 20").unwrap().into_iter().map(|(c, _)| c).collect();
    assert_eq!(cols, vec![0..2, 3..7, 8..10]);
}

#[test]
fn test_invalid_characters() {
    for s in &["10 a=1", "10 A=1*2", "10 PRINT A;", "10 A=1.5", "10 A>B", "é"] {
        let e = lex(s).unwrap_err();
        assert_eq!(e.code(), ErrorCode::LexicalError, "{}", s);
    }
}

#[test]
fn test_pull_one_token_at_a_time() {
    let mut scanner = Scanner::new("10 STOP 20");
    assert_eq!(scanner.next_token(), Ok(literal("10")));
    assert_eq!(scanner.next_token(), Ok(Token::Word(Word::Stop)));
    assert_eq!(scanner.next_token(), Ok(literal("20")));
    assert_eq!(scanner.next_token(), Ok(Token::End));
    assert_eq!(scanner.next_token(), Ok(Token::End));
}

#[test]
fn test_error_found_only_when_reached() {
    let mut scanner = Scanner::new("10 STOP ?");
    assert_eq!(scanner.next_token(), Ok(literal("10")));
    assert_eq!(scanner.next_token(), Ok(Token::Word(Word::Stop)));
    assert!(scanner.next_token().is_err());
}
