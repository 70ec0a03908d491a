use calcline::interpreter::lexer::{Lexeme, LexemeKind, PI_LITERAL, Token, Tokenizer};

fn kinds(src: &str) -> Vec<LexemeKind> {
    Tokenizer::new(src).map(|lexeme| lexeme.kind).collect()
}

fn number(text: &str) -> LexemeKind {
    LexemeKind::Valid(Token::Number(text.to_string()))
}

#[test]
fn numbers_are_normalized() {
    assert_eq!(kinds("500,0"), vec![number("500.0")]);
    assert_eq!(kinds("3.0"), vec![number("3.0")]);
    assert_eq!(kinds("42"), vec![number("42")]);
}

#[test]
fn duplicated_separators_keep_the_written_text() {
    assert_eq!(kinds("5,,0"), vec![LexemeKind::Malformed("5,,0".to_string())]);
    assert_eq!(kinds("5..0"), vec![LexemeKind::Malformed("5..0".to_string())]);
    assert_eq!(kinds("5,.0"), vec![LexemeKind::Malformed("5,.0".to_string())]);
    assert_eq!(kinds("1,000,000"),
               vec![LexemeKind::Malformed("1,000,000".to_string())]);
}

#[test]
fn pi_becomes_a_number() {
    let lexemes: Vec<Lexeme> = Tokenizer::new("2pi").collect();

    assert_eq!(lexemes.len(), 2);
    assert_eq!(lexemes[1].kind, LexemeKind::Valid(Token::Pi));
    assert_eq!(lexemes[1].text(), PI_LITERAL);
    assert_eq!(lexemes[1].position, 1);
    assert_eq!(PI_LITERAL, "3.141593");
}

#[test]
fn compound_keywords_win_over_their_parts() {
    assert_eq!(kinds("arcsin arccos arctg arcctg sin cos tg ctg"),
               vec![LexemeKind::Valid(Token::Arcsin),
                    LexemeKind::Valid(Token::Arccos),
                    LexemeKind::Valid(Token::Arctg),
                    LexemeKind::Valid(Token::Arcctg),
                    LexemeKind::Valid(Token::Sin),
                    LexemeKind::Valid(Token::Cos),
                    LexemeKind::Valid(Token::Tg),
                    LexemeKind::Valid(Token::Ctg),]);
}

#[test]
fn keywords_need_no_spaces() {
    assert_eq!(kinds("7mod3"),
               vec![number("7"), LexemeKind::Valid(Token::Mod), number("3")]);
    assert_eq!(kinds("sqrt(e2)"),
               vec![LexemeKind::Valid(Token::Sqrt),
                    LexemeKind::Valid(Token::LParen),
                    LexemeKind::Valid(Token::Exp),
                    number("2"),
                    LexemeKind::Valid(Token::RParen),]);
}

#[test]
fn every_symbol_is_recognized() {
    let symbols = ["+", "-", "^", "*", "/", "mod", "abs", "sin", "arcsin", "arccos", "cos", "tg",
                   "ctg", "arctg", "arcctg", "e", "sqrt", "lg", "ln", "(", ")"];

    for symbol in symbols {
        let lexemes: Vec<Lexeme> = Tokenizer::new(symbol).collect();
        assert_eq!(lexemes.len(), 1, "{symbol} should be a single lexeme");
        assert!(lexemes[0].is_valid(), "{symbol} should be valid");
        assert_eq!(lexemes[0].text(), symbol);
    }
}

#[test]
fn unrecognized_text_runs_to_the_next_number_or_space() {
    assert_eq!(kinds("Hello"), vec![LexemeKind::Unrecognized("Hello".to_string())]);
    assert_eq!(kinds("x+1"),
               vec![LexemeKind::Unrecognized("x+".to_string()), number("1")]);
    assert_eq!(kinds("abc,5"),
               vec![LexemeKind::Unrecognized("abc".to_string()),
                    LexemeKind::Unrecognized(",".to_string()),
                    number("5"),]);
    assert_eq!(kinds("√4"),
               vec![LexemeKind::Unrecognized("√".to_string()), number("4")]);
}

#[test]
fn stray_separator_is_reported() {
    assert_eq!(kinds(".5"),
               vec![LexemeKind::Unrecognized(".".to_string()), number("5")]);
}

#[test]
fn closing_parenthesis_joins_an_unrecognized_run() {
    assert_eq!(kinds("(x)"),
               vec![LexemeKind::Valid(Token::LParen),
                    LexemeKind::Unrecognized("x)".to_string()),]);
}

#[test]
fn positions_are_byte_offsets() {
    let positions: Vec<usize> = Tokenizer::new("  12 +\tsin(x)").map(|lexeme| lexeme.position)
                                                                .collect();
    assert_eq!(positions, vec![2, 5, 7, 10, 11]);
}

#[test]
fn whitespace_only_yields_nothing() {
    assert!(kinds(" \t\r\n").is_empty());
    assert!(kinds("").is_empty());
}
