use calcline::{
    ast::Expr,
    error::ParseError,
    interpreter::lexer::PI_LITERAL,
    parse,
};

fn tree(src: &str) -> String {
    parse(src).unwrap_or_else(|e| panic!("{src:?} failed to parse: {e}"))
              .to_string()
}

#[test]
fn higher_priority_groups_first() {
    assert_eq!(tree("1 + 2 * 3"), "(+ 1 (* 2 3))");
    assert_eq!(tree("1 * 2 + 3"), "(+ (* 1 2) 3)");
    assert_eq!(tree("2 * 3 ^ 2"), "(* 2 (^ 3 2))");
    assert_eq!(tree("1 - 6 mod 4"), "(- 1 (mod 6 4))");
}

#[test]
fn equal_priority_is_left_associative() {
    assert_eq!(tree("8 - 3 - 2"), "(- (- 8 3) 2)");
    assert_eq!(tree("8 / 4 * 2"), "(* (/ 8 4) 2)");
    assert_eq!(tree("2 ^ 3 ^ 2"), "(^ (^ 2 3) 2)");
}

#[test]
fn parentheses_override_priority() {
    assert_eq!(tree("(1 + 2) * 3"), "(* (+ 1 2) 3)");
    assert_eq!(tree("((4))"), "4");
}

#[test]
fn sign_depends_on_position() {
    assert_eq!(tree("-1 - -2"), "(- (- 1) (- 2))");
    assert_eq!(tree("+1 + +2"), "(+ (+ 1) (+ 2))");
    assert_eq!(tree("- - 3"), "(- (- 3))");
}

#[test]
fn prefix_operators_take_one_operand() {
    assert_eq!(tree("sin 1 + 2"), "(+ (sin 1) 2)");
    assert_eq!(tree("sin(1 + 2)"), "(sin (+ 1 2))");
    assert_eq!(tree("-2 ^ 2"), "(^ (- 2) 2)");
    assert_eq!(tree("sqrt abs -4"), "(sqrt (abs (- 4)))");
}

#[test]
fn pi_and_separators_become_literals() {
    assert_eq!(parse("pi").unwrap(), Expr::literal(PI_LITERAL));
    assert_eq!(parse("2,5").unwrap(), Expr::literal("2.5"));
}

#[test]
fn any_other_keyword_is_a_prefix_operator() {
    assert_eq!(parse("* 5").unwrap(), Expr::unary("*", Expr::literal("5")));
    assert_eq!(tree(") 1"), "() 1)");
}

#[test]
fn parsing_stops_at_the_first_lexeme_that_cannot_continue() {
    assert_eq!(tree("(1 + 2) 5"), "(+ 1 2)");
    assert_eq!(tree("5 abc"), "5");
    assert_eq!(tree("5 5,,0"), "5");
    assert_eq!(tree("1 + 2) * 3"), "(+ 1 2)");
}

#[test]
fn operand_errors_carry_the_offending_text() {
    assert_eq!(parse("2 * foo"),
               Err(ParseError::InvalidToken { token:    "foo".to_string(),
                                              position: 4, }));
    assert_eq!(parse("2 * 1..5"),
               Err(ParseError::MalformedLiteral { literal:  "1..5".to_string(),
                                                  position: 4, }));
}

#[test]
fn groups_must_be_closed() {
    assert_eq!(parse("(5 + 5"),
               Err(ParseError::UnmatchedParenthesis { position: 0 }));
    assert_eq!(parse("(5 + 5 abc"),
               Err(ParseError::UnmatchedParenthesis { position: 0 }));
    assert_eq!(parse("sin (1"),
               Err(ParseError::UnmatchedParenthesis { position: 4 }));
    assert_eq!(parse("("), Err(ParseError::UnexpectedEndOfInput {}));
}
