use logos::Logos;

/// Decimal expansion substituted for the `pi` constant.
///
/// Six decimal places; the constant is substituted as text and parsed again
/// with the other literals, so results carry this rounding.
pub const PI_LITERAL: &str = "3.141593";

/// Errors reported by the generated lexer.
///
/// These never escape the [`Tokenizer`]: they are turned into invalid
/// [`Lexeme`]s so the parser decides whether the offending text matters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexError {
    /// No token matches the text at the cursor.
    #[default]
    Unrecognized,
    /// A numeric literal with more than one decimal separator. Carries the
    /// literal exactly as it was written.
    MalformedLiteral(String),
}

/// Represents a lexical token in the source input.
///
/// Keywords are compiled into a single automaton, so compound keywords such
/// as `arcsin` or `arcctg` always win over the shorter `sin` or `ctg` they
/// contain.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
pub enum Token {
    /// Numeric literal such as `42`, `2.5` or `1,5`. The payload is the
    /// normalized text, with `,` replaced by `.`.
    #[regex(r"[0-9][0-9.,]*", parse_number)]
    Number(String),
    /// `pi`
    #[token("pi")]
    Pi,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `^`
    #[token("^")]
    Caret,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `mod`
    #[token("mod")]
    Mod,
    /// `abs`
    #[token("abs")]
    Abs,
    /// `sin`
    #[token("sin")]
    Sin,
    /// `arcsin`
    #[token("arcsin")]
    Arcsin,
    /// `arccos`
    #[token("arccos")]
    Arccos,
    /// `cos`
    #[token("cos")]
    Cos,
    /// `tg`
    #[token("tg")]
    Tg,
    /// `ctg`
    #[token("ctg")]
    Ctg,
    /// `arctg`
    #[token("arctg")]
    Arctg,
    /// `arcctg`
    #[token("arcctg")]
    Arcctg,
    /// `e`, the exponential function.
    #[token("e")]
    Exp,
    /// `sqrt`
    #[token("sqrt")]
    Sqrt,
    /// `lg`
    #[token("lg")]
    Lg,
    /// `ln`
    #[token("ln")]
    Ln,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n\x0B\x0C]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns the text the operator tables and the expression tree use for
    /// this token.
    ///
    /// Numbers return their normalized literal and `pi` returns
    /// [`PI_LITERAL`].
    ///
    /// # Example
    /// ```
    /// use calcline::interpreter::lexer::{PI_LITERAL, Token};
    ///
    /// assert_eq!(Token::Arcctg.symbol(), "arcctg");
    /// assert_eq!(Token::Number("1.5".to_string()).symbol(), "1.5");
    /// assert_eq!(Token::Pi.symbol(), PI_LITERAL);
    /// ```
    #[must_use]
    pub fn symbol(&self) -> &str {
        match self {
            Self::Number(literal) => literal,
            Self::Pi => PI_LITERAL,
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Caret => "^",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Mod => "mod",
            Self::Abs => "abs",
            Self::Sin => "sin",
            Self::Arcsin => "arcsin",
            Self::Arccos => "arccos",
            Self::Cos => "cos",
            Self::Tg => "tg",
            Self::Ctg => "ctg",
            Self::Arctg => "arctg",
            Self::Arcctg => "arcctg",
            Self::Exp => "e",
            Self::Sqrt => "sqrt",
            Self::Lg => "lg",
            Self::Ln => "ln",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Ignored => "",
        }
    }
}

/// Normalizes a numeric literal, rejecting it when it holds more than one
/// decimal separator.
///
/// `,` and `.` are interchangeable, so `5,,0`, `5..0` and `5,.0` are all
/// malformed.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<String, LexError> {
    let literal = lex.slice().replace(',', ".");
    if literal.matches('.').count() > 1 {
        return Err(LexError::MalformedLiteral(lex.slice().to_string()));
    }
    Ok(literal)
}

/// What a [`Lexeme`] turned out to be.
#[derive(Debug, Clone, PartialEq)]
pub enum LexemeKind {
    /// A recognized token.
    Valid(Token),
    /// A run of text that is neither a number nor a keyword.
    Unrecognized(String),
    /// A numeric literal with duplicate decimal separators, as written.
    Malformed(String),
}

/// A single unit read from the input together with its byte offset.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    /// The token, or the offending text when the lexeme is invalid.
    pub kind:     LexemeKind,
    /// Byte offset of the first character in the source.
    pub position: usize,
}

impl Lexeme {
    /// Whether the lexeme holds a recognized token.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self.kind, LexemeKind::Valid(_))
    }

    /// The lexeme's text: the token symbol for valid lexemes, the offending
    /// input otherwise.
    #[must_use]
    pub fn text(&self) -> &str {
        match &self.kind {
            LexemeKind::Valid(token) => token.symbol(),
            LexemeKind::Unrecognized(text) | LexemeKind::Malformed(text) => text,
        }
    }
}

/// Pull-based tokenizer over a single input line.
///
/// Every call to [`Iterator::next`] skips whitespace and yields one
/// [`Lexeme`]; the iterator ends at the end of the input. Unrecognized text is
/// reported as one run reaching up to the next digit, decimal separator,
/// whitespace or the end of the input.
///
/// # Example
/// ```
/// use calcline::interpreter::lexer::{LexemeKind, Token, Tokenizer};
///
/// let kinds: Vec<_> = Tokenizer::new("2 * x+1").map(|lexeme| lexeme.kind).collect();
///
/// assert_eq!(kinds,
///            vec![LexemeKind::Valid(Token::Number("2".to_string())),
///                 LexemeKind::Valid(Token::Star),
///                 LexemeKind::Unrecognized("x+".to_string()),
///                 LexemeKind::Valid(Token::Number("1".to_string())),]);
/// ```
pub struct Tokenizer<'s> {
    source: &'s str,
    lexer:  logos::Lexer<'s, Token>,
}

impl<'s> Tokenizer<'s> {
    /// Creates a tokenizer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'s str) -> Self {
        Self { source,
               lexer: Token::lexer(source) }
    }

    /// Extends the lexer's error token into the full unrecognized run and
    /// returns its text.
    ///
    /// A stray separator yields an empty run; the separator itself is reported
    /// then, so the cursor always moves forward.
    fn unrecognized_run(&mut self) -> String {
        let span = self.lexer.span();
        let rest = &self.source[span.start..];
        let run = rest.char_indices()
                      .find(|&(_, c)| ends_unrecognized_run(c))
                      .map_or(rest.len(), |(offset, _)| offset);

        let end = (span.start + run).max(span.end);
        self.lexer.bump(end - span.end);

        self.source[span.start..end].to_string()
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Lexeme;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.lexer.next()?;
        let position = self.lexer.span().start;

        let kind = match result {
            Ok(token) => LexemeKind::Valid(token),
            Err(LexError::MalformedLiteral(literal)) => LexemeKind::Malformed(literal),
            Err(LexError::Unrecognized) => LexemeKind::Unrecognized(self.unrecognized_run()),
        };

        Some(Lexeme { kind, position })
    }
}

const fn ends_unrecognized_run(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | ',' | ' ' | '\t' | '\r' | '\n' | '\x0B' | '\x0C')
}
