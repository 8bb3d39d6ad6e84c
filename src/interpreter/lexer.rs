use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the expression input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression grammar.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    ///
    /// Literals are unsigned; a leading `-` lexes as [`Token::Minus`] and is
    /// handled by the evaluator's unary-minus rule.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// Word tokens; function names such as `sqrt` or identifiers such as `x`.
    ///
    /// The reserved answer name `_` also lexes as a word. Words are told apart
    /// from function names during symbol classification, not here.
    #[regex(r"_|[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Word(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Splits raw expression text into an ordered sequence of tokens.
///
/// Whitespace separates tokens and is never emitted. Empty or whitespace-only
/// input produces an empty sequence; rejecting that is left to the caller,
/// since an interactive session treats a blank line as a no-op.
///
/// # Errors
/// Returns [`ParseError::UnrecognizedToken`] when a character sequence matches
/// no token pattern.
///
/// # Example
/// ```
/// use calcyard::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 + x").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(1.0),
///                 Token::Plus,
///                 Token::Word("x".to_string())]);
///
/// assert!(tokenize("1 ? 2").is_err());
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(expression);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => {
                return Err(ParseError::UnrecognizedToken { token: lexer.slice().to_string(), });
            },
        }
    }

    Ok(tokens)
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed numeric value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
