use crate::{
    error::ParseError,
    interpreter::{bindings::ANSWER, lexer::Token},
};

/// A binary or unary operator recognized by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `=`, binding the evaluation result to a name.
    Assign,
}

impl Operator {
    /// Returns the precedence level of the operator.
    ///
    /// Higher levels bind tighter. `Add` and `Sub` tie with each other and
    /// rank below `Mul` and `Div`, which also tie. `Assign` ranks lowest so
    /// that it is always the last operator popped off the stack.
    ///
    /// # Example
    /// ```
    /// use calcyard::interpreter::symbol::Operator;
    ///
    /// assert!(Operator::Mul.precedence() > Operator::Add.precedence());
    /// assert_eq!(Operator::Add.precedence(), Operator::Sub.precedence());
    /// assert_eq!(Operator::Assign.precedence(), 0);
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Assign => 0,
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }
}

/// A unary arithmetic function taking a single bare operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    /// Sine, in radians.
    Sin,
    /// Cosine, in radians.
    Cos,
    /// Base-10 logarithm.
    Log,
    /// Square root.
    Sqrt,
}

impl Function {
    /// Applies the function to its argument.
    ///
    /// `Log` and `Sqrt` of non-positive input follow IEEE 754 semantics and
    /// produce a NaN or infinity rather than an error.
    ///
    /// # Example
    /// ```
    /// use calcyard::interpreter::symbol::Function;
    ///
    /// assert_eq!(Function::Sqrt.apply(9.0), 3.0);
    /// assert_eq!(Function::Log.apply(100.0), 2.0);
    /// assert!(Function::Sqrt.apply(-1.0).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Sin => value.sin(),
            Self::Cos => value.cos(),
            Self::Log => value.log10(),
            Self::Sqrt => value.sqrt(),
        }
    }
}

/// A parenthesis delimiting a grouped subexpression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// `(`
    Open,
    /// `)`
    Close,
}

/// The typed, semantically resolved unit consumed by the shunting yard
/// reorderer and the postfix evaluator.
///
/// Symbols are created fresh for each evaluation and discarded afterwards;
/// only the binding store outlives a call.
#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    /// A literal numeric value.
    Operand(f64),
    /// A binary or unary operator.
    Operator(Operator),
    /// A unary arithmetic function.
    Function(Function),
    /// An opening or closing parenthesis.
    Bracket(Bracket),
    /// A variable reference. `resolved` becomes true only once a lookup in
    /// the binding store has succeeded, after which the evaluator treats the
    /// symbol as an operand carrying `value`.
    Identifier {
        /// The variable name as written in the expression.
        name:     String,
        /// The bound value, meaningful only when `resolved` is true.
        value:    f64,
        /// Whether the name has been found in the binding store.
        resolved: bool,
    },
}

/// Reserved words naming the supported arithmetic functions.
const FUNCTION_WORDS: &[(&str, Function)] = &[("sin", Function::Sin),
                                              ("cos", Function::Cos),
                                              ("log", Function::Log),
                                              ("sqrt", Function::Sqrt)];

/// Converts a token into exactly one symbol variant.
///
/// Classification order matters because the patterns overlap: a word might be
/// the reserved function name `sin` or an identifier that merely looks like
/// one, and function words win. Case matters, so `Sin` is an identifier.
///
/// # Errors
/// Returns [`ParseError::UnrecognizedSymbol`] for a word that is neither a
/// function name nor shaped like an identifier.
///
/// # Example
/// ```
/// use calcyard::interpreter::{
///     lexer::Token,
///     symbol::{Function, Symbol, classify},
/// };
///
/// let sym = classify(Token::Word("sqrt".to_string())).unwrap();
/// assert_eq!(sym, Symbol::Function(Function::Sqrt));
///
/// let sym = classify(Token::Word("Sin".to_string())).unwrap();
/// assert!(matches!(sym, Symbol::Identifier { resolved: false, .. }));
/// ```
pub fn classify(token: Token) -> Result<Symbol, ParseError> {
    match token {
        Token::Number(value) => Ok(Symbol::Operand(value)),
        Token::Plus => Ok(Symbol::Operator(Operator::Add)),
        Token::Minus => Ok(Symbol::Operator(Operator::Sub)),
        Token::Star => Ok(Symbol::Operator(Operator::Mul)),
        Token::Slash => Ok(Symbol::Operator(Operator::Div)),
        Token::Equals => Ok(Symbol::Operator(Operator::Assign)),
        Token::LParen => Ok(Symbol::Bracket(Bracket::Open)),
        Token::RParen => Ok(Symbol::Bracket(Bracket::Close)),
        Token::Word(word) => classify_word(word),
        Token::Ignored => Err(ParseError::UnrecognizedSymbol { token: String::new(), }),
    }
}

/// Classifies a word token as either a function or an unresolved identifier.
fn classify_word(word: String) -> Result<Symbol, ParseError> {
    for (name, function) in FUNCTION_WORDS {
        if word == *name {
            return Ok(Symbol::Function(*function));
        }
    }

    if is_identifier(&word) {
        return Ok(Symbol::Identifier { name:     word,
                                       value:    0.0,
                                       resolved: false, });
    }

    Err(ParseError::UnrecognizedSymbol { token: word })
}

/// Checks the identifier shape: a letter followed by letters or digits, or
/// the reserved answer name `_` on its own.
fn is_identifier(word: &str) -> bool {
    if word == ANSWER {
        return true;
    }

    let mut chars = word.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
    && chars.all(|c| c.is_ascii_alphanumeric())
}
