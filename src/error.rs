/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing raw expression
/// text and classifying tokens into symbols: unrecognized character
/// sequences and tokens that fit no symbol variant.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while reordering and
/// evaluating an expression: unbound variables, mismatched parentheses,
/// grammar violations and malformed symbol arrangements.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The error returned by an evaluation, covering both stages of the
/// pipeline.
///
/// Every error aborts the evaluation immediately and leaves the binding
/// store unchanged; callers such as an interactive loop decide whether to
/// report and continue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The expression text could not be turned into symbols.
    Parse(ParseError),
    /// The symbol sequence could not be reordered or evaluated.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
