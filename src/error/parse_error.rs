#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while turning raw text into symbols.
pub enum ParseError {
    /// A character sequence matched no token pattern.
    UnrecognizedToken {
        /// The offending input slice.
        token: String,
    },
    /// A token could not be classified into any symbol variant.
    UnrecognizedSymbol {
        /// The token that defeated classification.
        token: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedToken { token } => {
                write!(f, "'{token}' is not a valid token.")
            },
            Self::UnrecognizedSymbol { token } => {
                write!(f, "'{token}' cannot be classified as a symbol.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
