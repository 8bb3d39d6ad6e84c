#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during reordering and evaluation.
pub enum RuntimeError {
    /// An identifier has no entry in the binding store.
    UnresolvedIdentifier {
        /// The name of the unbound variable.
        name: String,
    },
    /// Unbalanced brackets: a `)` with no matching `(`, or a leftover `(` at
    /// the end of the expression.
    MismatchedParentheses,
    /// An operator reached the evaluator with no matching arithmetic rule.
    /// Indicates a grammar violation such as a binary use of `=`.
    OperatorNotFound,
    /// A function reached the evaluator without a bare operand following it.
    FunctionNotFound,
    /// The expression contained no symbols at all.
    EmptyExpression,
    /// Evaluation finished without a result to report.
    MalformedExpression,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnresolvedIdentifier { name } => {
                write!(f, "Variable '{name}' has not been assigned.")
            },
            Self::MismatchedParentheses => write!(f, "Mismatched parentheses in expression."),
            Self::OperatorNotFound => write!(f, "No arithmetic rule matches the operator."),
            Self::FunctionNotFound => write!(f, "No arithmetic rule matches the function."),
            Self::EmptyExpression => write!(f, "Expression is empty."),
            Self::MalformedExpression => write!(f, "Expression is malformed."),
        }
    }
}

impl std::error::Error for RuntimeError {}
