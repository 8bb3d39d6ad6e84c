/// The bindings module stores the variables of an evaluation session.
///
/// A binding maps a case-sensitive variable name to its last computed value.
/// The store is the only state shared across evaluations; it supports
/// lookup, listing, selective removal and clearing, none of which can fail.
///
/// # Responsibilities
/// - Keeps the `name -> value` map for the session.
/// - Maintains the reserved `_` entry holding the latest unnamed result.
pub mod bindings;
/// The evaluator module walks postfix symbol sequences and computes results.
///
/// This is the execution engine: it runs the full pipeline per expression,
/// applies operators and functions over a value stack, and updates the
/// binding store with the final result.
///
/// # Responsibilities
/// - Exposes the session-scoped [`evaluator::Evaluator`] entry point.
/// - Applies the unary, binary and function arithmetic rules.
/// - Reports runtime errors such as grammar violations.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw input line and produces a stream of tokens:
/// numbers, words, single-character operators and brackets. This is the
/// first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Skips whitespace and reports unrecognized character sequences.
pub mod lexer;
/// The shunting module reorders infix symbols into postfix order.
///
/// Implements the shunting yard algorithm with an explicit operator stack,
/// together with the pre-processing passes that run before it: assignment
/// detection and identifier resolution against the binding store.
///
/// # Responsibilities
/// - Extracts the target binding name of a leading assignment.
/// - Resolves identifiers to their bound values.
/// - Produces the postfix ordering, validating bracket balance.
pub mod shunting;
/// The symbol module classifies tokens into typed symbols.
///
/// Declares the `Symbol` sum type consumed by the reorderer and the
/// evaluator, along with the operator, function and bracket kinds and their
/// properties such as operator precedence.
///
/// # Responsibilities
/// - Maps each token to exactly one symbol variant, functions winning over
///   identifiers when a word matches both.
/// - Defines precedence levels and the arithmetic function rules.
pub mod symbol;
