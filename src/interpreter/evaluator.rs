use crate::{
    error::{Error, RuntimeError},
    interpreter::{
        bindings::{ANSWER, Bindings},
        lexer::tokenize,
        shunting::{extract_target, resolve_identifiers, to_postfix},
        symbol::{Operator, Symbol, classify},
    },
};

/// The outcome of a successful evaluation: the computed value and the name
/// it was bound under (`_` when the expression had no assignment).
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The computed scalar result.
    pub value:   f64,
    /// The binding name the result was stored under.
    pub binding: String,
}

/// Evaluates expressions against a session-scoped binding store.
///
/// The evaluator owns the only state that outlives a single call: the
/// variable bindings. Everything else (tokens, symbols, the postfix order)
/// is created fresh per evaluation and discarded. One evaluator is
/// constructed per session and passed by reference to wherever expressions
/// are read; no global instance exists.
///
/// Evaluation is synchronous and bounded; `eval` takes `&mut self`, so the
/// whole read-modify-write cycle over the bindings is serialized by the type
/// system.
#[derive(Debug, Default)]
pub struct Evaluator {
    bindings: Bindings,
}

impl Evaluator {
    /// Creates an evaluator with an empty binding store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates a single-line arithmetic expression.
    ///
    /// The expression runs through the full pipeline: tokenization, symbol
    /// classification, assignment detection, identifier resolution, the
    /// shunting yard reordering, and finally the postfix walk. On success the
    /// result is stored in the binding store, either under the assignment
    /// target or under the reserved name `_`, and returned together with that
    /// name. On failure the store is left untouched.
    ///
    /// # Errors
    /// Returns [`Error::Parse`] when the text cannot be tokenized or
    /// classified, and [`Error::Runtime`] for an empty expression, an unbound
    /// variable, mismatched parentheses, or a malformed symbol arrangement.
    ///
    /// # Example
    /// ```
    /// use calcyard::Evaluator;
    ///
    /// let mut evaluator = Evaluator::new();
    ///
    /// let result = evaluator.eval("x = 3 * (1 + 4)").unwrap();
    /// assert_eq!(result.value, 15.0);
    /// assert_eq!(result.binding, "x");
    ///
    /// let result = evaluator.eval("x / 5").unwrap();
    /// assert_eq!(result.value, 3.0);
    /// assert_eq!(result.binding, "_");
    /// ```
    pub fn eval(&mut self, expression: &str) -> Result<Evaluation, Error> {
        let tokens = tokenize(expression)?;
        let mut symbols = tokens.into_iter()
                                .map(classify)
                                .collect::<Result<Vec<_>, _>>()?;

        if symbols.is_empty() {
            return Err(RuntimeError::EmptyExpression.into());
        }

        let target = extract_target(&mut symbols);
        resolve_identifiers(&mut symbols, &self.bindings)?;

        let postfix = to_postfix(symbols)?;
        let value = run_postfix(&postfix)?;

        let binding = target.unwrap_or_else(|| ANSWER.to_string());
        self.bindings.set(&binding, value);

        Ok(Evaluation { value, binding })
    }

    /// Returns all session bindings sorted by name.
    #[must_use]
    pub fn bindings(&self) -> Vec<(String, f64)> {
        self.bindings.list()
    }

    /// Removes the named bindings; absent names are ignored.
    pub fn remove_bindings<S: AsRef<str>>(&mut self, names: &[S]) {
        self.bindings.remove(names);
    }

    /// Removes every binding of the session.
    pub fn clear_bindings(&mut self) {
        self.bindings.clear();
    }
}

/// Walks a postfix symbol sequence with a value stack and computes the final
/// scalar.
///
/// Operands push their value. An operator facing fewer than two stacked
/// values takes its unary interpretation: `+` is the identity, `-` negates,
/// and `=` records the popped value as the assigned result without pushing
/// anything back. With two or more values it pops right then left and pushes
/// `left op right`. A function consumes the symbol that follows it in the
/// stream, not the stack, as its single argument.
///
/// Division by zero and out-of-domain function inputs follow IEEE 754
/// semantics, producing infinities or NaNs rather than errors.
fn run_postfix(postfix: &[Symbol]) -> Result<f64, RuntimeError> {
    let mut stack: Vec<f64> = Vec::new();
    let mut assigned = None;
    let mut symbols = postfix.iter();

    while let Some(symbol) = symbols.next() {
        match symbol {
            Symbol::Operand(value) | Symbol::Identifier { value, .. } => stack.push(*value),
            Symbol::Operator(op) if stack.len() < 2 => {
                let value = stack.pop().ok_or(RuntimeError::MalformedExpression)?;
                match op {
                    Operator::Add => stack.push(value),
                    Operator::Sub => stack.push(-value),
                    // By construction the assignment is the last operator in
                    // the stream; it consumes the final value.
                    Operator::Assign => assigned = Some(value),
                    Operator::Mul | Operator::Div => {
                        return Err(RuntimeError::OperatorNotFound);
                    },
                }
            },
            Symbol::Operator(op) => {
                let right = stack.pop().ok_or(RuntimeError::MalformedExpression)?;
                let left = stack.pop().ok_or(RuntimeError::MalformedExpression)?;
                let result = match op {
                    Operator::Add => left + right,
                    Operator::Sub => left - right,
                    Operator::Mul => left * right,
                    Operator::Div => left / right,
                    Operator::Assign => return Err(RuntimeError::OperatorNotFound),
                };
                stack.push(result);
            },
            Symbol::Function(function) => {
                let argument = match symbols.next() {
                    Some(Symbol::Operand(value) | Symbol::Identifier { value, .. }) => *value,
                    _ => return Err(RuntimeError::FunctionNotFound),
                };
                stack.push(function.apply(argument));
            },
            // Brackets are consumed during reordering and never reach the
            // postfix stream.
            Symbol::Bracket(_) => return Err(RuntimeError::MalformedExpression),
        }
    }

    if let Some(value) = assigned {
        return Ok(value);
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        _ => Err(RuntimeError::MalformedExpression),
    }
}
