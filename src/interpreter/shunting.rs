use crate::{
    error::RuntimeError,
    interpreter::{
        bindings::Bindings,
        symbol::{Bracket, Operator, Symbol},
    },
};

/// Detects an assignment at the head of the symbol sequence and extracts the
/// target binding name.
///
/// An assignment is the shape `Identifier, =, <expression>` with at least one
/// symbol after the `=`. The leading identifier is removed from the sequence
/// and its name returned; the `=` operator stays behind and later binds the
/// value of the remaining expression. Anything else leaves the sequence
/// untouched.
///
/// # Example
/// ```
/// use calcyard::interpreter::{
///     shunting::extract_target,
///     symbol::{Operator, Symbol},
/// };
///
/// let mut symbols = vec![Symbol::Identifier { name:     "x".to_string(),
///                                             value:    0.0,
///                                             resolved: false, },
///                        Symbol::Operator(Operator::Assign),
///                        Symbol::Operand(5.0)];
///
/// assert_eq!(extract_target(&mut symbols), Some("x".to_string()));
/// assert_eq!(symbols.len(), 2);
/// ```
#[must_use]
pub fn extract_target(symbols: &mut Vec<Symbol>) -> Option<String> {
    if symbols.len() > 2
       && let [Symbol::Identifier { name, .. }, Symbol::Operator(Operator::Assign), ..] =
           symbols.as_slice()
    {
        let name = name.clone();
        symbols.remove(0);
        return Some(name);
    }

    None
}

/// Resolves every identifier in the sequence against the binding store.
///
/// A successful lookup sets the identifier's value and marks it resolved, so
/// the evaluator can treat it as an operand. An unbound variable can never
/// appear mid-expression.
///
/// # Errors
/// Returns [`RuntimeError::UnresolvedIdentifier`] naming the first identifier
/// that has no entry in the store.
pub fn resolve_identifiers(symbols: &mut [Symbol],
                           bindings: &Bindings)
                           -> Result<(), RuntimeError> {
    for symbol in symbols {
        if let Symbol::Identifier { name, value, resolved } = symbol {
            match bindings.get(name) {
                Some(bound) => {
                    *value = bound;
                    *resolved = true;
                },
                None => {
                    return Err(RuntimeError::UnresolvedIdentifier { name: name.clone(), });
                },
            }
        }
    }

    Ok(())
}

/// Reorders an infix symbol sequence into postfix (reverse Polish) order
/// using the shunting yard algorithm.
///
/// An explicit operator stack and an output list drive the reordering:
/// - Operands, resolved identifiers and functions go straight to the output.
///   A function is never stacked; it rides the output directly ahead of its
///   single bare-operand argument.
/// - An operator first pops every stacked operator of greater or equal
///   precedence to the output, then is pushed. Popping on ties gives the
///   left-to-right associativity of same-precedence operators.
/// - An open bracket is pushed; a close bracket pops operators to the output
///   until the matching open bracket is found and discarded.
/// - At the end of input the stack is drained to the output.
///
/// # Errors
/// Returns [`RuntimeError::MismatchedParentheses`] when a close bracket finds
/// no matching open bracket, or an unclosed open bracket is left on the stack
/// after all symbols are consumed.
///
/// # Example
/// ```
/// use calcyard::interpreter::{
///     shunting::to_postfix,
///     symbol::{Operator, Symbol},
/// };
///
/// // 1 + 2 * 3  =>  1 2 3 * +
/// let symbols = vec![Symbol::Operand(1.0),
///                    Symbol::Operator(Operator::Add),
///                    Symbol::Operand(2.0),
///                    Symbol::Operator(Operator::Mul),
///                    Symbol::Operand(3.0)];
///
/// let postfix = to_postfix(symbols).unwrap();
/// assert_eq!(postfix,
///            vec![Symbol::Operand(1.0),
///                 Symbol::Operand(2.0),
///                 Symbol::Operand(3.0),
///                 Symbol::Operator(Operator::Mul),
///                 Symbol::Operator(Operator::Add)]);
/// ```
pub fn to_postfix(symbols: Vec<Symbol>) -> Result<Vec<Symbol>, RuntimeError> {
    let mut output = Vec::with_capacity(symbols.len());
    let mut stack: Vec<Symbol> = Vec::new();

    for symbol in symbols {
        match symbol {
            Symbol::Operand(_) | Symbol::Function(_) | Symbol::Identifier { .. } => {
                output.push(symbol);
            },
            Symbol::Operator(op) => {
                while let Some(&Symbol::Operator(top)) = stack.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    output.push(Symbol::Operator(top));
                    stack.pop();
                }
                stack.push(symbol);
            },
            Symbol::Bracket(Bracket::Open) => stack.push(symbol),
            Symbol::Bracket(Bracket::Close) => loop {
                match stack.pop() {
                    Some(Symbol::Bracket(Bracket::Open)) => break,
                    Some(popped) => output.push(popped),
                    None => return Err(RuntimeError::MismatchedParentheses),
                }
            },
        }
    }

    while let Some(popped) = stack.pop() {
        if matches!(popped, Symbol::Bracket(_)) {
            return Err(RuntimeError::MismatchedParentheses);
        }
        output.push(popped);
    }

    Ok(output)
}
