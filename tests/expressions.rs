use calcyard::{
    Error, Evaluation, Evaluator,
    error::{ParseError, RuntimeError},
};

fn eval_one(expression: &str) -> Result<Evaluation, Error> {
    Evaluator::new().eval(expression)
}

fn assert_answer(expression: &str, expected: f64) {
    match eval_one(expression) {
        Ok(result) => {
            assert_eq!(result.value, expected, "wrong value for '{expression}'");
            assert_eq!(result.binding, "_", "unexpected binding for '{expression}'");
        },
        Err(e) => panic!("'{expression}' failed: {e}"),
    }
}

#[test]
fn numeric_literals_evaluate_to_themselves() {
    assert_answer("5", 5.0);
    assert_answer("42", 42.0);
    assert_answer("3.25", 3.25);
    assert_answer("0.5", 0.5);
}

#[test]
fn precedence_and_grouping() {
    assert_answer("1 + 3 * (4 + 2) / 2", 10.0);
    assert_answer("2 + 3 * 4", 14.0);
    assert_answer("(2 + 3) * 4", 20.0);
    assert_answer("2 * (3 + (4 - 1))", 12.0);
}

#[test]
fn same_precedence_associates_left_to_right() {
    assert_answer("10 - 2 - 3", 5.0);
    assert_answer("16 / 4 / 2", 2.0);
    assert_answer("10 - 2 + 3", 11.0);
}

#[test]
fn unary_signs() {
    assert_answer("-4 + 10", 6.0);
    assert_answer("+5", 5.0);
    assert_answer("-3 * 2", -6.0);
}

#[test]
fn builtin_functions() {
    assert_answer("sqrt(9)", 3.0);
    assert_answer("log(100)", 2.0);
    assert_answer("sin(0)", 0.0);
    assert_answer("cos(0)", 1.0);
    assert_answer("1 + sqrt(9)", 4.0);
    assert_answer("sqrt(9) * 2", 6.0);
}

#[test]
fn division_by_zero_is_not_an_error() {
    let result = eval_one("1 / 0").unwrap();
    assert!(result.value.is_infinite());
    assert!(result.value.is_sign_positive());

    let result = eval_one("log(0)").unwrap();
    assert!(result.value.is_infinite());
    assert!(result.value.is_sign_negative());
}

#[test]
fn assignment_round_trip() {
    let mut evaluator = Evaluator::new();

    let result = evaluator.eval("x = 5").unwrap();
    assert_eq!(result.value, 5.0);
    assert_eq!(result.binding, "x");

    let result = evaluator.eval("x + 1").unwrap();
    assert_eq!(result.value, 6.0);
    assert_eq!(result.binding, "_");

    assert_eq!(evaluator.bindings(),
               vec![("_".to_string(), 6.0), ("x".to_string(), 5.0)]);
}

#[test]
fn self_referential_reassignment() {
    let mut evaluator = Evaluator::new();
    evaluator.eval("x = 5").unwrap();

    let result = evaluator.eval("x = x + 1").unwrap();
    assert_eq!(result.value, 6.0);
    assert_eq!(result.binding, "x");
}

#[test]
fn answer_binding_holds_the_latest_result() {
    let mut evaluator = Evaluator::new();

    evaluator.eval("1 + 1").unwrap();
    evaluator.eval("2 + 2").unwrap();
    assert_eq!(evaluator.bindings(), vec![("_".to_string(), 4.0)]);

    let result = evaluator.eval("_ + 1").unwrap();
    assert_eq!(result.value, 5.0);
}

#[test]
fn removing_and_clearing_bindings() {
    let mut evaluator = Evaluator::new();
    evaluator.eval("x = 1").unwrap();
    evaluator.eval("y = 2").unwrap();

    evaluator.remove_bindings(&["x", "missing"]);
    assert_eq!(evaluator.bindings(), vec![("y".to_string(), 2.0)]);

    evaluator.clear_bindings();
    assert!(evaluator.bindings().is_empty());
}

#[test]
fn unresolved_identifier_is_an_error() {
    let err = eval_one("y + 1").unwrap_err();
    assert_eq!(err,
               Error::Runtime(RuntimeError::UnresolvedIdentifier { name: "y".to_string(), }));
}

#[test]
fn function_names_are_case_sensitive() {
    let err = eval_one("Sin(0)").unwrap_err();
    assert_eq!(err,
               Error::Runtime(RuntimeError::UnresolvedIdentifier { name: "Sin".to_string(), }));
}

#[test]
fn mismatched_parentheses_are_errors() {
    for expression in ["(1 + 2", "1 + 2)", "((1 + 2)", "sqrt(9))"] {
        let err = eval_one(expression).unwrap_err();
        assert_eq!(err,
                   Error::Runtime(RuntimeError::MismatchedParentheses),
                   "'{expression}' should report mismatched parentheses");
    }
}

#[test]
fn unrecognized_tokens_are_errors() {
    let err = eval_one("1 ? 2").unwrap_err();
    assert_eq!(err,
               Error::Parse(ParseError::UnrecognizedToken { token: "?".to_string(), }));
}

#[test]
fn empty_input_is_an_error() {
    for expression in ["", "   ", "\t"] {
        let err = eval_one(expression).unwrap_err();
        assert_eq!(err, Error::Runtime(RuntimeError::EmptyExpression));
    }
}

#[test]
fn binary_assignment_is_a_grammar_violation() {
    let err = eval_one("5 = 3").unwrap_err();
    assert_eq!(err, Error::Runtime(RuntimeError::OperatorNotFound));
}

#[test]
fn malformed_expressions_are_errors() {
    assert_eq!(eval_one("1 2").unwrap_err(),
               Error::Runtime(RuntimeError::MalformedExpression));
    assert_eq!(eval_one("*").unwrap_err(),
               Error::Runtime(RuntimeError::MalformedExpression));
}

#[test]
fn failed_evaluations_leave_the_store_untouched() {
    let mut evaluator = Evaluator::new();
    evaluator.eval("x = 1").unwrap();

    assert!(evaluator.eval("x = (1 + 2").is_err());
    assert!(evaluator.eval("x = y + 1").is_err());

    assert_eq!(evaluator.bindings(), vec![("x".to_string(), 1.0)]);
}
