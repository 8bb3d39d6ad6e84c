//! # calcyard
//!
//! calcyard is a console calculator for single-line arithmetic expressions.
//! It tokenizes, classifies, reorders and evaluates expressions with support
//! for variables, the four basic operators, parentheses, and the `sin`,
//! `cos`, `log` and `sqrt` functions, using the shunting yard algorithm and
//! reverse Polish notation.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during tokenization,
/// classification, reordering, or evaluation of an expression. It
/// standardizes error reporting and carries the offending token or variable
/// name for user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, classifier,
///   reorderer, evaluator).
/// - Sums the two pipeline stages into a single [`Error`] type for callers.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together the lexer, symbol classifier, binding store,
/// shunting yard reorderer and postfix evaluator to provide a complete
/// pipeline from a raw expression line to a numeric result and a binding
/// update.
///
/// # Responsibilities
/// - Coordinates all core components of the evaluation pipeline.
/// - Provides the session-scoped [`Evaluator`] entry point.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use crate::{
    error::Error,
    interpreter::evaluator::{Evaluation, Evaluator},
};
