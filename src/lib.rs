// SPDX-License-Identifier: MIT

//! Safe rule expressions for facility automation
//!
//! Parses and evaluates restricted arithmetic/logical/comparison expressions
//! such as `temperature > 25 && humidity < 60` against a per-call set of
//! variable bindings. No general-purpose interpreter is ever invoked: the
//! grammar is closed, there is no I/O, and evaluation is a pure function of
//! the expression and its bindings.
//!
//! ```
//! use canopy_rules::{evaluate_expression, Bindings, Value};
//!
//! let bindings = Bindings::empty()
//!     .with("temperature", 30)
//!     .with("humidity", 50);
//! let result = evaluate_expression("temperature > 25 && humidity < 60", &bindings).unwrap();
//! assert_eq!(result, Value::Boolean(true));
//! ```

pub mod bindings;
pub mod error;
pub mod expr;

pub use bindings::Bindings;
pub use error::EvalError;
pub use expr::Value;

use tracing::trace;

/// Hard upper bound on expression length, in bytes
///
/// Bounds lexer work and, with it, parser recursion depth: a deeper nesting
/// than the input length cannot be expressed.
pub const MAX_EXPRESSION_LEN: usize = 4096;

/// Parses and evaluates rule expressions
///
/// Stateless: every call is independent and re-entrant, and concurrent
/// callers need no coordination.
pub struct ExpressionEvaluator;

impl ExpressionEvaluator {
    /// Evaluate `expression` against `bindings`
    ///
    /// Fails fast on the first lexical, structural or evaluation error;
    /// there are no partial results.
    pub fn evaluate(expression: &str, bindings: &Bindings) -> Result<Value, EvalError> {
        if expression.len() > MAX_EXPRESSION_LEN {
            return Err(EvalError::ExpressionTooLong {
                len: expression.len(),
                max: MAX_EXPRESSION_LEN,
            });
        }

        trace!(expression, "evaluating rule expression");
        let tokens = expr::tokenize(expression)?;
        let ast = expr::parse(&tokens)?;
        expr::evaluate(&ast, bindings)
    }
}

/// Convenience wrapper around [`ExpressionEvaluator::evaluate`]
///
/// Pass [`Bindings::empty()`] for expressions with no variables.
pub fn evaluate_expression(expression: &str, bindings: &Bindings) -> Result<Value, EvalError> {
    ExpressionEvaluator::evaluate(expression, bindings)
}
