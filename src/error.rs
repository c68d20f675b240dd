// SPDX-License-Identifier: MIT

//! Typed error handling for rule expressions
//!
//! Every failure aborts the whole evaluation and is reported to the caller
//! immediately; there are no retries and no partial results.

use thiserror::Error;

/// Errors produced while lexing, parsing or evaluating a rule expression
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Referenced variable is not present in the bindings
    #[error("Undefined variable: {0}")]
    UndefinedVariable(String),

    /// A token matches no recognized literal form (e.g. `1.2.3`)
    #[error("Invalid literal: {0}")]
    InvalidLiteral(String),

    /// A character no token can start with
    #[error("Unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    /// A token in a position the grammar does not allow
    #[error("Unexpected token: {0}")]
    UnexpectedToken(String),

    /// Expression ended where an operand or closing delimiter was expected
    #[error("Unexpected end of expression")]
    UnexpectedEnd,

    /// String literal with no closing quote
    #[error("Unterminated string literal at position {0}")]
    UnterminatedString(usize),

    /// `${` with no closing `}`
    #[error("Unterminated variable reference at position {0}")]
    UnterminatedVariable(usize),

    /// Chained comparison such as `a < b < c`
    #[error("Malformed comparison: at most one comparison operator is allowed")]
    MalformedComparison,

    /// Operand types the operator cannot work with
    #[error("Type mismatch: cannot apply '{op}' to {found}")]
    TypeMismatch { op: String, found: String },

    /// Input longer than the hardening bound
    #[error("Expression is {len} bytes, maximum is {max}")]
    ExpressionTooLong { len: usize, max: usize },
}

impl EvalError {
    /// Create an undefined-variable error
    pub fn undefined_variable(name: impl Into<String>) -> Self {
        Self::UndefinedVariable(name.into())
    }

    /// Create an invalid-literal error
    pub fn invalid_literal(token: impl Into<String>) -> Self {
        Self::InvalidLiteral(token.into())
    }

    /// Create an unexpected-token error
    pub fn unexpected_token(token: impl ToString) -> Self {
        Self::UnexpectedToken(token.to_string())
    }

    /// Create a type-mismatch error
    pub fn type_mismatch(op: impl ToString, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            op: op.to_string(),
            found: found.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            EvalError::undefined_variable("humidity").to_string(),
            "Undefined variable: humidity"
        );
        assert_eq!(
            EvalError::invalid_literal("1.2.3").to_string(),
            "Invalid literal: 1.2.3"
        );
        assert_eq!(
            EvalError::type_mismatch("-", "string and number").to_string(),
            "Type mismatch: cannot apply '-' to string and number"
        );
        assert_eq!(
            EvalError::ExpressionTooLong { len: 5000, max: 4096 }.to_string(),
            "Expression is 5000 bytes, maximum is 4096"
        );
    }
}
