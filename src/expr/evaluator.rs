// SPDX-License-Identifier: MIT

//! Tree-walking evaluator for rule expressions
//!
//! Variables are resolved against the bindings here, not before parsing.
//! Logical operators evaluate both operands eagerly, so a failure in the
//! right operand surfaces no matter what the left one evaluated to.

use super::ast::{BinaryOp, Expr, UnaryOp};
use super::value::Value;
use crate::bindings::Bindings;
use crate::error::EvalError;
use std::cmp::Ordering;

/// Evaluate an expression tree against the supplied bindings
pub fn evaluate(expr: &Expr, bindings: &Bindings) -> Result<Value, EvalError> {
    match expr {
        Expr::Literal(value) => Ok(value.clone()),
        Expr::Variable(name) => bindings
            .get(name)
            .cloned()
            .ok_or_else(|| EvalError::undefined_variable(name)),
        Expr::Unary { op, operand } => {
            let value = evaluate(operand, bindings)?;
            apply_unary(*op, value)
        }
        Expr::Binary { op, left, right } => {
            let lhs = evaluate(left, bindings)?;
            let rhs = evaluate(right, bindings)?;
            apply_binary(*op, lhs, rhs)
        }
    }
}

fn apply_unary(op: UnaryOp, value: Value) -> Result<Value, EvalError> {
    match op {
        UnaryOp::Not => Ok(Value::Boolean(!value.is_truthy())),
        UnaryOp::Neg => match value {
            Value::Number(n) => Ok(Value::Number(-n)),
            other => Err(EvalError::type_mismatch(op, other.type_name())),
        },
    }
}

fn apply_binary(op: BinaryOp, lhs: Value, rhs: Value) -> Result<Value, EvalError> {
    match op {
        BinaryOp::Or => Ok(Value::Boolean(lhs.is_truthy() || rhs.is_truthy())),
        BinaryOp::And => Ok(Value::Boolean(lhs.is_truthy() && rhs.is_truthy())),
        BinaryOp::Eq => Ok(Value::Boolean(lhs == rhs)),
        BinaryOp::NotEq => Ok(Value::Boolean(lhs != rhs)),
        BinaryOp::Gt => compare(op, lhs, rhs, |ord| ord == Ordering::Greater),
        BinaryOp::Gte => compare(op, lhs, rhs, |ord| ord != Ordering::Less),
        BinaryOp::Lt => compare(op, lhs, rhs, |ord| ord == Ordering::Less),
        BinaryOp::Lte => compare(op, lhs, rhs, |ord| ord != Ordering::Greater),
        BinaryOp::Add => add(lhs, rhs),
        // Division by zero follows IEEE-754 (inf/NaN), never an error
        BinaryOp::Sub => arithmetic(op, lhs, rhs, |a, b| a - b),
        BinaryOp::Mul => arithmetic(op, lhs, rhs, |a, b| a * b),
        BinaryOp::Div => arithmetic(op, lhs, rhs, |a, b| a / b),
    }
}

/// Ordering comparisons: numeric for numbers, lexicographic for strings.
/// NaN compares false against everything, per IEEE-754.
fn compare<F>(op: BinaryOp, lhs: Value, rhs: Value, check: F) -> Result<Value, EvalError>
where
    F: Fn(Ordering) -> bool,
{
    match (&lhs, &rhs) {
        (Value::Number(a), Value::Number(b)) => {
            Ok(Value::Boolean(a.partial_cmp(b).map(check).unwrap_or(false)))
        }
        (Value::String(a), Value::String(b)) => Ok(Value::Boolean(check(a.cmp(b)))),
        _ => Err(mismatch(op, &lhs, &rhs)),
    }
}

/// `+` adds numbers, or concatenates when either side is a string
fn add(lhs: Value, rhs: Value) -> Result<Value, EvalError> {
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::String(a), b) => Ok(Value::String(format!("{}{}", a, b))),
        (a, Value::String(b)) => Ok(Value::String(format!("{}{}", a, b))),
        (a, b) => Err(mismatch(BinaryOp::Add, &a, &b)),
    }
}

fn arithmetic<F>(op: BinaryOp, lhs: Value, rhs: Value, apply: F) -> Result<Value, EvalError>
where
    F: Fn(f64, f64) -> f64,
{
    match (&lhs, &rhs) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(apply(*a, *b))),
        _ => Err(mismatch(op, &lhs, &rhs)),
    }
}

fn mismatch(op: BinaryOp, lhs: &Value, rhs: &Value) -> EvalError {
    EvalError::type_mismatch(op, format!("{} and {}", lhs.type_name(), rhs.type_name()))
}
