// SPDX-License-Identifier: MIT

//! Expression parsing and evaluation
//!
//! This module provides the pipeline behind [`crate::ExpressionEvaluator`]:
//! - `lexer` - source text to token stream
//! - `parser` - token stream to expression tree
//! - `evaluator` - tree interpretation against a bindings map
//!
//! Expressions are things like:
//! - `temperature > 25 && humidity < 60`
//! - `(1 + 2) * (3 + 4)`
//! - `${status} == 'active'`

mod ast;
mod evaluator;
mod lexer;
mod parser;
mod value;

pub use ast::{BinaryOp, Expr, UnaryOp};
pub use evaluator::evaluate;
pub use lexer::{tokenize, Token};
pub use parser::parse;
pub use value::Value;
