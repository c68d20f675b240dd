// SPDX-License-Identifier: MIT

//! Recursive-descent parser for rule expressions
//!
//! Precedence, lowest to highest: `||`, `&&`, comparison, `+ -`, `* /`,
//! unary, primary. Arithmetic chains group left to right. Comparisons are
//! non-associative: `a < b < c` is rejected rather than silently taking
//! the first operator.

use super::ast::{BinaryOp, Expr, UnaryOp};
use super::lexer::Token;
use super::value::Value;
use crate::error::EvalError;

/// Parse a token stream into an expression tree
pub fn parse(tokens: &[Token]) -> Result<Expr, EvalError> {
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.or_expr()?;
    match parser.peek() {
        Some(token) => Err(EvalError::unexpected_token(token)),
        None => Ok(expr),
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn or_expr(&mut self) -> Result<Expr, EvalError> {
        let mut left = self.and_expr()?;
        while self.peek() == Some(&Token::Or) {
            self.pos += 1;
            let right = self.and_expr()?;
            left = Expr::binary(BinaryOp::Or, left, right);
        }
        Ok(left)
    }

    fn and_expr(&mut self) -> Result<Expr, EvalError> {
        let mut left = self.comparison()?;
        while self.peek() == Some(&Token::And) {
            self.pos += 1;
            let right = self.comparison()?;
            left = Expr::binary(BinaryOp::And, left, right);
        }
        Ok(left)
    }

    fn comparison(&mut self) -> Result<Expr, EvalError> {
        let left = self.additive()?;
        if let Some(op) = self.peek().and_then(comparison_op) {
            self.pos += 1;
            let right = self.additive()?;
            if self.peek().and_then(comparison_op).is_some() {
                return Err(EvalError::MalformedComparison);
            }
            return Ok(Expr::binary(op, left, right));
        }
        Ok(left)
    }

    fn additive(&mut self) -> Result<Expr, EvalError> {
        let mut left = self.term()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Sub,
                _ => break,
            };
            self.pos += 1;
            let right = self.term()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    fn term(&mut self) -> Result<Expr, EvalError> {
        let mut left = self.unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => BinaryOp::Mul,
                Some(Token::Slash) => BinaryOp::Div,
                _ => break,
            };
            self.pos += 1;
            let right = self.unary()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<Expr, EvalError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.pos += 1;
                Ok(Expr::unary(UnaryOp::Neg, self.unary()?))
            }
            Some(Token::Bang) => {
                self.pos += 1;
                Ok(Expr::unary(UnaryOp::Not, self.unary()?))
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Expr, EvalError> {
        match self.advance() {
            None => Err(EvalError::UnexpectedEnd),
            Some(Token::LParen) => {
                let expr = self.or_expr()?;
                match self.advance() {
                    Some(Token::RParen) => Ok(expr),
                    Some(token) => Err(EvalError::unexpected_token(token)),
                    None => Err(EvalError::UnexpectedEnd),
                }
            }
            Some(Token::Number(n)) => Ok(Expr::Literal(Value::Number(*n))),
            Some(Token::Str(s)) => Ok(Expr::Literal(Value::String(s.clone()))),
            Some(Token::Bool(b)) => Ok(Expr::Literal(Value::Boolean(*b))),
            Some(Token::Null) => Ok(Expr::Literal(Value::Null)),
            Some(Token::Ident(name)) => Ok(Expr::Variable(name.clone())),
            Some(token) => Err(EvalError::unexpected_token(token)),
        }
    }
}

fn comparison_op(token: &Token) -> Option<BinaryOp> {
    match token {
        Token::Eq => Some(BinaryOp::Eq),
        Token::NotEq => Some(BinaryOp::NotEq),
        Token::Gt => Some(BinaryOp::Gt),
        Token::Gte => Some(BinaryOp::Gte),
        Token::Lt => Some(BinaryOp::Lt),
        Token::Lte => Some(BinaryOp::Lte),
        _ => None,
    }
}
