// SPDX-License-Identifier: MIT

//! Abstract syntax tree for rule expressions

use super::value::Value;

/// A parsed rule expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value: number, string, boolean or null
    Literal(Value),
    /// A variable reference, resolved against the bindings at evaluation time
    Variable(String),
    /// Unary operation: `-x`, `!x`
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// Binary operation: `left op right`
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Binary operators, in the precedence groups the parser uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// ||
    Or,
    /// &&
    And,
    /// ==
    Eq,
    /// !=
    NotEq,
    /// >
    Gt,
    /// >=
    Gte,
    /// <
    Lt,
    /// <=
    Lte,
    /// +
    Add,
    /// -
    Sub,
    /// *
    Mul,
    /// /
    Div,
}

impl BinaryOp {
    /// Whether this operator belongs to the comparison precedence level
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            BinaryOp::Eq
                | BinaryOp::NotEq
                | BinaryOp::Gt
                | BinaryOp::Gte
                | BinaryOp::Lt
                | BinaryOp::Lte
        )
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// -
    Neg,
    /// !
    Not,
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOp::Or => write!(f, "||"),
            BinaryOp::And => write!(f, "&&"),
            BinaryOp::Eq => write!(f, "=="),
            BinaryOp::NotEq => write!(f, "!="),
            BinaryOp::Gt => write!(f, ">"),
            BinaryOp::Gte => write!(f, ">="),
            BinaryOp::Lt => write!(f, "<"),
            BinaryOp::Lte => write!(f, "<="),
            BinaryOp::Add => write!(f, "+"),
            BinaryOp::Sub => write!(f, "-"),
            BinaryOp::Mul => write!(f, "*"),
            BinaryOp::Div => write!(f, "/"),
        }
    }
}

impl std::fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOp::Neg => write!(f, "-"),
            UnaryOp::Not => write!(f, "!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_op_display() {
        assert_eq!(format!("{}", BinaryOp::Or), "||");
        assert_eq!(format!("{}", BinaryOp::And), "&&");
        assert_eq!(format!("{}", BinaryOp::Eq), "==");
        assert_eq!(format!("{}", BinaryOp::NotEq), "!=");
        assert_eq!(format!("{}", BinaryOp::Gte), ">=");
        assert_eq!(format!("{}", BinaryOp::Lte), "<=");
        assert_eq!(format!("{}", BinaryOp::Div), "/");
    }

    #[test]
    fn test_comparison_group() {
        assert!(BinaryOp::Eq.is_comparison());
        assert!(BinaryOp::Lte.is_comparison());
        assert!(!BinaryOp::Add.is_comparison());
        assert!(!BinaryOp::Or.is_comparison());
    }

    #[test]
    fn test_expr_equality() {
        let a = Expr::binary(
            BinaryOp::Gt,
            Expr::Variable("temperature".to_string()),
            Expr::Literal(Value::Number(25.0)),
        );
        let b = Expr::binary(
            BinaryOp::Gt,
            Expr::Variable("temperature".to_string()),
            Expr::Literal(Value::Number(25.0)),
        );
        assert_eq!(a, b);
    }
}
