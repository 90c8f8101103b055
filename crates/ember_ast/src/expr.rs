//! Expression nodes

use crate::operator::{ArithmeticOperator, RelationalOperator};
use ember_tokens::{Token, TokenKind};
use itertools::Itertools;
use std::fmt::{Display, Formatter};

/// An expression
#[derive(Debug, Clone, PartialEq, Eq, derive_more::From, derive_more::Display)]
pub enum Expr {
    Name(Name),
    Call(CallExpr),
    Integer(IntegerExpr),
    Numeric(NumericExpr),
    Relational(RelationalExpr),
}

/// A named identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[display(fmt = "{}", text)]
pub struct Name {
    pub text: String,
}

impl Name {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Tries to create a [Name] from a token.
    ///
    /// Returns `Some(Name)` only for [TokenKind::Name] tokens
    pub fn from_token(token: &Token) -> Option<Self> {
        (token.kind() == TokenKind::Name).then(|| Self::new(token.text()))
    }
}

/// Call a function by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpr {
    pub callee: Name,
    pub arguments: Vec<Expr>,
}

impl CallExpr {
    pub fn new(callee: Name, arguments: impl IntoIterator<Item = Expr>) -> Self {
        Self {
            callee,
            arguments: arguments.into_iter().collect(),
        }
    }
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.callee, self.arguments.iter().join(", "))
    }
}

/// An integer literal, kept as the digits it was written with
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display(fmt = "{}", value)]
pub struct IntegerExpr {
    pub value: String,
}

impl IntegerExpr {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Tries to create an [IntegerExpr] from a [TokenKind::Integer] token
    pub fn from_token(token: &Token) -> Option<Self> {
        (token.kind() == TokenKind::Integer).then(|| Self::new(token.text()))
    }
}

/// An arithmetic operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericExpr {
    pub operator: ArithmeticOperator,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

impl NumericExpr {
    pub fn new(operator: ArithmeticOperator, left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Self {
            operator,
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        }
    }
}

impl Display for NumericExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

/// A comparison between two expressions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationalExpr {
    pub operator: RelationalOperator,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

impl RelationalExpr {
    pub fn new(operator: RelationalOperator, left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Self {
            operator,
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        }
    }
}

impl Display for RelationalExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}
