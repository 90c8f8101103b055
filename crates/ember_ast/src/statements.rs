//! Statement nodes

use crate::block::Block;
use crate::expr::{Expr, Name};

/// A statement
#[derive(Debug, Clone, PartialEq, Eq, derive_more::From)]
pub enum Stmt {
    Block(Block),
    Expression(ExpressionStmt),
    Function(FunctionStmt),
    If(IfStmt),
    Variable(VariableStmt),
    Return(ReturnStmt),
}

/// An expression evaluated for its effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionStmt {
    pub expression: Expr,
}

impl ExpressionStmt {
    pub fn new(expression: impl Into<Expr>) -> Self {
        Self {
            expression: expression.into(),
        }
    }
}

/// A function definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionStmt {
    pub name: Name,
    pub parameters: Vec<Name>,
    pub body: Block,
}

impl FunctionStmt {
    pub fn new(name: Name, parameters: impl IntoIterator<Item = Name>, body: Block) -> Self {
        Self {
            name,
            parameters: parameters.into_iter().collect(),
            body,
        }
    }
}

/// A conditional, with an optional else branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_branch: Block,
    pub else_branch: Option<Block>,
}

impl IfStmt {
    pub fn new(
        condition: impl Into<Expr>,
        then_branch: Block,
        else_branch: impl Into<Option<Block>>,
    ) -> Self {
        Self {
            condition: condition.into(),
            then_branch,
            else_branch: else_branch.into(),
        }
    }
}

/// A variable declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableStmt {
    pub name: Name,
    pub initializer: Expr,
}

impl VariableStmt {
    pub fn new(name: Name, initializer: impl Into<Expr>) -> Self {
        Self {
            name,
            initializer: initializer.into(),
        }
    }
}

/// Return from a function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStmt {
    pub expression: Expr,
}

impl ReturnStmt {
    pub fn new(expression: impl Into<Expr>) -> Self {
        Self {
            expression: expression.into(),
        }
    }
}
