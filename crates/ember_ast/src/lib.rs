#![doc = include_str!("../README.md")]

pub mod block;
pub mod expr;
pub mod operator;
pub mod statements;

pub use block::Block;
pub use expr::{CallExpr, Expr, IntegerExpr, Name, NumericExpr, RelationalExpr};
pub use operator::{ArithmeticOperator, OperatorError, RelationalOperator};
pub use statements::{ExpressionStmt, FunctionStmt, IfStmt, ReturnStmt, Stmt, VariableStmt};
