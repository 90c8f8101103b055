//! Binary operators, split by the kind of expression that may use them

use ember_tokens::TokenKind;
use thiserror::Error;

/// An operator of a [NumericExpr](crate::expr::NumericExpr)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ArithmeticOperator {
    #[display(fmt = "+")]
    Plus,
    #[display(fmt = "-")]
    Minus,
    #[display(fmt = "*")]
    Times,
}

/// An operator of a [RelationalExpr](crate::expr::RelationalExpr)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RelationalOperator {
    #[display(fmt = "=")]
    Equal,
    #[display(fmt = ">")]
    Greater,
    #[display(fmt = "<")]
    Less,
}

impl TryFrom<TokenKind> for ArithmeticOperator {
    type Error = OperatorError;

    fn try_from(kind: TokenKind) -> Result<Self, Self::Error> {
        match kind {
            TokenKind::Plus => Ok(Self::Plus),
            TokenKind::Minus => Ok(Self::Minus),
            TokenKind::Times => Ok(Self::Times),
            other => Err(OperatorError::NotArithmetic(other)),
        }
    }
}

impl TryFrom<TokenKind> for RelationalOperator {
    type Error = OperatorError;

    fn try_from(kind: TokenKind) -> Result<Self, Self::Error> {
        match kind {
            TokenKind::Equal => Ok(Self::Equal),
            TokenKind::Greater => Ok(Self::Greater),
            TokenKind::Less => Ok(Self::Less),
            other => Err(OperatorError::NotRelational(other)),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OperatorError {
    #[error("{0} is not an arithmetic operator")]
    NotArithmetic(TokenKind),
    #[error("{0} is not a relational operator")]
    NotRelational(TokenKind),
}
