use crate::statements::Stmt;

/// A block of statements
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

impl Block {
    pub fn new(statements: impl IntoIterator<Item = Stmt>) -> Self {
        Self {
            statements: statements.into_iter().collect(),
        }
    }

    /// Creates a new empty block
    pub const fn empty() -> Self {
        Self { statements: vec![] }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stmt> {
        self.statements.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
