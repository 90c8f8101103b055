//! A lexical token from a source file, along with streams for said token

use std::collections::VecDeque;
use std::fmt::{Display, Formatter};

/// The text carried by the end of stream token. This is not source text.
pub const EOF_TEXT: &str = "EOF";

/// Words that are reserved and never scanned as a [TokenKind::Name]
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("func", TokenKind::Func),
    ("else", TokenKind::Else),
    ("if", TokenKind::If),
    ("return", TokenKind::Return),
    ("var", TokenKind::Var),
];

/// Characters that always form a token on their own
pub const LITERALS: &[(char, TokenKind)] = &[
    ('{', TokenKind::BraceLeft),
    ('}', TokenKind::BraceRight),
    (',', TokenKind::Comma),
    ('=', TokenKind::Equal),
    ('>', TokenKind::Greater),
    ('<', TokenKind::Less),
    ('-', TokenKind::Minus),
    ('(', TokenKind::ParenLeft),
    (')', TokenKind::ParenRight),
    ('+', TokenKind::Plus),
    (';', TokenKind::Semicolon),
    ('*', TokenKind::Times),
];

/// A lexical token from a source file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: String,
    line: usize,
}

impl Token {
    /// Creates a new token
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }

    /// Creates the end of stream token for the given line
    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, EOF_TEXT, line)
    }

    /// Gets the kind for this token
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact lexeme this token was scanned from
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The 1-based line this token starts on
    pub fn line(&self) -> usize {
        self.line
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}' (line {})", self.kind, self.text, self.line)
    }
}

/// The kind for this token
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Integer,
    Name,

    /// {
    BraceLeft,
    /// }
    BraceRight,
    Comma,
    /// =
    Equal,
    /// >
    Greater,
    /// <
    Less,
    Minus,
    ParenLeft,
    ParenRight,
    Plus,
    Semicolon,
    /// *
    Times,

    Func,
    Else,
    If,
    Return,
    Var,

    /// EOF, will only appear at the end of a token sequence
    Eof,
}

impl TokenKind {
    /// Looks up a word in the keyword table
    pub fn keyword(text: &str) -> Option<TokenKind> {
        KEYWORDS
            .iter()
            .find(|(keyword, _)| *keyword == text)
            .map(|&(_, kind)| kind)
    }

    /// Looks up a character in the single character literal table
    pub fn literal(c: char) -> Option<TokenKind> {
        LITERALS
            .iter()
            .find(|(literal, _)| *literal == c)
            .map(|&(_, kind)| kind)
    }

    pub fn is_keyword(&self) -> bool {
        KEYWORDS.iter().any(|(_, kind)| kind == self)
    }

    pub fn is_literal(&self) -> bool {
        LITERALS.iter().any(|(_, kind)| kind == self)
    }
}

/// A stream of tokens. Tokens are removed as they are read.
#[derive(Debug)]
pub struct TokenStream(VecDeque<Token>);

impl FromIterator<Token> for TokenStream {
    fn from_iter<T: IntoIterator<Item = Token>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl ExactSizeIterator for TokenStream {}

impl Default for TokenStream {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStream {
    #[inline]
    pub fn new() -> Self {
        Self(VecDeque::new())
    }

    /// The next token, without consuming it
    pub fn peek(&self) -> Option<&Token> {
        self.0.front()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
