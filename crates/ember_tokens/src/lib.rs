#![doc = include_str!("../README.md")]

pub mod token;

pub use token::{Token, TokenKind, TokenStream, EOF_TEXT, KEYWORDS, LITERALS};
