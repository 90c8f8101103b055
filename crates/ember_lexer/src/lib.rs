#![doc = include_str!("../README.md")]

pub mod lexer;

pub use lexer::{scan, scan_stream, LexResult, LexingError, Scanner};
