//! Responsible with converting source text into a token sequence

use crate::lexer::token_parsing::{parse_lexeme, Lexeme};
use ember_tokens::{Token, TokenStream};
use log::{debug, trace};
use thiserror::Error;

mod token_parsing;

/// Scans the whole source, returning every token up to and including EOF.
///
/// Either every token is returned or only the first error is. Tokens scanned
/// before an error are dropped.
pub fn scan(source: &str) -> LexResult<Vec<Token>> {
    Scanner::new(source).collect()
}

/// Same as [scan], but packs the tokens into a [TokenStream]
pub fn scan_stream(source: &str) -> LexResult<TokenStream> {
    Scanner::new(source).collect()
}

/// Responsible with converting source text into tokens, one at a time
#[derive(Debug)]
pub struct Scanner<'s> {
    source: &'s str,
    /// Byte offset of the cursor
    offset: usize,
    /// Character index of the cursor
    position: usize,
    line: usize,
    emitted: usize,
    state: ScannerState,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum ScannerState {
    Scanning,
    Finished,
}

impl<'s> Scanner<'s> {
    /// Creates a new scanner at the start of the source
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            offset: 0,
            position: 0,
            line: 1,
            emitted: 0,
            state: ScannerState::Scanning,
        }
    }

    /// The 1-based line the cursor is on
    pub fn line(&self) -> usize {
        self.line
    }

    /// The character index of the cursor
    pub fn position(&self) -> usize {
        self.position
    }

    fn advance(&mut self, consumed: &str) {
        self.offset += consumed.len();
        self.position += consumed.chars().count();
    }

    fn next_token(&mut self) -> LexResult<Option<Token>> {
        if self.state == ScannerState::Finished {
            return Ok(None);
        }
        loop {
            let rest = &self.source[self.offset..];
            let Some(character) = rest.chars().next() else {
                self.state = ScannerState::Finished;
                self.emitted += 1;
                debug!("scanned {} tokens over {} lines", self.emitted, self.line);
                return Ok(Some(Token::eof(self.line)));
            };

            let (remaining, lexeme) = match parse_lexeme(rest) {
                Ok(parsed) => parsed,
                Err(e) => {
                    trace!("no lexeme matches at {}: {e:?}", self.position);
                    self.state = ScannerState::Finished;
                    return Err(LexingError::UnrecognizedCharacter {
                        character,
                        position: self.position,
                        line: self.line,
                    });
                }
            };
            self.advance(&rest[..rest.len() - remaining.len()]);

            match lexeme {
                Lexeme::Newline => self.line += 1,
                Lexeme::Whitespace => {}
                Lexeme::Token(kind, text) => {
                    let token = Token::new(kind, text, self.line);
                    trace!("scanned {token}");
                    self.emitted += 1;
                    return Ok(Some(token));
                }
            }
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

pub type LexResult<T> = Result<T, LexingError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexingError {
    /// A character that starts no token and is not whitespace
    #[error("unrecognized character {character:?} at position {position}, line {line}")]
    UnrecognizedCharacter {
        character: char,
        /// Character index into the source
        position: usize,
        line: usize,
    },
}
