//! nom parsers that classify exactly one lexeme at the start of the input

use ember_tokens::TokenKind;
use nom::branch::alt;
use nom::character::complete::{alpha1, anychar, char, digit1, satisfy};
use nom::combinator::{consumed, map, map_opt, value};
use nom::error::{context, VerboseError};
use nom::IResult;

type Result<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// A classified piece of source text
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Lexeme<'a> {
    Newline,
    /// Any whitespace character other than a newline
    Whitespace,
    Token(TokenKind, &'a str),
}

/// Parses the lexeme at the start of `src`.
///
/// The classes tried here are disjoint, so the order of the alternatives only
/// matters for speed.
pub fn parse_lexeme(src: &str) -> Result<Lexeme<'_>> {
    context(
        "lexeme",
        alt((
            parse_newline,
            parse_whitespace,
            parse_word,
            parse_integer,
            parse_literal,
        )),
    )(src)
}

fn parse_newline(src: &str) -> Result<Lexeme<'_>> {
    context("newline", value(Lexeme::Newline, char('\n')))(src)
}

fn parse_whitespace(src: &str) -> Result<Lexeme<'_>> {
    context(
        "whitespace",
        value(
            Lexeme::Whitespace,
            satisfy(|c| c != '\n' && c.is_whitespace()),
        ),
    )(src)
}

fn parse_word(src: &str) -> Result<Lexeme<'_>> {
    context(
        "word",
        map(alpha1, |word: &str| {
            Lexeme::Token(TokenKind::keyword(word).unwrap_or(TokenKind::Name), word)
        }),
    )(src)
}

fn parse_integer(src: &str) -> Result<Lexeme<'_>> {
    context(
        "integer",
        map(digit1, |digits: &str| Lexeme::Token(TokenKind::Integer, digits)),
    )(src)
}

fn parse_literal(src: &str) -> Result<Lexeme<'_>> {
    context(
        "literal",
        map_opt(consumed(anychar), |(text, c): (&str, char)| {
            TokenKind::literal(c).map(|kind| Lexeme::Token(kind, text))
        }),
    )(src)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_parse_keyword() {
        let (rest, lexeme) = parse_lexeme("return x").expect("could not parse");
        assert_eq!(lexeme, Lexeme::Token(TokenKind::Return, "return"));
        assert_eq!(rest, " x");
    }

    #[test]
    fn test_keyword_prefix_is_a_name() {
        let (rest, lexeme) = parse_lexeme("returning").expect("could not parse");
        assert_eq!(lexeme, Lexeme::Token(TokenKind::Name, "returning"));
        assert_eq!(rest, "");
    }

    #[test]
    fn test_words_stop_at_digits() {
        let (rest, lexeme) = parse_lexeme("abc123").expect("could not parse");
        assert_eq!(lexeme, Lexeme::Token(TokenKind::Name, "abc"));
        assert_eq!(rest, "123");
    }

    #[test]
    fn test_integers_stop_at_letters() {
        let (rest, lexeme) = parse_lexeme("123abc").expect("could not parse");
        assert_eq!(lexeme, Lexeme::Token(TokenKind::Integer, "123"));
        assert_eq!(rest, "abc");
    }

    #[test]
    fn test_integer_text_is_verbatim() {
        let big = "000123456789012345678901234567890";
        let (rest, lexeme) = parse_lexeme(big).expect("could not parse");
        assert_eq!(lexeme, Lexeme::Token(TokenKind::Integer, big));
        assert_eq!(rest, "");
    }

    #[test]
    fn test_literals_are_single_characters() {
        let (rest, lexeme) = parse_lexeme("==").expect("could not parse");
        assert_eq!(lexeme, Lexeme::Token(TokenKind::Equal, "="));
        assert_eq!(rest, "=");
    }

    #[test]
    fn test_whitespace() {
        assert_eq!(parse_lexeme("\n "), Ok((" ", Lexeme::Newline)));
        assert_eq!(parse_lexeme("\t\n"), Ok(("\n", Lexeme::Whitespace)));
        assert_eq!(parse_lexeme("\r\n"), Ok(("\n", Lexeme::Whitespace)));
        assert_eq!(parse_lexeme("  "), Ok((" ", Lexeme::Whitespace)));
    }

    #[test]
    fn test_unrecognized() {
        assert!(parse_lexeme("@").is_err());
        assert!(parse_lexeme("/").is_err());
        assert!(parse_lexeme("\u{e9}t\u{e9}").is_err());
        assert!(parse_lexeme("").is_err());
    }
}
