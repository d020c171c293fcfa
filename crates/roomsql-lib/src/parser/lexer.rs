//! Lexer for the SQL dialect.
//!
//! Produces span-based tokens without storing text - text is sliced from source only when needed.
//! The token stream is lossless: whitespace and comments are tokens, and every character the
//! rules do not cover becomes a one-character `BadCharacter`.
//!
//! [`Lexer`] is a pull cursor over the input; [`lex`] materializes it for the parser.

use logos::Logos;
use rowan::{TextRange, TextSize};

use super::cst::SyntaxKind;
use super::keywords;

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Token {
    pub kind: SyntaxKind,
    #[serde(serialize_with = "crate::diagnostics::serialize_text_range")]
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

/// Pull cursor over the tokens of one input.
///
/// `advance` moves to the next token; `token_kind` is `None` once the input is exhausted.
/// Also usable as an `Iterator<Item = Token>`.
pub struct Lexer<'src> {
    source: &'src str,
    inner: logos::Lexer<'src, SyntaxKind>,
    /// Offset of `inner`'s input within `source`; nonzero after restarting past a bad character.
    base: usize,
    current: Option<Token>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            inner: SyntaxKind::lexer(source),
            base: 0,
            current: None,
        }
    }

    /// Moves to the next token and returns its kind.
    pub fn advance(&mut self) -> Option<SyntaxKind> {
        self.current = self.next_token();
        self.token_kind()
    }

    pub fn token_kind(&self) -> Option<SyntaxKind> {
        self.current.map(|t| t.kind)
    }

    pub fn token_text(&self) -> Option<&'src str> {
        self.current.map(|t| token_text(self.source, &t))
    }

    pub fn token_range(&self) -> Option<TextRange> {
        self.current.map(|t| t.span)
    }

    fn next_token(&mut self) -> Option<Token> {
        let result = self.inner.next()?;
        let span = self.inner.span();
        let start = self.base + span.start;

        let kind = match result {
            Ok(SyntaxKind::Ident) => {
                keywords::lookup(self.inner.slice()).unwrap_or(SyntaxKind::Ident)
            }
            Ok(kind) => kind,
            Err(()) => return Some(self.bad_character(start)),
        };

        Some(Token::new(kind, text_range(start, self.base + span.end)))
    }

    /// One character at `start` becomes `BadCharacter`; lexing resumes right after it.
    fn bad_character(&mut self, start: usize) -> Token {
        let width = self.source[start..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        let end = start + width;

        if self.base + self.inner.span().end != end {
            self.base = end;
            self.inner = SyntaxKind::lexer(&self.source[end..]);
        }

        Token::new(SyntaxKind::BadCharacter, text_range(start, end))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.advance()?;
        self.current
    }
}

fn text_range(start: usize, end: usize) -> TextRange {
    TextRange::new(
        TextSize::from(start as u32),
        TextSize::from(end as u32),
    )
}

/// Tokenizes source into a vector of span-based tokens.
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
