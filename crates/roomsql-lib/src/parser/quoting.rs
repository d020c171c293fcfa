//! Identifier quoting for generated SQL, and decoding of quoted names.

use std::borrow::Cow;

use super::cst::SyntaxKind;
use super::lexer::Lexer;

/// Whether `name` must be quoted to be read back as the same bare identifier.
///
/// True for keywords (any case), the empty string, and anything that does not lex
/// as exactly one identifier token.
pub fn needs_quoting(name: &str) -> bool {
    let mut lexer = Lexer::new(name);
    let Some(token) = lexer.next() else {
        return true;
    };
    let whole = usize::from(token.span.end()) == name.len();
    !(token.kind == SyntaxKind::Ident && whole)
}

/// `name` as it should appear in generated SQL: unchanged when it is a valid bare
/// identifier, otherwise backtick-quoted with inner backticks doubled.
pub fn get_valid_name(name: &str) -> String {
    if !needs_quoting(name) {
        return name.to_string();
    }
    format!("`{}`", name.replace('`', "``"))
}

/// Logical value of an identifier-bearing token's text.
///
/// Strips the delimiters of backtick, bracket, double- and single-quoted text (and a
/// blob prefix), then un-doubles the delimiter. Bare identifiers are returned as-is.
/// Text that is not fully delimited is returned unchanged.
pub fn unquote(text: &str) -> Cow<'_, str> {
    let body = match text.as_bytes() {
        [b'x' | b'X', b'\'' | b'"', ..] => &text[1..],
        _ => text,
    };

    let (open, close) = match body.as_bytes().first() {
        Some(b'`') => ('`', '`'),
        Some(b'"') => ('"', '"'),
        Some(b'\'') => ('\'', '\''),
        Some(b'[') => ('[', ']'),
        _ => return Cow::Borrowed(text),
    };

    if body.len() < 2 || !body.ends_with(close) {
        return Cow::Borrowed(text);
    }
    let inner = &body[1..body.len() - 1];

    if open == '[' {
        return Cow::Borrowed(inner);
    }

    let doubled: &str = match close {
        '`' => "``",
        '"' => "\"\"",
        _ => "''",
    };
    if inner.contains(doubled) {
        Cow::Owned(inner.replace(doubled, &doubled[..1]))
    } else {
        Cow::Borrowed(inner)
    }
}
