//! Expectation tracking for syntax error messages.
//!
//! The parser records every token and labelled sub-rule it tests at the current position.
//! When a production fails, the recorded set becomes a message like
//! `'(', '.' or AS expected, got 'foo'`.

use std::borrow::Cow;

use super::cst::SyntaxKind::{self, *};
use super::keywords;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Expected {
    Token(SyntaxKind),
    /// A sub-rule or contextual word, displayed verbatim: `<expression>`, `ROWID`.
    Label(&'static str),
}

impl Expected {
    pub(crate) fn describe(self) -> Cow<'static, str> {
        match self {
            Expected::Token(kind) => describe_kind(kind),
            Expected::Label(label) => Cow::Borrowed(label),
        }
    }
}

/// How a token kind reads in a message: keywords uppercase, punctuation quoted.
pub fn describe_kind(kind: SyntaxKind) -> Cow<'static, str> {
    if let Some(word) = keywords::text(kind) {
        return Cow::Owned(word.to_ascii_uppercase());
    }
    let text = match kind {
        ParenOpen => "'('",
        ParenClose => "')'",
        Comma => "','",
        Dot => "'.'",
        Semicolon => "';'",
        Star => "'*'",
        Plus => "'+'",
        Minus => "'-'",
        Slash => "'/'",
        Percent => "'%'",
        Tilde => "'~'",
        Concat => "'||'",
        Pipe => "'|'",
        Ampersand => "'&'",
        ShiftLeft => "'<<'",
        ShiftRight => "'>>'",
        Lt => "'<'",
        LtEq => "'<='",
        Gt => "'>'",
        GtEq => "'>='",
        Eq => "'='",
        EqEq => "'=='",
        NotEq => "'!='",
        LtGt => "'<>'",
        NumericLiteral => "<number>",
        Ident => "<identifier>",
        BacktickLiteral | BracketLiteral | DoubleQuoteStringLiteral => "<quoted name>",
        SingleQuoteStringLiteral => "<string>",
        NamedParameter | NumberedParameter => "<bind parameter>",
        Eof => "<end of input>",
        _ => return Cow::Owned(format!("{kind:?}")),
    };
    Cow::Borrowed(text)
}

/// Builds `A expected`, `A or B expected`, `A, B or C expected`, followed by
/// `, got '<found>'` unless at end of input.
///
/// Alternatives are deduplicated and sorted by their display text.
pub(crate) fn expectation_message(expected: &[Expected], found: Option<&str>) -> String {
    let mut alternatives: Vec<Cow<'static, str>> = expected.iter().map(|e| e.describe()).collect();
    alternatives.sort();
    alternatives.dedup();

    let mut message = match alternatives.split_last() {
        None => {
            return match found {
                Some(found) => format!("unexpected '{found}'"),
                None => "unexpected end of input".to_string(),
            };
        }
        Some((last, [])) => format!("{last} expected"),
        Some((last, init)) => format!("{} or {last} expected", init.join(", ")),
    };

    if let Some(found) = found {
        message.push_str(", got '");
        message.push_str(found);
        message.push('\'');
    }
    message
}
