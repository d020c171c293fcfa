use std::fmt::Write;

use rowan::{NodeOrToken, TextRange};

use crate::parser::{SyntaxKind, SyntaxNode};

use super::SqlQuery;

/// Indented dump of a query's concrete syntax tree.
///
/// Nodes print as `Kind`, tokens as `Kind "text"`. An `Error` node prints its
/// message after the kind.
pub struct QueryPrinter<'q, 'src> {
    query: &'q SqlQuery<'src>,
    trivia: bool,
    spans: bool,
    tokens: bool,
}

impl<'q, 'src> QueryPrinter<'q, 'src> {
    pub fn new(query: &'q SqlQuery<'src>) -> Self {
        Self {
            query,
            trivia: false,
            spans: false,
            tokens: true,
        }
    }

    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    /// Print only nodes when `false`.
    pub fn with_tokens(mut self, value: bool) -> Self {
        self.tokens = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let errors = self.query.parse_result().errors();
        let mut messages = errors.iter().map(|e| e.message.as_str());
        self.format_cst(&self.query.syntax(), 0, &mut messages, w)
    }

    fn format_cst<'e>(
        &self,
        node: &SyntaxNode,
        indent: usize,
        messages: &mut impl Iterator<Item = &'e str>,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let span = self.span_str(node.text_range());

        if node.kind() == SyntaxKind::Error {
            match messages.next() {
                Some(message) => writeln!(w, "{}Error{}: {}", prefix, span, message)?,
                None => writeln!(w, "{}Error{}", prefix, span)?,
            }
        } else {
            writeln!(w, "{}{:?}{}", prefix, node.kind(), span)?;
        }

        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Node(n) => self.format_cst(&n, indent + 1, messages, w)?,
                NodeOrToken::Token(t) => {
                    if !self.tokens || (!self.trivia && t.kind().is_trivia()) {
                        continue;
                    }
                    let child_prefix = "  ".repeat(indent + 1);
                    let child_span = self.span_str(t.text_range());
                    writeln!(
                        w,
                        "{}{:?}{} {:?}",
                        child_prefix,
                        t.kind(),
                        child_span,
                        t.text()
                    )?;
                }
            }
        }
        Ok(())
    }

    fn span_str(&self, range: TextRange) -> String {
        if !self.spans {
            return String::new();
        }
        format!(" [{}..{}]", u32::from(range.start()), u32::from(range.end()))
    }
}
