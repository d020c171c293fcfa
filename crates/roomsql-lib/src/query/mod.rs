//! Query facade: source, tokens and tree of one query, with its diagnostics.

mod printer;
pub use printer::QueryPrinter;


use rowan::TextRange;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::parser::cst::SyntaxKind;
use crate::parser::lexer::{Token, lex, token_text};
use crate::parser::{DEFAULT_RECURSION_LIMIT, Parse, Parser, SyntaxNode, ast};
use crate::{Error, Result};

/// Configures how a query is parsed.
#[derive(Debug, Clone)]
pub struct QueryBuilder<'q> {
    pub src: &'q str,
    recursion_limit: u32,
}

impl<'q> QueryBuilder<'q> {
    pub fn new(src: &'q str) -> Self {
        Self {
            src,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }

    /// Maximum nesting of expressions, subqueries and parenthesized joins.
    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn parse(self) -> SqlQuery<'q> {
        let tokens = lex(self.src);
        let parse = Parser::new(self.src, tokens.clone())
            .with_recursion_limit(self.recursion_limit)
            .parse();
        let query = SqlQuery {
            source: self.src,
            tokens,
            parse,
        };
        tracing::debug!(
            len = self.src.len(),
            valid = query.is_valid(),
            "query parsed"
        );
        query
    }
}

/// A lexed and parsed query.
///
/// Parsing never fails: check [`is_valid`](Self::is_valid) or
/// [`diagnostics`](Self::diagnostics) for problems.
#[derive(Debug, Clone)]
pub struct SqlQuery<'q> {
    source: &'q str,
    tokens: Vec<Token>,
    parse: Parse,
}

impl<'q> SqlQuery<'q> {
    pub fn new(source: &'q str) -> Self {
        QueryBuilder::new(source).parse()
    }

    pub fn source(&self) -> &'q str {
        self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn token_text(&self, token: &Token) -> &'q str {
        token_text(self.source, token)
    }

    pub fn parse_result(&self) -> &Parse {
        &self.parse
    }

    pub fn syntax(&self) -> SyntaxNode {
        self.parse.syntax()
    }

    pub fn root(&self) -> Option<ast::File> {
        self.parse.tree()
    }

    pub fn statement(&self) -> Option<ast::Statement> {
        self.root()?.statement()
    }

    /// One statement, no error nodes, and no bad characters.
    pub fn is_valid(&self) -> bool {
        !self.parse.has_errors()
            && !self
                .tokens
                .iter()
                .any(|t| t.kind == SyntaxKind::BadCharacter)
            && self.statement().is_some()
    }

    pub fn printer(&self) -> QueryPrinter<'_, 'q> {
        QueryPrinter::new(self)
    }

    pub fn dump_cst(&self) -> String {
        self.printer().dump()
    }

    /// Lexical and syntax diagnostics, ordered by position.
    pub fn diagnostics(&self) -> Diagnostics {
        let mut diagnostics = self.lexical_diagnostics();
        diagnostics.extend(self.parse.diagnostics().clone());
        diagnostics.sort_by_position();
        diagnostics
    }

    fn lexical_diagnostics(&self) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        for token in &self.tokens {
            let text = token_text(self.source, token);
            match token.kind {
                SyntaxKind::BadCharacter => diagnostics
                    .report(DiagnosticKind::BadCharacter, token.span)
                    .message(format!("unexpected character '{text}'"))
                    .emit(),
                kind if kind.is_unterminated() => diagnostics
                    .report(DiagnosticKind::UnterminatedLiteral, token.span)
                    .fix("close the literal", format!("{text}{}", closer(kind)))
                    .emit(),
                SyntaxKind::Comment if !is_closed_comment(text) => diagnostics
                    .report(DiagnosticKind::UnterminatedComment, tail(token.span))
                    .emit(),
                _ => {}
            }
        }
        diagnostics
    }

    /// `Err(Error::InvalidQuery)` unless the query is valid.
    pub fn into_result(self) -> Result<Self> {
        if self.is_valid() {
            return Ok(self);
        }
        let mut diagnostics = self.diagnostics();
        if diagnostics.is_empty() {
            diagnostics
                .report(DiagnosticKind::Syntax, TextRange::empty(0.into()))
                .message("<statement> expected")
                .emit();
        }
        Err(Error::InvalidQuery(diagnostics))
    }
}

fn closer(kind: SyntaxKind) -> char {
    match kind {
        SyntaxKind::UnterminatedBacktickLiteral => '`',
        SyntaxKind::UnterminatedBracketLiteral => ']',
        SyntaxKind::UnterminatedDoubleQuoteStringLiteral => '"',
        _ => '\'',
    }
}

fn is_closed_comment(text: &str) -> bool {
    text.len() >= 4 && text.ends_with("*/")
}

/// Zero-width range at the end of `range`.
fn tail(range: TextRange) -> TextRange {
    TextRange::empty(range.end())
}
