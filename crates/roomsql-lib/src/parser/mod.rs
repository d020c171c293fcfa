//! Parser infrastructure for the SQL dialect.
//!
//! # Architecture
//!
//! The parser produces a lossless concrete syntax tree (CST) via Rowan's green tree builder:
//!
//! - Zero-copy parsing: tokens carry spans, text is sliced only when building tree nodes
//! - Trivia buffering: whitespace and comments land in the enclosing node, just before the
//!   next node or token
//! - Checkpoint-based wrapping: binary expressions wrap their left operand retroactively
//! - Expectation tracking: every token or sub-rule tested since the last consumed token
//!   feeds the message of the next error node
//!
//! # Recovery Strategy
//!
//! The parser always produces a tree rooted at `File`:
//!
//! 1. A missing token or sub-rule yields an empty `Error` node; the enclosing production
//!    continues with its later parts or returns
//! 2. At synchronization points (a WITH table's `AS (`, closing parentheses, end of input)
//!    unexpected tokens are wrapped in the `Error` node, balancing parentheses
//! 3. Tokens left after the statement are wrapped in a final `Error` node
//! 4. Past the recursion limit, the remaining input goes into a single `Error` node
//!
//! Each `Error` node has exactly one diagnostic, in the same order.

pub mod ast;
pub mod cst;
pub mod expected;
pub mod keywords;
pub mod lexer;
pub mod quoting;

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod tests;

pub use cst::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken, TokenSet};

pub use core::{DEFAULT_RECURSION_LIMIT, Parser};
pub use lexer::{Lexer, Token, lex, token_text};
pub use quoting::{get_valid_name, needs_quoting, unquote};

use rowan::{GreenNode, TextRange};
use serde::Serialize;

use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// One syntax error: the message carried by an `Error` node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxError {
    #[serde(serialize_with = "crate::diagnostics::serialize_text_range")]
    pub range: TextRange,
    pub message: String,
}

/// Parse result containing the green tree.
///
/// The tree is always complete; errors are kept beside it, one per `Error` node in
/// pre-order.
#[derive(Debug, Clone)]
pub struct Parse {
    green: GreenNode,
    diagnostics: Diagnostics,
}

impl Parse {
    pub(crate) fn new(green: GreenNode, diagnostics: Diagnostics) -> Self {
        Self { green, diagnostics }
    }

    pub fn as_cst(&self) -> &GreenNode {
        &self.green
    }

    /// Creates a red tree over the immutable green tree.
    /// This is cheap: SyntaxNode is a thin wrapper with parent pointers.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    /// Typed root. `None` only for a tree not produced by [`Parser`].
    pub fn tree(&self) -> Option<ast::File> {
        ast::File::cast(self.syntax())
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn errors(&self) -> Vec<SyntaxError> {
        self.diagnostics
            .iter()
            .map(|d| SyntaxError {
                range: d.range(),
                message: d.message().to_string(),
            })
            .collect()
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn hit_recursion_limit(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.kind() == DiagnosticKind::RecursionLimit)
    }

    /// `Error` nodes in pre-order, each paired with its message.
    pub fn error_nodes(&self) -> Vec<(SyntaxNode, String)> {
        let nodes = self
            .syntax()
            .descendants()
            .filter(|n| n.kind() == SyntaxKind::Error);
        nodes
            .zip(self.diagnostics.iter())
            .map(|(node, d)| (node, d.message().to_string()))
            .collect()
    }
}

/// Lexes and parses `source` with the default recursion limit.
pub fn parse(source: &str) -> Parse {
    Parser::new(source, lex(source)).parse()
}
