//! RoomSQL: lossless lexer and error-tolerant parser for SQL query annotations.
//!
//! # Example
//!
//! ```
//! use roomsql_lib::SqlQuery;
//!
//! let source = "SELECT name FROM users WHERE id = :id";
//!
//! let query = SqlQuery::new(source);
//! assert!(query.is_valid());
//! eprintln!("{}", query.diagnostics().render(source));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod parser;
pub mod query;

pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use parser::{
    Lexer, Parse, SyntaxError, SyntaxKind, SyntaxNode, SyntaxToken, Token, TokenSet, ast,
    get_valid_name, lex, needs_quoting, parse, token_text, unquote,
};
pub use query::{QueryBuilder, QueryPrinter, SqlQuery};

/// Errors that can occur when a query is required to be valid.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("invalid query with {} errors", .0.error_count())]
    InvalidQuery(Diagnostics),
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, Error>;

/// `true` when `source` is exactly one well-formed statement.
pub fn is_valid_sql_query(source: &str) -> bool {
    SqlQuery::new(source).is_valid()
}
