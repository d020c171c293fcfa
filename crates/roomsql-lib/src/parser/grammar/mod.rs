//! Grammar productions for the SQL dialect.
//!
//! Every production is a `parse_*` method on `Parser`. Productions that begin with a
//! single keyword expect the caller to have checked it; the rest test their FIRST set
//! themselves and report a labelled expectation when it does not match.

mod expressions;
mod names;
mod schema;
mod select;
mod statements;

use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{PAREN_RECOVERY, STATEMENT_FIRST};
use crate::parser::cst::TokenSet;

impl Parser<'_> {
    /// `File ::= [statement] [';']`, with anything left over wrapped in one error node.
    pub(crate) fn parse_file(&mut self) {
        self.start_node(SyntaxKind::File);

        if self.at_set(STATEMENT_FIRST, "<statement>") {
            self.parse_statement();
        } else if !self.at_eof() {
            self.error_recover(TokenSet::EMPTY);
        }

        self.eat(SyntaxKind::Semicolon);

        if !self.at_eof() {
            self.expect_token(SyntaxKind::Eof);
            self.error_recover(TokenSet::EMPTY);
        }

        self.skip_trivia_to_buffer();
        self.drain_trivia();
        self.finish_node();
    }

    fn parse_statement(&mut self) {
        match self.current() {
            SyntaxKind::KwWith => self.parse_with_clause_statement(),
            SyntaxKind::KwSelect | SyntaxKind::KwValues => self.parse_select_statement(),
            SyntaxKind::KwInsert | SyntaxKind::KwReplace => self.parse_insert_statement(),
            SyntaxKind::KwUpdate => self.parse_update_statement(),
            SyntaxKind::KwDelete => self.parse_delete_statement(),
            SyntaxKind::KwCreate => self.parse_create_table_statement(),
            SyntaxKind::KwAlter => self.parse_alter_table_statement(),
            SyntaxKind::KwPragma => self.parse_pragma_statement(),
            kind => unreachable!("parse_statement: {kind:?} is not in STATEMENT_FIRST"),
        }
    }

    /// Closes a parenthesized group. Unexpected tokens before the `)` are wrapped in
    /// an error node, nested parentheses included.
    pub(super) fn expect_closing_paren(&mut self) -> bool {
        if self.eat(SyntaxKind::ParenClose) {
            return true;
        }
        self.error_recover(PAREN_RECOVERY);
        self.eat(SyntaxKind::ParenClose)
    }

    /// `item (',' item)*`
    pub(super) fn parse_comma_separated(&mut self, mut item: impl FnMut(&mut Self)) {
        loop {
            item(self);
            if !self.eat(SyntaxKind::Comma) {
                break;
            }
        }
    }
}
