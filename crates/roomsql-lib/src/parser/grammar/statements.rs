//! Data statements: WITH, INSERT, UPDATE, DELETE.

use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{
    CONFLICT_RESOLUTIONS, NAMES, QUERY_FIRST, SELECT_FIRST, WITH_TABLE_RECOVERY,
};

impl Parser<'_> {
    /// `WithClause SelectStatement`
    pub(super) fn parse_with_clause_statement(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        self.start_node(SyntaxKind::WithClauseStatement);
        self.parse_with_clause();
        if self.at_set(SELECT_FIRST, "<select statement>") {
            self.parse_select_statement();
        } else {
            self.error_missing();
        }
        self.finish_node();
        self.exit_recursion();
    }

    /// `WITH [RECURSIVE] WithClauseTable (',' WithClauseTable)*`
    fn parse_with_clause(&mut self) {
        self.assert_current(SyntaxKind::KwWith);
        self.start_node(SyntaxKind::WithClause);
        self.bump();
        self.eat(SyntaxKind::KwRecursive);

        loop {
            if !self.parse_with_clause_table() {
                break;
            }
            if !self.eat(SyntaxKind::Comma) {
                break;
            }
        }
        self.finish_node();
    }

    /// `TableDefinitionName ['(' ColumnDefinitionName, ... ')'] AS '(' query ')'`
    ///
    /// Returns false when the table is too broken to look for a following `,`.
    fn parse_with_clause_table(&mut self) -> bool {
        if !self.at_set(NAMES, "<table definition name>") {
            self.error_missing();
            return false;
        }

        self.start_node(SyntaxKind::WithClauseTable);
        self.parse_name(SyntaxKind::TableDefinitionName, "<table definition name>");

        if self.eat(SyntaxKind::ParenOpen) {
            self.parse_comma_separated(|p| {
                p.parse_name(SyntaxKind::ColumnDefinitionName, "<column definition name>");
            });
            self.expect_closing_paren();
        }

        if !self.eat(SyntaxKind::KwAs) {
            self.error_missing();
            self.finish_node();
            return false;
        }

        if !self.at(SyntaxKind::ParenOpen) {
            self.error_recover(WITH_TABLE_RECOVERY);
            if !self.at(SyntaxKind::ParenOpen) {
                self.finish_node();
                return false;
            }
        }
        self.bump();
        self.parse_query();
        self.expect_closing_paren();

        self.finish_node();
        true
    }

    /// A select statement, optionally preceded by a WITH clause, as found inside
    /// parentheses and after `INSERT ... INTO t` or `AS`.
    pub(super) fn parse_query(&mut self) -> bool {
        if !self.at_set(QUERY_FIRST, "<select statement>") {
            self.error_missing();
            return false;
        }
        if self.current() == SyntaxKind::KwWith {
            self.parse_with_clause_statement();
        } else {
            self.parse_select_statement();
        }
        true
    }

    /// `ON CONFLICT resolution` inside constraints, `OR resolution` after INSERT/UPDATE.
    pub(super) fn parse_conflict_resolution(&mut self) {
        if self.at_one_of(CONFLICT_RESOLUTIONS) {
            self.bump();
        } else {
            self.error_missing();
        }
    }

    /// `(INSERT [OR resolution] | REPLACE) INTO SingleTableStatementTable ['(' columns ')']
    /// (query | DEFAULT VALUES)`
    pub(super) fn parse_insert_statement(&mut self) {
        self.start_node(SyntaxKind::InsertStatement);
        if self.current() == SyntaxKind::KwReplace {
            self.bump();
        } else {
            self.assert_current(SyntaxKind::KwInsert);
            self.bump();
            if self.eat(SyntaxKind::KwOr) {
                self.parse_conflict_resolution();
            }
        }

        if !self.expect(SyntaxKind::KwInto) || !self.parse_single_table_statement_table() {
            self.finish_node();
            return;
        }

        if self.at(SyntaxKind::ParenOpen) {
            self.parse_column_name_list();
        }

        if self.eat(SyntaxKind::KwDefault) {
            self.expect(SyntaxKind::KwValues);
        } else {
            self.parse_query();
        }
        self.finish_node();
    }

    /// `UPDATE [OR resolution] SingleTableStatementTable SET assignment, ... [WhereClause]`
    pub(super) fn parse_update_statement(&mut self) {
        self.assert_current(SyntaxKind::KwUpdate);
        self.start_node(SyntaxKind::UpdateStatement);
        self.bump();
        if self.eat(SyntaxKind::KwOr) {
            self.parse_conflict_resolution();
        }

        if !self.parse_single_table_statement_table() || !self.expect(SyntaxKind::KwSet) {
            self.finish_node();
            return;
        }

        self.parse_comma_separated(|p| p.parse_update_assignment());

        if self.at(SyntaxKind::KwWhere) {
            self.parse_where_clause();
        }
        self.finish_node();
    }

    /// `ColumnName '=' expr`
    fn parse_update_assignment(&mut self) {
        if !self.at_set(NAMES, "<column name>") {
            self.error_missing();
            return;
        }
        self.start_node(SyntaxKind::UpdateAssignment);
        self.parse_name(SyntaxKind::ColumnName, "<column name>");
        if self.expect(SyntaxKind::Eq) {
            self.parse_expr();
        }
        self.finish_node();
    }

    /// `DELETE FROM SingleTableStatementTable [WhereClause]`
    pub(super) fn parse_delete_statement(&mut self) {
        self.assert_current(SyntaxKind::KwDelete);
        self.start_node(SyntaxKind::DeleteStatement);
        self.bump();

        if !self.expect(SyntaxKind::KwFrom) || !self.parse_single_table_statement_table() {
            self.finish_node();
            return;
        }

        if self.at(SyntaxKind::KwWhere) {
            self.parse_where_clause();
        }
        self.finish_node();
    }
}
