use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::TokenSet;
use crate::parser::cst::token_sets::NAMES;

impl Parser<'_> {
    /// Wraps one name token in a `kind` node, or reports `label` as missing.
    pub(super) fn parse_name(&mut self, kind: SyntaxKind, label: &'static str) -> bool {
        self.parse_name_from(NAMES, kind, label)
    }

    pub(super) fn parse_name_from(
        &mut self,
        set: TokenSet,
        kind: SyntaxKind,
        label: &'static str,
    ) -> bool {
        if !self.at_set(set, label) {
            self.error_missing();
            return false;
        }
        self.start_node(kind);
        self.bump();
        self.finish_node();
        true
    }

    /// Optional `DatabaseName '.'` prefix, recognized by the dot after the first name.
    /// `TEMP` is accepted as a database name.
    pub(super) fn parse_database_prefix(&mut self) -> bool {
        let current = self.current();
        let is_database = (NAMES.contains(current) || current == SyntaxKind::KwTemp)
            && self.nth(1) == SyntaxKind::Dot;
        if !is_database {
            return false;
        }
        self.start_node(SyntaxKind::DatabaseName);
        self.bump();
        self.finish_node();
        self.assert_current(SyntaxKind::Dot);
        self.bump();
        true
    }

    /// `[DatabaseName '.'] DefinedTableName [INDEXED BY IndexName | NOT INDEXED]`
    pub(super) fn parse_single_table_statement_table(&mut self) -> bool {
        let first = NAMES.union(TokenSet::new(&[SyntaxKind::KwTemp]));
        if !self.at_set(first, "<single table statement table>") {
            self.error_missing();
            return false;
        }

        self.start_node(SyntaxKind::SingleTableStatementTable);
        let qualified = self.parse_database_prefix();
        if !self.parse_name(SyntaxKind::DefinedTableName, "<table name>") {
            self.finish_node();
            return false;
        }
        if !qualified {
            self.expect_token(SyntaxKind::Dot);
        }
        self.parse_indexed_by();
        self.finish_node();
        true
    }

    /// `INDEXED BY IndexName | NOT INDEXED`, both optional.
    pub(super) fn parse_indexed_by(&mut self) {
        if self.eat(SyntaxKind::KwIndexed) {
            if self.expect(SyntaxKind::KwBy) {
                self.parse_name(SyntaxKind::IndexName, "<index name>");
            }
            return;
        }
        if self.at(SyntaxKind::KwNot) && self.nth(1) == SyntaxKind::KwIndexed {
            self.bump();
            self.bump();
        }
    }

    /// `'(' ColumnName (',' ColumnName)* ')'`
    pub(super) fn parse_column_name_list(&mut self) -> bool {
        if !self.expect(SyntaxKind::ParenOpen) {
            return false;
        }
        self.parse_comma_separated(|p| {
            p.parse_name(SyntaxKind::ColumnName, "<column name>");
        });
        self.expect_closing_paren()
    }
}
