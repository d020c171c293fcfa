//! Schema statements: CREATE TABLE, ALTER TABLE, PRAGMA.

use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{
    COLUMN_CONSTRAINT_FIRST, LITERAL_VALUES, NAMES, PRAGMA_VALUE_TOKENS, SIGNED_NUMBER_FIRST,
    TABLE_CONSTRAINT_FIRST,
};

impl Parser<'_> {
    /// `CREATE [TEMP|TEMPORARY] TABLE [IF NOT EXISTS] [DatabaseName '.'] TableDefinitionName
    /// ('(' (ColumnDefinition | TableConstraint), ... ')' [WITHOUT ROWID] | AS query)`
    pub(super) fn parse_create_table_statement(&mut self) {
        self.assert_current(SyntaxKind::KwCreate);
        self.start_node(SyntaxKind::CreateTableStatement);
        self.bump();

        if !self.eat(SyntaxKind::KwTemp) {
            self.eat(SyntaxKind::KwTemporary);
        }
        if !self.expect(SyntaxKind::KwTable) {
            self.finish_node();
            return;
        }
        if self.eat(SyntaxKind::KwIf) {
            self.expect(SyntaxKind::KwNot);
            self.expect(SyntaxKind::KwExists);
        }

        self.parse_database_prefix();
        if !self.parse_name(SyntaxKind::TableDefinitionName, "<table definition name>") {
            self.finish_node();
            return;
        }

        if self.eat(SyntaxKind::KwAs) {
            self.parse_query();
        } else if self.eat(SyntaxKind::ParenOpen) {
            self.parse_comma_separated(|p| p.parse_table_element());
            if self.expect_closing_paren() && self.eat(SyntaxKind::KwWithout) {
                self.parse_rowid();
            }
        } else {
            self.error_missing();
        }
        self.finish_node();
    }

    /// `WITHOUT` is only followed by the contextual word `ROWID`.
    fn parse_rowid(&mut self) {
        if self.at_word("rowid", "ROWID") {
            self.bump();
        } else if self.current() == SyntaxKind::Ident {
            self.error_and_bump();
        } else {
            self.error_missing();
        }
    }

    fn parse_table_element(&mut self) {
        if TABLE_CONSTRAINT_FIRST.contains(self.current()) {
            self.parse_table_constraint();
        } else {
            self.expect_label("<table constraint>");
            self.parse_column_definition();
        }
    }

    /// `ColumnDefinitionName [TypeName] ColumnConstraint*`
    pub(super) fn parse_column_definition(&mut self) {
        if !self.at_set(NAMES, "<column definition name>") {
            self.error_missing();
            return;
        }
        self.start_node(SyntaxKind::ColumnDefinition);
        self.parse_name(SyntaxKind::ColumnDefinitionName, "<column definition name>");

        if self.at_set(NAMES, "<type name>") {
            self.parse_type_name();
        }
        while self.at_set(COLUMN_CONSTRAINT_FIRST, "<column constraint>") {
            self.parse_column_constraint();
        }
        self.finish_node();
    }

    /// `name+ ['(' SignedNumber [',' SignedNumber] ')']`
    pub(super) fn parse_type_name(&mut self) {
        if !self.at_set(NAMES, "<type name>") {
            self.error_missing();
            return;
        }
        self.start_node(SyntaxKind::TypeName);
        while NAMES.contains(self.current()) {
            self.bump();
        }
        if self.eat(SyntaxKind::ParenOpen) {
            self.parse_signed_number();
            if self.eat(SyntaxKind::Comma) {
                self.parse_signed_number();
            }
            self.expect_closing_paren();
        }
        self.finish_node();
    }

    /// `['+'|'-'] <number>`
    fn parse_signed_number(&mut self) {
        if !self.at_set(SIGNED_NUMBER_FIRST, "<signed number>") {
            self.error_missing();
            return;
        }
        self.start_node(SyntaxKind::SignedNumber);
        if !self.eat(SyntaxKind::Plus) {
            self.eat(SyntaxKind::Minus);
        }
        self.expect(SyntaxKind::NumericLiteral);
        self.finish_node();
    }

    /// `[CONSTRAINT name]` followed by one constraint body. Caller checked the FIRST set.
    fn parse_column_constraint(&mut self) {
        self.start_node(SyntaxKind::ColumnConstraint);
        self.parse_constraint_name();

        match self.current() {
            SyntaxKind::KwPrimary => {
                self.bump();
                self.expect(SyntaxKind::KwKey);
                if !self.eat(SyntaxKind::KwAsc) {
                    self.eat(SyntaxKind::KwDesc);
                }
                self.parse_conflict_clause();
                self.eat(SyntaxKind::KwAutoincrement);
            }
            SyntaxKind::KwNot => {
                self.bump();
                self.expect(SyntaxKind::KwNull);
                self.parse_conflict_clause();
            }
            SyntaxKind::KwNull | SyntaxKind::KwUnique => {
                self.bump();
                self.parse_conflict_clause();
            }
            SyntaxKind::KwCheck => self.parse_check_body(),
            SyntaxKind::KwDefault => {
                self.bump();
                self.parse_default_value();
            }
            SyntaxKind::KwCollate => {
                self.bump();
                self.parse_name(SyntaxKind::CollationName, "<collation name>");
            }
            SyntaxKind::KwReferences => self.parse_foreign_key_clause(),
            _ => {
                self.expect_label("<column constraint>");
                self.error_missing();
            }
        }
        self.finish_node();
    }

    fn parse_constraint_name(&mut self) {
        if self.eat(SyntaxKind::KwConstraint) {
            self.parse_name(SyntaxKind::ConstraintName, "<constraint name>");
        }
    }

    /// `CHECK '(' expr ')'`
    fn parse_check_body(&mut self) {
        self.assert_current(SyntaxKind::KwCheck);
        self.bump();
        if self.expect(SyntaxKind::ParenOpen) {
            self.parse_expr();
            self.expect_closing_paren();
        }
    }

    /// `SignedNumber | literal | '(' expr ')'`
    fn parse_default_value(&mut self) {
        if self.eat(SyntaxKind::ParenOpen) {
            self.parse_expr();
            self.expect_closing_paren();
        } else if self.at_set(SIGNED_NUMBER_FIRST, "<signed number>") {
            self.parse_signed_number();
        } else if self.at_set(LITERAL_VALUES, "<literal>") {
            self.start_node(SyntaxKind::LiteralExpression);
            self.bump();
            self.finish_node();
        } else {
            self.error_missing();
        }
    }

    /// `[ON CONFLICT resolution]`
    fn parse_conflict_clause(&mut self) {
        if !(self.at(SyntaxKind::KwOn) && self.nth(1) == SyntaxKind::KwConflict) {
            return;
        }
        self.start_node(SyntaxKind::ConflictClause);
        self.bump();
        self.bump();
        self.parse_conflict_resolution();
        self.finish_node();
    }

    /// `[CONSTRAINT name]` then `PRIMARY KEY (..)`, `UNIQUE (..)`, `CHECK (..)` or
    /// `FOREIGN KEY (..) ForeignKeyClause`.
    fn parse_table_constraint(&mut self) {
        self.start_node(SyntaxKind::TableConstraint);
        self.parse_constraint_name();

        match self.current() {
            SyntaxKind::KwPrimary => {
                self.bump();
                if self.expect(SyntaxKind::KwKey) {
                    self.parse_indexed_column_list();
                    self.parse_conflict_clause();
                }
            }
            SyntaxKind::KwUnique => {
                self.bump();
                self.parse_indexed_column_list();
                self.parse_conflict_clause();
            }
            SyntaxKind::KwCheck => self.parse_check_body(),
            SyntaxKind::KwForeign => {
                self.bump();
                if self.expect(SyntaxKind::KwKey) && self.parse_column_name_list() {
                    if self.at(SyntaxKind::KwReferences) {
                        self.parse_foreign_key_clause();
                    } else {
                        self.error_missing();
                    }
                }
            }
            _ => {
                self.expect_label("<table constraint>");
                self.error_missing();
            }
        }
        self.finish_node();
    }

    /// `'(' IndexedColumn, ... ')'` where `IndexedColumn ::= ColumnName [COLLATE name]
    /// [ASC|DESC]`
    fn parse_indexed_column_list(&mut self) {
        if !self.expect(SyntaxKind::ParenOpen) {
            return;
        }
        self.parse_comma_separated(|p| p.parse_indexed_column());
        self.expect_closing_paren();
    }

    fn parse_indexed_column(&mut self) {
        if !self.at_set(NAMES, "<column name>") {
            self.error_missing();
            return;
        }
        self.start_node(SyntaxKind::IndexedColumn);
        self.parse_name(SyntaxKind::ColumnName, "<column name>");
        if self.eat(SyntaxKind::KwCollate) {
            self.parse_name(SyntaxKind::CollationName, "<collation name>");
        }
        if !self.eat(SyntaxKind::KwAsc) {
            self.eat(SyntaxKind::KwDesc);
        }
        self.finish_node();
    }

    /// `REFERENCES ForeignTable ['(' ColumnName, ... ')'] (ON (DELETE|UPDATE) action |
    /// MATCH name)* [[NOT] DEFERRABLE [INITIALLY (DEFERRED|IMMEDIATE)]]`
    fn parse_foreign_key_clause(&mut self) {
        self.assert_current(SyntaxKind::KwReferences);
        self.start_node(SyntaxKind::ForeignKeyClause);
        self.bump();

        if !self.parse_name(SyntaxKind::ForeignTable, "<foreign table>") {
            self.finish_node();
            return;
        }
        if self.at(SyntaxKind::ParenOpen) {
            self.parse_column_name_list();
        }

        loop {
            if self.at(SyntaxKind::KwOn) && self.nth(1) != SyntaxKind::KwConflict {
                self.bump();
                if self.at(SyntaxKind::KwDelete) || self.at(SyntaxKind::KwUpdate) {
                    self.bump();
                    self.parse_foreign_key_action();
                } else {
                    self.error_missing();
                }
            } else if self.eat(SyntaxKind::KwMatch) {
                if self.at_set(NAMES, "<name>") {
                    self.bump();
                } else {
                    self.error_missing();
                }
            } else {
                break;
            }
        }

        let deferrable = self.at(SyntaxKind::KwDeferrable)
            || (self.at(SyntaxKind::KwNot) && self.nth(1) == SyntaxKind::KwDeferrable);
        if deferrable {
            self.eat(SyntaxKind::KwNot);
            self.bump();
            if self.eat(SyntaxKind::KwInitially) && !self.eat(SyntaxKind::KwDeferred) {
                self.expect(SyntaxKind::KwImmediate);
            }
        }
        self.finish_node();
    }

    /// `SET NULL | SET DEFAULT | CASCADE | RESTRICT | NO ACTION`
    fn parse_foreign_key_action(&mut self) {
        if self.eat(SyntaxKind::KwSet) {
            if !self.eat(SyntaxKind::KwNull) {
                self.expect(SyntaxKind::KwDefault);
            }
        } else if self.eat(SyntaxKind::KwNo) {
            self.expect(SyntaxKind::KwAction);
        } else if !self.eat(SyntaxKind::KwCascade) && !self.eat(SyntaxKind::KwRestrict) {
            self.error_missing();
        }
    }

    /// `ALTER TABLE SingleTableStatementTable (RENAME TO TableDefinitionName | RENAME
    /// [COLUMN] ColumnName TO ColumnDefinitionName | ADD [COLUMN] ColumnDefinition |
    /// DROP [COLUMN] ColumnName)`
    pub(super) fn parse_alter_table_statement(&mut self) {
        self.assert_current(SyntaxKind::KwAlter);
        self.start_node(SyntaxKind::AlterTableStatement);
        self.bump();

        if !self.expect(SyntaxKind::KwTable) || !self.parse_single_table_statement_table() {
            self.finish_node();
            return;
        }

        if self.eat(SyntaxKind::KwRename) {
            if self.eat(SyntaxKind::KwTo) {
                self.parse_name(SyntaxKind::TableDefinitionName, "<table definition name>");
            } else {
                self.eat(SyntaxKind::KwColumn);
                if self.parse_name(SyntaxKind::ColumnName, "<column name>")
                    && self.expect(SyntaxKind::KwTo)
                {
                    self.parse_name(SyntaxKind::ColumnDefinitionName, "<column definition name>");
                }
            }
        } else if self.eat(SyntaxKind::KwAdd) {
            self.eat(SyntaxKind::KwColumn);
            self.parse_column_definition();
        } else if self.eat(SyntaxKind::KwDrop) {
            self.eat(SyntaxKind::KwColumn);
            self.parse_name(SyntaxKind::ColumnName, "<column name>");
        } else {
            self.error_missing();
        }
        self.finish_node();
    }

    /// `PRAGMA [DatabaseName '.'] PragmaName ['=' PragmaValue | '(' PragmaValue ')']`
    pub(super) fn parse_pragma_statement(&mut self) {
        self.assert_current(SyntaxKind::KwPragma);
        self.start_node(SyntaxKind::PragmaStatement);
        self.bump();

        self.parse_database_prefix();
        if !self.parse_name(SyntaxKind::PragmaName, "<pragma name>") {
            self.finish_node();
            return;
        }

        if self.eat(SyntaxKind::Eq) {
            self.parse_pragma_value();
        } else if self.eat(SyntaxKind::ParenOpen) {
            self.parse_pragma_value();
            self.expect_closing_paren();
        }
        self.finish_node();
    }

    /// Signed number, string, name, or a boolean/journal-mode keyword.
    fn parse_pragma_value(&mut self) {
        if !self.at_set(SIGNED_NUMBER_FIRST.union(PRAGMA_VALUE_TOKENS), "<pragma value>") {
            self.error_missing();
            return;
        }
        self.start_node(SyntaxKind::PragmaValue);
        if SIGNED_NUMBER_FIRST.contains(self.current()) {
            self.parse_signed_number();
        } else {
            self.bump();
        }
        self.finish_node();
    }
}
