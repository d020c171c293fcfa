//! SELECT statements and their clauses.

use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{
    COMPOUND_OPERATORS, EXPR_NAMES, JOIN_OPERATOR_FIRST, NAMES, QUERY_FIRST,
    RESULT_COLUMN_FIRST, SELECT_FIRST, TABLE_OR_SUBQUERY_FIRST,
};

impl Parser<'_> {
    /// `SelectCore (CompoundOperator SelectCore)* [OrderClause] [LimitClause]`
    pub(super) fn parse_select_statement(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        self.start_node(SyntaxKind::SelectStatement);
        self.parse_select_core();

        while self.at_set(COMPOUND_OPERATORS, "<compound operator>") {
            self.start_node(SyntaxKind::CompoundOperator);
            let is_union = self.current() == SyntaxKind::KwUnion;
            self.bump();
            if is_union {
                self.eat(SyntaxKind::KwAll);
            }
            self.finish_node();

            if self.at_one_of(SELECT_FIRST) {
                self.parse_select_core();
            } else {
                self.error_missing();
                break;
            }
        }

        if self.at(SyntaxKind::KwOrder) {
            self.parse_order_clause();
        }
        if self.at(SyntaxKind::KwLimit) {
            self.parse_limit_clause();
        }
        self.finish_node();
        self.exit_recursion();
    }

    /// `SELECT [ALL|DISTINCT] ResultColumns [FromClause] [WhereClause] [GroupByClause
    /// [HavingClause]]` or `VALUES ValuesRow, ...`
    fn parse_select_core(&mut self) {
        self.start_node(SyntaxKind::SelectCore);

        if self.current() == SyntaxKind::KwValues {
            self.bump();
            self.parse_comma_separated(|p| p.parse_values_row());
            self.finish_node();
            return;
        }

        self.assert_current(SyntaxKind::KwSelect);
        self.bump();
        if !self.eat(SyntaxKind::KwDistinct) {
            self.eat(SyntaxKind::KwAll);
        }

        self.parse_result_columns();

        if self.at(SyntaxKind::KwFrom) {
            self.parse_from_clause();
        }
        if self.at(SyntaxKind::KwWhere) {
            self.parse_where_clause();
        }
        if self.at(SyntaxKind::KwGroup) {
            self.parse_group_by_clause();
            if self.at(SyntaxKind::KwHaving) {
                self.parse_having_clause();
            }
        }
        self.finish_node();
    }

    /// `'(' expr, ... ')'`
    fn parse_values_row(&mut self) {
        if !self.at(SyntaxKind::ParenOpen) {
            self.error_missing();
            return;
        }
        self.start_node(SyntaxKind::ValuesRow);
        self.bump();
        self.parse_comma_separated(|p| p.parse_expr());
        self.expect_closing_paren();
        self.finish_node();
    }

    fn parse_result_columns(&mut self) {
        if !self.at_set(RESULT_COLUMN_FIRST, "<result column>") {
            self.error_missing();
            return;
        }
        self.start_node(SyntaxKind::ResultColumns);
        self.parse_comma_separated(|p| p.parse_result_column());
        self.finish_node();
    }

    /// `*` | `table '.' '*'` | `expr [[AS] ColumnAliasName]`
    fn parse_result_column(&mut self) {
        if !self.at_set(RESULT_COLUMN_FIRST, "<result column>") {
            self.error_missing();
            return;
        }
        self.start_node(SyntaxKind::ResultColumn);

        if self.current() == SyntaxKind::Star {
            self.bump();
            self.finish_node();
            return;
        }

        let is_table_star = EXPR_NAMES.contains(self.current())
            && self.nth(1) == SyntaxKind::Dot
            && self.nth(2) == SyntaxKind::Star;
        if is_table_star {
            self.start_node(SyntaxKind::SelectedTableName);
            self.bump();
            self.finish_node();
            self.bump();
            self.bump();
            self.finish_node();
            return;
        }

        self.parse_expr();
        if self.eat(SyntaxKind::KwAs) {
            self.parse_name(SyntaxKind::ColumnAliasName, "<column alias name>");
        } else if self.at_set(NAMES, "<column alias name>") {
            self.parse_name(SyntaxKind::ColumnAliasName, "<column alias name>");
        }
        self.finish_node();
    }

    /// `FROM TableOrSubquery (JoinOperator TableOrSubquery [JoinConstraint])*`
    fn parse_from_clause(&mut self) {
        self.assert_current(SyntaxKind::KwFrom);
        self.start_node(SyntaxKind::FromClause);
        self.bump();
        self.parse_join_chain();
        self.finish_node();
    }

    fn parse_join_chain(&mut self) {
        if !self.parse_table_or_subquery() {
            return;
        }
        while self.at_set(JOIN_OPERATOR_FIRST, "<join operator>") {
            self.parse_join_operator();
            if !self.parse_table_or_subquery() {
                return;
            }
            if self.at(SyntaxKind::KwOn) || self.at(SyntaxKind::KwUsing) {
                self.parse_join_constraint();
            }
        }
    }

    /// `,` | `[NATURAL] [LEFT [OUTER] | INNER | CROSS] JOIN`
    fn parse_join_operator(&mut self) {
        self.start_node(SyntaxKind::JoinOperator);
        if self.eat(SyntaxKind::Comma) {
            self.finish_node();
            return;
        }
        self.eat(SyntaxKind::KwNatural);
        if self.eat(SyntaxKind::KwLeft) {
            self.eat(SyntaxKind::KwOuter);
        } else if !self.eat(SyntaxKind::KwInner) {
            self.eat(SyntaxKind::KwCross);
        }
        self.expect(SyntaxKind::KwJoin);
        self.finish_node();
    }

    /// `ON expr` | `USING '(' ColumnName, ... ')'`
    fn parse_join_constraint(&mut self) {
        self.start_node(SyntaxKind::JoinConstraint);
        if self.eat(SyntaxKind::KwOn) {
            self.parse_expr();
        } else {
            self.assert_current(SyntaxKind::KwUsing);
            self.bump();
            self.parse_column_name_list();
        }
        self.finish_node();
    }

    /// A named table, a parenthesized subquery, or a parenthesized join, each with an
    /// optional alias.
    fn parse_table_or_subquery(&mut self) -> bool {
        if !self.at_set(TABLE_OR_SUBQUERY_FIRST, "<table or subquery>") {
            self.error_missing();
            return false;
        }
        if !self.enter_recursion() {
            return false;
        }
        self.start_node(SyntaxKind::TableOrSubquery);

        if self.current() == SyntaxKind::ParenOpen {
            if QUERY_FIRST.contains(self.nth(1)) {
                self.start_node(SyntaxKind::SelectSubquery);
                self.bump();
                self.parse_query();
                self.expect_closing_paren();
                self.finish_node();
            } else {
                self.bump();
                self.parse_join_chain();
                self.expect_closing_paren();
            }
            self.parse_table_alias();
        } else {
            self.parse_database_prefix();
            self.parse_name(SyntaxKind::DefinedTableName, "<table name>");
            self.parse_table_alias();
            self.parse_indexed_by();
        }

        self.finish_node();
        self.exit_recursion();
        true
    }

    /// `[AS] TableAliasName`
    fn parse_table_alias(&mut self) {
        if self.eat(SyntaxKind::KwAs) {
            self.parse_name(SyntaxKind::TableAliasName, "<table alias name>");
        } else if self.at_set(NAMES, "<table alias name>") {
            self.parse_name(SyntaxKind::TableAliasName, "<table alias name>");
        }
    }

    pub(super) fn parse_where_clause(&mut self) {
        self.assert_current(SyntaxKind::KwWhere);
        self.start_node(SyntaxKind::WhereClause);
        self.bump();
        self.parse_expr();
        self.finish_node();
    }

    /// `GROUP BY expr, ...`
    fn parse_group_by_clause(&mut self) {
        self.assert_current(SyntaxKind::KwGroup);
        self.start_node(SyntaxKind::GroupByClause);
        self.bump();
        if self.expect(SyntaxKind::KwBy) {
            self.parse_comma_separated(|p| p.parse_expr());
        }
        self.finish_node();
    }

    fn parse_having_clause(&mut self) {
        self.assert_current(SyntaxKind::KwHaving);
        self.start_node(SyntaxKind::HavingClause);
        self.bump();
        self.parse_expr();
        self.finish_node();
    }

    /// `ORDER BY OrderingTerm, ...`
    fn parse_order_clause(&mut self) {
        self.assert_current(SyntaxKind::KwOrder);
        self.start_node(SyntaxKind::OrderClause);
        self.bump();
        if self.expect(SyntaxKind::KwBy) {
            self.parse_comma_separated(|p| p.parse_ordering_term());
        }
        self.finish_node();
    }

    /// `expr [ASC|DESC]`; a trailing `COLLATE name` is part of the expression.
    fn parse_ordering_term(&mut self) {
        self.start_node(SyntaxKind::OrderingTerm);
        self.parse_expr();
        if !self.eat(SyntaxKind::KwAsc) {
            self.eat(SyntaxKind::KwDesc);
        }
        self.finish_node();
    }

    /// `LIMIT expr [(OFFSET | ',') expr]`
    fn parse_limit_clause(&mut self) {
        self.assert_current(SyntaxKind::KwLimit);
        self.start_node(SyntaxKind::LimitClause);
        self.bump();
        self.parse_expr();
        if self.eat(SyntaxKind::KwOffset) || self.eat(SyntaxKind::Comma) {
            self.parse_expr();
        }
        self.finish_node();
    }
}
