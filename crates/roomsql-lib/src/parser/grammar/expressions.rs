//! Expressions, parsed by precedence climbing.
//!
//! | prec | operators                                                   | node                  |
//! |------|-------------------------------------------------------------|-----------------------|
//! | 1    | `OR`                                                        | `OrExpression`        |
//! | 2    | `AND`                                                       | `AndExpression`       |
//! | 3    | `= == != <> IS [NOT]`                                       | `EquivalenceExpression` |
//! | 3    | `[NOT] LIKE/GLOB/REGEXP/MATCH`, `[NOT] BETWEEN`, `[NOT] IN` | special shapes        |
//! | 3    | `ISNULL`, `NOTNULL`, `NOT NULL`                             | `IsNullExpression`    |
//! | 4    | `< <= > >=`                                                 | `ComparisonExpression` |
//! | 5    | `<< >> & \|`                                                | `BitExpression`       |
//! | 6    | `\|\|`                                                      | `ConcatExpression`    |
//! | 7    | `+ -`                                                       | `AddExpression`       |
//! | 8    | `* / %`                                                     | `MulExpression`       |
//! | 9    | prefix `- + ~ NOT`                                          | `UnaryExpression`     |
//! | 10   | postfix `COLLATE name`                                      | `CollateExpression`   |
//!
//! All binary tiers are left-associative: the right operand is parsed one tier higher.

use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{
    BINARY_OPERATOR_FIRST, BIND_PARAMETERS, EXPR_FIRST, EXPR_NAMES, FUNCTION_KEYWORDS,
    LIKE_OPERATORS, LITERAL_VALUES, NAMES, NEGATABLE_OPERATORS, QUERY_FIRST, UNARY_OPERATORS,
};

const PREC_LOWEST: u8 = 1;
const PREC_EQUIVALENCE: u8 = 3;
const PREC_COMPARISON: u8 = 4;
const PREC_UNARY: u8 = 9;

impl Parser<'_> {
    pub(crate) fn parse_expr(&mut self) {
        self.parse_expr_bp(PREC_LOWEST);
    }

    fn parse_expr_bp(&mut self, min_prec: u8) {
        if !self.enter_recursion() {
            return;
        }
        let checkpoint = self.checkpoint();
        self.parse_prefix_expr();

        while let Some((prec, kind)) = self.infix_operator() {
            if prec < min_prec {
                break;
            }
            self.start_node_at(checkpoint, kind);
            match kind {
                SyntaxKind::LikeExpression => self.parse_like_rest(),
                SyntaxKind::BetweenExpression => self.parse_between_rest(),
                SyntaxKind::InExpression => self.parse_in_rest(),
                SyntaxKind::IsNullExpression => self.parse_is_null_rest(),
                SyntaxKind::CollateExpression => {
                    self.bump();
                    self.parse_name(SyntaxKind::CollationName, "<collation name>");
                }
                _ => {
                    let is_is = self.current() == SyntaxKind::KwIs;
                    self.bump();
                    if is_is {
                        self.eat(SyntaxKind::KwNot);
                    }
                    self.parse_expr_bp(prec + 1);
                }
            }
            self.finish_node();
        }

        self.exit_recursion();
    }

    /// Precedence and node kind of the operator at the current position, if any.
    fn infix_operator(&mut self) -> Option<(u8, SyntaxKind)> {
        if !self.at_set(BINARY_OPERATOR_FIRST, "<operator>") {
            return None;
        }
        let current = self.current();
        let op = match current {
            SyntaxKind::KwOr => (1, SyntaxKind::OrExpression),
            SyntaxKind::KwAnd => (2, SyntaxKind::AndExpression),
            SyntaxKind::Eq
            | SyntaxKind::EqEq
            | SyntaxKind::NotEq
            | SyntaxKind::LtGt
            | SyntaxKind::KwIs => (PREC_EQUIVALENCE, SyntaxKind::EquivalenceExpression),
            SyntaxKind::KwBetween => (PREC_EQUIVALENCE, SyntaxKind::BetweenExpression),
            SyntaxKind::KwIn => (PREC_EQUIVALENCE, SyntaxKind::InExpression),
            SyntaxKind::KwIsnull | SyntaxKind::KwNotnull => {
                (PREC_EQUIVALENCE, SyntaxKind::IsNullExpression)
            }
            SyntaxKind::KwNot => {
                let next = self.nth(1);
                if !NEGATABLE_OPERATORS.contains(next) {
                    return None;
                }
                (PREC_EQUIVALENCE, negated_operator_node(next))
            }
            SyntaxKind::Lt | SyntaxKind::LtEq | SyntaxKind::Gt | SyntaxKind::GtEq => {
                (PREC_COMPARISON, SyntaxKind::ComparisonExpression)
            }
            SyntaxKind::ShiftLeft
            | SyntaxKind::ShiftRight
            | SyntaxKind::Ampersand
            | SyntaxKind::Pipe => (5, SyntaxKind::BitExpression),
            SyntaxKind::Concat => (6, SyntaxKind::ConcatExpression),
            SyntaxKind::Plus | SyntaxKind::Minus => (7, SyntaxKind::AddExpression),
            SyntaxKind::Star | SyntaxKind::Slash | SyntaxKind::Percent => {
                (8, SyntaxKind::MulExpression)
            }
            SyntaxKind::KwCollate => (10, SyntaxKind::CollateExpression),
            kind if LIKE_OPERATORS.contains(kind) => {
                (PREC_EQUIVALENCE, SyntaxKind::LikeExpression)
            }
            _ => return None,
        };
        Some(op)
    }

    /// `[NOT] LIKE expr [ESCAPE expr]`
    fn parse_like_rest(&mut self) {
        self.eat(SyntaxKind::KwNot);
        self.bump();
        self.parse_expr_bp(PREC_COMPARISON);
        if self.eat(SyntaxKind::KwEscape) {
            self.parse_expr_bp(PREC_COMPARISON);
        }
    }

    /// `[NOT] BETWEEN expr AND expr`; the bounds bind tighter than `AND`.
    fn parse_between_rest(&mut self) {
        self.eat(SyntaxKind::KwNot);
        self.bump();
        self.parse_expr_bp(PREC_COMPARISON);
        if self.expect(SyntaxKind::KwAnd) {
            self.parse_expr_bp(PREC_COMPARISON);
        }
    }

    /// `[NOT] IN ('(' [query | expr, ...] ')' | [DatabaseName '.'] DefinedTableName)`
    fn parse_in_rest(&mut self) {
        self.eat(SyntaxKind::KwNot);
        self.bump();

        if self.eat(SyntaxKind::ParenOpen) {
            if QUERY_FIRST.contains(self.current()) {
                self.parse_query();
            } else if !self.at(SyntaxKind::ParenClose) {
                self.parse_comma_separated(|p| p.parse_expr());
            }
            self.expect_closing_paren();
            return;
        }

        if self.at_set(NAMES, "<table name>") {
            self.parse_database_prefix();
            self.parse_name(SyntaxKind::DefinedTableName, "<table name>");
        } else {
            self.error_missing();
        }
    }

    /// `ISNULL` | `NOTNULL` | `NOT NULL`
    fn parse_is_null_rest(&mut self) {
        if self.eat(SyntaxKind::KwNot) {
            self.expect(SyntaxKind::KwNull);
        } else {
            self.bump();
        }
    }

    fn parse_prefix_expr(&mut self) {
        let current = self.current();
        if current == SyntaxKind::KwNot && self.nth(1) == SyntaxKind::KwExists {
            self.parse_exists_expr();
            return;
        }
        if UNARY_OPERATORS.contains(current) {
            self.start_node(SyntaxKind::UnaryExpression);
            self.bump();
            self.parse_expr_bp(PREC_UNARY);
            self.finish_node();
            return;
        }
        self.parse_primary_expr();
    }

    fn parse_primary_expr(&mut self) {
        if !self.at_set(EXPR_FIRST, "<expression>") {
            if self.current() == SyntaxKind::BadCharacter {
                self.error_and_bump();
            } else {
                self.error_missing();
            }
            return;
        }

        let current = self.current();
        match current {
            SyntaxKind::ParenOpen if QUERY_FIRST.contains(self.nth(1)) => self.parse_exists_expr(),
            SyntaxKind::ParenOpen => self.parse_paren_expr(),
            SyntaxKind::KwExists => self.parse_exists_expr(),
            SyntaxKind::KwCase => self.parse_case_expr(),
            SyntaxKind::KwCast => self.parse_cast_expr(),
            kind if LITERAL_VALUES.contains(kind) => {
                self.start_node(SyntaxKind::LiteralExpression);
                self.bump();
                self.finish_node();
            }
            kind if BIND_PARAMETERS.contains(kind) => {
                self.start_node(SyntaxKind::LiteralExpression);
                self.start_node(SyntaxKind::BindParameter);
                self.bump();
                self.finish_node();
                self.finish_node();
            }
            kind if FUNCTION_KEYWORDS.contains(kind) => self.parse_function_call(),
            _ if self.nth(1) == SyntaxKind::ParenOpen => self.parse_function_call(),
            _ => self.parse_column_ref(),
        }
    }

    /// `[[DatabaseName '.'] SelectedTableName '.'] ColumnName`
    fn parse_column_ref(&mut self) {
        self.start_node(SyntaxKind::ColumnRefExpression);

        let parts = match (self.nth(1), self.nth(3)) {
            (SyntaxKind::Dot, SyntaxKind::Dot) => 3,
            (SyntaxKind::Dot, _) => 2,
            _ => 1,
        };
        if parts == 3 {
            self.start_node(SyntaxKind::DatabaseName);
            self.bump();
            self.finish_node();
            self.bump();
        }
        if parts >= 2 {
            self.parse_name_from(EXPR_NAMES, SyntaxKind::SelectedTableName, "<table name>");
            self.expect(SyntaxKind::Dot);
        }
        self.parse_name_from(EXPR_NAMES, SyntaxKind::ColumnName, "<column name>");
        if parts == 1 {
            self.expect_token(SyntaxKind::ParenOpen);
            self.expect_token(SyntaxKind::Dot);
        }

        self.finish_node();
    }

    /// `FunctionName '(' [DISTINCT] [expr, ... | '*'] ')'`
    fn parse_function_call(&mut self) {
        self.start_node(SyntaxKind::FunctionCallExpression);
        self.start_node(SyntaxKind::FunctionName);
        self.bump();
        self.finish_node();

        if !self.expect(SyntaxKind::ParenOpen) {
            self.finish_node();
            return;
        }
        if !self.eat(SyntaxKind::Star) && !self.at(SyntaxKind::ParenClose) {
            self.eat(SyntaxKind::KwDistinct);
            self.parse_comma_separated(|p| p.parse_expr());
        }
        self.expect_closing_paren();
        self.finish_node();
    }

    /// `'(' expr ')'` or a row value `'(' expr, expr, ... ')'`
    fn parse_paren_expr(&mut self) {
        self.assert_current(SyntaxKind::ParenOpen);
        self.start_node(SyntaxKind::ParenExpression);
        self.bump();
        self.parse_comma_separated(|p| p.parse_expr());
        self.expect_closing_paren();
        self.finish_node();
    }

    /// `[[NOT] EXISTS] '(' query ')'`
    fn parse_exists_expr(&mut self) {
        self.start_node(SyntaxKind::ExistsExpression);
        self.eat(SyntaxKind::KwNot);
        self.eat(SyntaxKind::KwExists);
        if self.expect(SyntaxKind::ParenOpen) {
            self.parse_query();
            self.expect_closing_paren();
        }
        self.finish_node();
    }

    /// `CASE [expr] (WHEN expr THEN expr)+ [ELSE expr] END`
    fn parse_case_expr(&mut self) {
        self.assert_current(SyntaxKind::KwCase);
        self.start_node(SyntaxKind::CaseExpression);
        self.bump();

        if !self.at(SyntaxKind::KwWhen) {
            if self.at_set(EXPR_FIRST, "<expression>") {
                self.parse_expr();
                if !self.at(SyntaxKind::KwWhen) {
                    self.error_missing();
                }
            } else {
                self.error_missing();
            }
        }

        while self.eat(SyntaxKind::KwWhen) {
            self.parse_expr();
            if self.expect(SyntaxKind::KwThen) {
                self.parse_expr();
            }
        }
        if self.eat(SyntaxKind::KwElse) {
            self.parse_expr();
        }
        self.expect(SyntaxKind::KwEnd);
        self.finish_node();
    }

    /// `CAST '(' expr AS TypeName ')'`
    fn parse_cast_expr(&mut self) {
        self.assert_current(SyntaxKind::KwCast);
        self.start_node(SyntaxKind::CastExpression);
        self.bump();

        if self.expect(SyntaxKind::ParenOpen) {
            self.parse_expr();
            if self.expect(SyntaxKind::KwAs) {
                self.parse_type_name();
            }
            self.expect_closing_paren();
        }
        self.finish_node();
    }
}

fn negated_operator_node(operator: SyntaxKind) -> SyntaxKind {
    match operator {
        SyntaxKind::KwBetween => SyntaxKind::BetweenExpression,
        SyntaxKind::KwIn => SyntaxKind::InExpression,
        SyntaxKind::KwNull => SyntaxKind::IsNullExpression,
        _ => SyntaxKind::LikeExpression,
    }
}
