//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors. Accessors return
//! `None` where recovery left a part missing; the tree itself is never rejected.

use std::borrow::Cow;

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};
use super::quoting::unquote;

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

/// A node holding a single identifier-bearing token.
macro_rules! name_node {
    ($name:ident) => {
        ast_node!($name, $name);

        impl $name {
            pub fn token(&self) -> Option<SyntaxToken> {
                first_token(&self.0, |kind| kind.is_name_token() || kind == SyntaxKind::KwTemp)
            }

            /// Decoded name: quotes stripped, doubled delimiters collapsed.
            pub fn name(&self) -> Option<String> {
                self.token().map(|t| logical_name(&t))
            }
        }
    };
}

ast_node!(File, File);
ast_node!(WithClauseStatement, WithClauseStatement);
ast_node!(WithClause, WithClause);
ast_node!(WithClauseTable, WithClauseTable);
ast_node!(SelectStatement, SelectStatement);
ast_node!(SelectCore, SelectCore);
ast_node!(ValuesRow, ValuesRow);
ast_node!(CompoundOperator, CompoundOperator);
ast_node!(ResultColumns, ResultColumns);
ast_node!(ResultColumn, ResultColumn);
ast_node!(FromClause, FromClause);
ast_node!(TableOrSubquery, TableOrSubquery);
ast_node!(SelectSubquery, SelectSubquery);
ast_node!(JoinOperator, JoinOperator);
ast_node!(JoinConstraint, JoinConstraint);
ast_node!(WhereClause, WhereClause);
ast_node!(GroupByClause, GroupByClause);
ast_node!(HavingClause, HavingClause);
ast_node!(OrderClause, OrderClause);
ast_node!(OrderingTerm, OrderingTerm);
ast_node!(LimitClause, LimitClause);
ast_node!(InsertStatement, InsertStatement);
ast_node!(UpdateStatement, UpdateStatement);
ast_node!(UpdateAssignment, UpdateAssignment);
ast_node!(DeleteStatement, DeleteStatement);
ast_node!(SingleTableStatementTable, SingleTableStatementTable);
ast_node!(CreateTableStatement, CreateTableStatement);
ast_node!(ColumnDefinition, ColumnDefinition);
ast_node!(TypeName, TypeName);
ast_node!(SignedNumber, SignedNumber);
ast_node!(ColumnConstraint, ColumnConstraint);
ast_node!(TableConstraint, TableConstraint);
ast_node!(IndexedColumn, IndexedColumn);
ast_node!(ConflictClause, ConflictClause);
ast_node!(ForeignKeyClause, ForeignKeyClause);
ast_node!(AlterTableStatement, AlterTableStatement);
ast_node!(PragmaStatement, PragmaStatement);
ast_node!(PragmaValue, PragmaValue);
ast_node!(BindParameter, BindParameter);

name_node!(TableDefinitionName);
name_node!(ColumnDefinitionName);
name_node!(ColumnAliasName);
name_node!(TableAliasName);
name_node!(IndexName);
name_node!(DefinedTableName);
name_node!(DatabaseName);
name_node!(SelectedTableName);
name_node!(ColumnName);
name_node!(ConstraintName);
name_node!(CollationName);
name_node!(ForeignTable);
name_node!(PragmaName);

ast_node!(OrExpression, OrExpression);
ast_node!(AndExpression, AndExpression);
ast_node!(EquivalenceExpression, EquivalenceExpression);
ast_node!(LikeExpression, LikeExpression);
ast_node!(BetweenExpression, BetweenExpression);
ast_node!(InExpression, InExpression);
ast_node!(IsNullExpression, IsNullExpression);
ast_node!(ComparisonExpression, ComparisonExpression);
ast_node!(BitExpression, BitExpression);
ast_node!(ConcatExpression, ConcatExpression);
ast_node!(AddExpression, AddExpression);
ast_node!(MulExpression, MulExpression);
ast_node!(UnaryExpression, UnaryExpression);
ast_node!(CollateExpression, CollateExpression);
ast_node!(LiteralExpression, LiteralExpression);
ast_node!(ColumnRefExpression, ColumnRefExpression);
ast_node!(FunctionCallExpression, FunctionCallExpression);
ast_node!(ParenExpression, ParenExpression);
ast_node!(CaseExpression, CaseExpression);
ast_node!(ExistsExpression, ExistsExpression);
ast_node!(CastExpression, CastExpression);
ast_node!(FunctionName, FunctionName);

/// Logical name of an identifier-bearing token: `` `some``table` `` is ``some`table``.
pub fn logical_name(token: &SyntaxToken) -> String {
    match unquote(token.text()) {
        Cow::Borrowed(text) => text.to_string(),
        Cow::Owned(text) => text,
    }
}

fn first_token(node: &SyntaxNode, pred: impl Fn(SyntaxKind) -> bool) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| pred(t.kind()))
}

fn has_token(node: &SyntaxNode, kind: SyntaxKind) -> bool {
    first_token(node, |k| k == kind).is_some()
}

/// Top-level statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Statement {
    With(WithClauseStatement),
    Select(SelectStatement),
    Insert(InsertStatement),
    Update(UpdateStatement),
    Delete(DeleteStatement),
    CreateTable(CreateTableStatement),
    AlterTable(AlterTableStatement),
    Pragma(PragmaStatement),
}

impl Statement {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::WithClauseStatement => WithClauseStatement::cast(node).map(Self::With),
            SyntaxKind::SelectStatement => SelectStatement::cast(node).map(Self::Select),
            SyntaxKind::InsertStatement => InsertStatement::cast(node).map(Self::Insert),
            SyntaxKind::UpdateStatement => UpdateStatement::cast(node).map(Self::Update),
            SyntaxKind::DeleteStatement => DeleteStatement::cast(node).map(Self::Delete),
            SyntaxKind::CreateTableStatement => {
                CreateTableStatement::cast(node).map(Self::CreateTable)
            }
            SyntaxKind::AlterTableStatement => {
                AlterTableStatement::cast(node).map(Self::AlterTable)
            }
            SyntaxKind::PragmaStatement => PragmaStatement::cast(node).map(Self::Pragma),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Self::With(n) => n.as_cst(),
            Self::Select(n) => n.as_cst(),
            Self::Insert(n) => n.as_cst(),
            Self::Update(n) => n.as_cst(),
            Self::Delete(n) => n.as_cst(),
            Self::CreateTable(n) => n.as_cst(),
            Self::AlterTable(n) => n.as_cst(),
            Self::Pragma(n) => n.as_cst(),
        }
    }
}

/// Expression: anything that can appear where a value is expected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Or(OrExpression),
    And(AndExpression),
    Equivalence(EquivalenceExpression),
    Like(LikeExpression),
    Between(BetweenExpression),
    In(InExpression),
    IsNull(IsNullExpression),
    Comparison(ComparisonExpression),
    Bit(BitExpression),
    Concat(ConcatExpression),
    Add(AddExpression),
    Mul(MulExpression),
    Unary(UnaryExpression),
    Collate(CollateExpression),
    Literal(LiteralExpression),
    ColumnRef(ColumnRefExpression),
    FunctionCall(FunctionCallExpression),
    Paren(ParenExpression),
    Case(CaseExpression),
    Exists(ExistsExpression),
    Cast(CastExpression),
}

impl Expr {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        let expr = match node.kind() {
            SyntaxKind::OrExpression => Self::Or(OrExpression(node)),
            SyntaxKind::AndExpression => Self::And(AndExpression(node)),
            SyntaxKind::EquivalenceExpression => {
                Self::Equivalence(EquivalenceExpression(node))
            }
            SyntaxKind::LikeExpression => Self::Like(LikeExpression(node)),
            SyntaxKind::BetweenExpression => Self::Between(BetweenExpression(node)),
            SyntaxKind::InExpression => Self::In(InExpression(node)),
            SyntaxKind::IsNullExpression => Self::IsNull(IsNullExpression(node)),
            SyntaxKind::ComparisonExpression => Self::Comparison(ComparisonExpression(node)),
            SyntaxKind::BitExpression => Self::Bit(BitExpression(node)),
            SyntaxKind::ConcatExpression => Self::Concat(ConcatExpression(node)),
            SyntaxKind::AddExpression => Self::Add(AddExpression(node)),
            SyntaxKind::MulExpression => Self::Mul(MulExpression(node)),
            SyntaxKind::UnaryExpression => Self::Unary(UnaryExpression(node)),
            SyntaxKind::CollateExpression => Self::Collate(CollateExpression(node)),
            SyntaxKind::LiteralExpression => Self::Literal(LiteralExpression(node)),
            SyntaxKind::ColumnRefExpression => Self::ColumnRef(ColumnRefExpression(node)),
            SyntaxKind::FunctionCallExpression => {
                Self::FunctionCall(FunctionCallExpression(node))
            }
            SyntaxKind::ParenExpression => Self::Paren(ParenExpression(node)),
            SyntaxKind::CaseExpression => Self::Case(CaseExpression(node)),
            SyntaxKind::ExistsExpression => Self::Exists(ExistsExpression(node)),
            SyntaxKind::CastExpression => Self::Cast(CastExpression(node)),
            _ => return None,
        };
        Some(expr)
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Self::Or(n) => n.as_cst(),
            Self::And(n) => n.as_cst(),
            Self::Equivalence(n) => n.as_cst(),
            Self::Like(n) => n.as_cst(),
            Self::Between(n) => n.as_cst(),
            Self::In(n) => n.as_cst(),
            Self::IsNull(n) => n.as_cst(),
            Self::Comparison(n) => n.as_cst(),
            Self::Bit(n) => n.as_cst(),
            Self::Concat(n) => n.as_cst(),
            Self::Add(n) => n.as_cst(),
            Self::Mul(n) => n.as_cst(),
            Self::Unary(n) => n.as_cst(),
            Self::Collate(n) => n.as_cst(),
            Self::Literal(n) => n.as_cst(),
            Self::ColumnRef(n) => n.as_cst(),
            Self::FunctionCall(n) => n.as_cst(),
            Self::Paren(n) => n.as_cst(),
            Self::Case(n) => n.as_cst(),
            Self::Exists(n) => n.as_cst(),
            Self::Cast(n) => n.as_cst(),
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.as_cst().kind()
    }

    /// Operator token of a binary or postfix expression (`=`, `LIKE`, `IN`, `ISNULL`, ...).
    /// For negated forms this is the keyword after `NOT`.
    pub fn operator(&self) -> Option<SyntaxToken> {
        let node = self.as_cst();
        let is_operator = |kind: SyntaxKind| !kind.is_trivia() && kind != SyntaxKind::KwNot;
        match self {
            Self::Or(_)
            | Self::And(_)
            | Self::Equivalence(_)
            | Self::Like(_)
            | Self::Between(_)
            | Self::In(_)
            | Self::IsNull(_)
            | Self::Comparison(_)
            | Self::Bit(_)
            | Self::Concat(_)
            | Self::Add(_)
            | Self::Mul(_)
            | Self::Collate(_) => first_token(node, is_operator),
            Self::Unary(_) => first_token(node, |k| !k.is_trivia()),
            _ => None,
        }
    }

    /// Whether the operator is preceded or followed by `NOT`: `NOT LIKE`, `IS NOT`, `NOT IN`.
    pub fn is_negated(&self) -> bool {
        match self {
            Self::Equivalence(_)
            | Self::Like(_)
            | Self::Between(_)
            | Self::In(_)
            | Self::Exists(_) => has_token(self.as_cst(), SyntaxKind::KwNot),
            Self::IsNull(_) => {
                has_token(self.as_cst(), SyntaxKind::KwNot)
                    || has_token(self.as_cst(), SyntaxKind::KwNotnull)
            }
            _ => false,
        }
    }

    /// Direct operand expressions, in source order.
    pub fn operands(&self) -> impl Iterator<Item = Expr> + '_ {
        self.as_cst().children().filter_map(Expr::cast)
    }

    pub fn lhs(&self) -> Option<Expr> {
        self.operands().next()
    }

    pub fn rhs(&self) -> Option<Expr> {
        match self {
            Self::Unary(_) | Self::Collate(_) | Self::IsNull(_) => None,
            _ => self.operands().nth(1),
        }
    }
}

impl File {
    pub fn statement(&self) -> Option<Statement> {
        self.0.children().find_map(Statement::cast)
    }

    pub fn errors(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.0
            .descendants()
            .filter(|n| n.kind() == SyntaxKind::Error)
    }
}

impl WithClauseStatement {
    pub fn with_clause(&self) -> Option<WithClause> {
        self.0.children().find_map(WithClause::cast)
    }

    pub fn select(&self) -> Option<SelectStatement> {
        self.0.children().find_map(SelectStatement::cast)
    }
}

impl WithClause {
    pub fn is_recursive(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwRecursive)
    }

    pub fn tables(&self) -> impl Iterator<Item = WithClauseTable> + '_ {
        self.0.children().filter_map(WithClauseTable::cast)
    }
}

impl WithClauseTable {
    pub fn name(&self) -> Option<TableDefinitionName> {
        self.0.children().find_map(TableDefinitionName::cast)
    }

    pub fn columns(&self) -> impl Iterator<Item = ColumnDefinitionName> + '_ {
        self.0.children().filter_map(ColumnDefinitionName::cast)
    }

    pub fn query(&self) -> Option<Statement> {
        self.0.children().find_map(Statement::cast)
    }
}

impl SelectStatement {
    pub fn cores(&self) -> impl Iterator<Item = SelectCore> + '_ {
        self.0.children().filter_map(SelectCore::cast)
    }

    pub fn compound_operators(&self) -> impl Iterator<Item = CompoundOperator> + '_ {
        self.0.children().filter_map(CompoundOperator::cast)
    }

    pub fn order_clause(&self) -> Option<OrderClause> {
        self.0.children().find_map(OrderClause::cast)
    }

    pub fn limit_clause(&self) -> Option<LimitClause> {
        self.0.children().find_map(LimitClause::cast)
    }
}

impl SelectCore {
    pub fn is_values(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwValues)
    }

    pub fn is_distinct(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwDistinct)
    }

    pub fn result_columns(&self) -> impl Iterator<Item = ResultColumn> + '_ {
        self.0
            .children()
            .filter_map(ResultColumns::cast)
            .flat_map(|cols| cols.0.children().filter_map(ResultColumn::cast))
    }

    pub fn values_rows(&self) -> impl Iterator<Item = ValuesRow> + '_ {
        self.0.children().filter_map(ValuesRow::cast)
    }

    pub fn from_clause(&self) -> Option<FromClause> {
        self.0.children().find_map(FromClause::cast)
    }

    pub fn where_clause(&self) -> Option<WhereClause> {
        self.0.children().find_map(WhereClause::cast)
    }

    pub fn group_by_clause(&self) -> Option<GroupByClause> {
        self.0.children().find_map(GroupByClause::cast)
    }

    pub fn having_clause(&self) -> Option<HavingClause> {
        self.0.children().find_map(HavingClause::cast)
    }
}

impl ValuesRow {
    pub fn values(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast)
    }
}

impl CompoundOperator {
    /// `UNION`, `INTERSECT` or `EXCEPT`.
    pub fn keyword(&self) -> Option<SyntaxToken> {
        first_token(&self.0, |k| k.is_keyword() && k != SyntaxKind::KwAll)
    }

    pub fn is_union_all(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwUnion) && has_token(&self.0, SyntaxKind::KwAll)
    }
}

impl ResultColumn {
    /// `*` or `table.*`.
    pub fn is_wildcard(&self) -> bool {
        has_token(&self.0, SyntaxKind::Star) && self.expr().is_none()
    }

    pub fn table(&self) -> Option<SelectedTableName> {
        self.0.children().find_map(SelectedTableName::cast)
    }

    pub fn expr(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    pub fn alias(&self) -> Option<ColumnAliasName> {
        self.0.children().find_map(ColumnAliasName::cast)
    }
}

impl FromClause {
    /// Top-level items of the join chain.
    pub fn tables(&self) -> impl Iterator<Item = TableOrSubquery> + '_ {
        self.0.children().filter_map(TableOrSubquery::cast)
    }

    pub fn join_operators(&self) -> impl Iterator<Item = JoinOperator> + '_ {
        self.0.children().filter_map(JoinOperator::cast)
    }

    pub fn join_constraints(&self) -> impl Iterator<Item = JoinConstraint> + '_ {
        self.0.children().filter_map(JoinConstraint::cast)
    }
}

impl TableOrSubquery {
    pub fn database(&self) -> Option<DatabaseName> {
        self.0.children().find_map(DatabaseName::cast)
    }

    pub fn table(&self) -> Option<DefinedTableName> {
        self.0.children().find_map(DefinedTableName::cast)
    }

    pub fn subquery(&self) -> Option<SelectSubquery> {
        self.0.children().find_map(SelectSubquery::cast)
    }

    /// Items of a parenthesized join: `FROM (a JOIN b)`.
    pub fn nested(&self) -> impl Iterator<Item = TableOrSubquery> + '_ {
        self.0.children().filter_map(TableOrSubquery::cast)
    }

    pub fn alias(&self) -> Option<TableAliasName> {
        self.0.children().find_map(TableAliasName::cast)
    }

    pub fn index(&self) -> Option<IndexName> {
        self.0.children().find_map(IndexName::cast)
    }
}

impl SelectSubquery {
    pub fn query(&self) -> Option<Statement> {
        self.0.children().find_map(Statement::cast)
    }
}

impl JoinOperator {
    pub fn is_comma(&self) -> bool {
        has_token(&self.0, SyntaxKind::Comma)
    }

    pub fn is_natural(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwNatural)
    }

    pub fn is_left(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwLeft)
    }
}

impl JoinConstraint {
    pub fn on(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    pub fn using(&self) -> impl Iterator<Item = ColumnName> + '_ {
        self.0.children().filter_map(ColumnName::cast)
    }
}

impl WhereClause {
    pub fn expr(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl GroupByClause {
    pub fn exprs(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast)
    }
}

impl HavingClause {
    pub fn expr(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl OrderClause {
    pub fn terms(&self) -> impl Iterator<Item = OrderingTerm> + '_ {
        self.0.children().filter_map(OrderingTerm::cast)
    }
}

impl OrderingTerm {
    pub fn expr(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    pub fn is_descending(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwDesc)
    }
}

impl LimitClause {
    pub fn limit(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    pub fn offset(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).nth(1)
    }
}

impl SingleTableStatementTable {
    pub fn database(&self) -> Option<DatabaseName> {
        self.0.children().find_map(DatabaseName::cast)
    }

    pub fn table(&self) -> Option<DefinedTableName> {
        self.0.children().find_map(DefinedTableName::cast)
    }

    pub fn index(&self) -> Option<IndexName> {
        self.0.children().find_map(IndexName::cast)
    }
}

impl InsertStatement {
    /// `REPLACE INTO ...`; `INSERT OR REPLACE` is an insert with a conflict resolution.
    pub fn is_replace(&self) -> bool {
        first_token(&self.0, |k| !k.is_trivia()).is_some_and(|t| t.kind() == SyntaxKind::KwReplace)
    }

    pub fn table(&self) -> Option<SingleTableStatementTable> {
        self.0.children().find_map(SingleTableStatementTable::cast)
    }

    pub fn columns(&self) -> impl Iterator<Item = ColumnName> + '_ {
        self.0.children().filter_map(ColumnName::cast)
    }

    pub fn source(&self) -> Option<Statement> {
        self.0.children().find_map(Statement::cast)
    }

    pub fn is_default_values(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwDefault)
    }
}

impl UpdateStatement {
    pub fn table(&self) -> Option<SingleTableStatementTable> {
        self.0.children().find_map(SingleTableStatementTable::cast)
    }

    pub fn assignments(&self) -> impl Iterator<Item = UpdateAssignment> + '_ {
        self.0.children().filter_map(UpdateAssignment::cast)
    }

    pub fn where_clause(&self) -> Option<WhereClause> {
        self.0.children().find_map(WhereClause::cast)
    }
}

impl UpdateAssignment {
    pub fn column(&self) -> Option<ColumnName> {
        self.0.children().find_map(ColumnName::cast)
    }

    pub fn value(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl DeleteStatement {
    pub fn table(&self) -> Option<SingleTableStatementTable> {
        self.0.children().find_map(SingleTableStatementTable::cast)
    }

    pub fn where_clause(&self) -> Option<WhereClause> {
        self.0.children().find_map(WhereClause::cast)
    }
}

impl CreateTableStatement {
    pub fn is_temporary(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwTemp) || has_token(&self.0, SyntaxKind::KwTemporary)
    }

    pub fn if_not_exists(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwIf)
    }

    pub fn database(&self) -> Option<DatabaseName> {
        self.0.children().find_map(DatabaseName::cast)
    }

    pub fn name(&self) -> Option<TableDefinitionName> {
        self.0.children().find_map(TableDefinitionName::cast)
    }

    pub fn columns(&self) -> impl Iterator<Item = ColumnDefinition> + '_ {
        self.0.children().filter_map(ColumnDefinition::cast)
    }

    pub fn constraints(&self) -> impl Iterator<Item = TableConstraint> + '_ {
        self.0.children().filter_map(TableConstraint::cast)
    }

    pub fn as_query(&self) -> Option<Statement> {
        self.0.children().find_map(Statement::cast)
    }

    pub fn is_without_rowid(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwWithout)
    }
}

impl ColumnDefinition {
    pub fn name(&self) -> Option<ColumnDefinitionName> {
        self.0.children().find_map(ColumnDefinitionName::cast)
    }

    pub fn type_name(&self) -> Option<TypeName> {
        self.0.children().find_map(TypeName::cast)
    }

    pub fn constraints(&self) -> impl Iterator<Item = ColumnConstraint> + '_ {
        self.0.children().filter_map(ColumnConstraint::cast)
    }
}

impl TypeName {
    /// Type words joined by single spaces, without the size arguments: `UNSIGNED BIG INT`.
    pub fn text(&self) -> String {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|t| t.kind().is_name_token())
            .map(|t| logical_name(&t))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn arguments(&self) -> impl Iterator<Item = SignedNumber> + '_ {
        self.0.children().filter_map(SignedNumber::cast)
    }
}

impl SignedNumber {
    /// Numeric value, when the literal is a plain decimal or hex integer or float.
    pub fn value(&self) -> Option<f64> {
        let text = self.0.text().to_string();
        let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let (negative, digits) = match compact.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, compact.strip_prefix('+').unwrap_or(&compact)),
        };
        let magnitude = match digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
            Some(hex) => i64::from_str_radix(hex, 16).ok()? as f64,
            None => digits.parse::<f64>().ok()?,
        };
        Some(if negative { -magnitude } else { magnitude })
    }
}

impl ColumnConstraint {
    pub fn name(&self) -> Option<ConstraintName> {
        self.0.children().find_map(ConstraintName::cast)
    }

    /// The keyword that selects the constraint body: `PRIMARY`, `NOT`, `UNIQUE`, ...
    pub fn keyword(&self) -> Option<SyntaxToken> {
        first_token(&self.0, |k| k.is_keyword() && k != SyntaxKind::KwConstraint)
    }

    pub fn foreign_key(&self) -> Option<ForeignKeyClause> {
        self.0.children().find_map(ForeignKeyClause::cast)
    }

    pub fn conflict_clause(&self) -> Option<ConflictClause> {
        self.0.children().find_map(ConflictClause::cast)
    }
}

impl TableConstraint {
    pub fn name(&self) -> Option<ConstraintName> {
        self.0.children().find_map(ConstraintName::cast)
    }

    pub fn keyword(&self) -> Option<SyntaxToken> {
        first_token(&self.0, |k| k.is_keyword() && k != SyntaxKind::KwConstraint)
    }

    pub fn indexed_columns(&self) -> impl Iterator<Item = IndexedColumn> + '_ {
        self.0.children().filter_map(IndexedColumn::cast)
    }

    pub fn foreign_key(&self) -> Option<ForeignKeyClause> {
        self.0.children().find_map(ForeignKeyClause::cast)
    }
}

impl IndexedColumn {
    pub fn column(&self) -> Option<ColumnName> {
        self.0.children().find_map(ColumnName::cast)
    }
}

impl ConflictClause {
    pub fn resolution(&self) -> Option<SyntaxToken> {
        first_token(&self.0, |k| {
            k.is_keyword() && k != SyntaxKind::KwOn && k != SyntaxKind::KwConflict
        })
    }
}

impl ForeignKeyClause {
    pub fn table(&self) -> Option<ForeignTable> {
        self.0.children().find_map(ForeignTable::cast)
    }

    pub fn columns(&self) -> impl Iterator<Item = ColumnName> + '_ {
        self.0.children().filter_map(ColumnName::cast)
    }
}

impl AlterTableStatement {
    pub fn table(&self) -> Option<SingleTableStatementTable> {
        self.0.children().find_map(SingleTableStatementTable::cast)
    }

    pub fn new_table_name(&self) -> Option<TableDefinitionName> {
        self.0.children().find_map(TableDefinitionName::cast)
    }

    pub fn column(&self) -> Option<ColumnName> {
        self.0.children().find_map(ColumnName::cast)
    }

    pub fn new_column_name(&self) -> Option<ColumnDefinitionName> {
        self.0.children().find_map(ColumnDefinitionName::cast)
    }

    pub fn added_column(&self) -> Option<ColumnDefinition> {
        self.0.children().find_map(ColumnDefinition::cast)
    }
}

impl PragmaStatement {
    pub fn database(&self) -> Option<DatabaseName> {
        self.0.children().find_map(DatabaseName::cast)
    }

    pub fn name(&self) -> Option<PragmaName> {
        self.0.children().find_map(PragmaName::cast)
    }

    pub fn value(&self) -> Option<PragmaValue> {
        self.0.children().find_map(PragmaValue::cast)
    }
}

impl PragmaValue {
    /// Raw text of the value, trivia excluded.
    pub fn text(&self) -> String {
        self.0
            .descendants_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|t| !t.kind().is_trivia())
            .map(|t| t.text().to_string())
            .collect()
    }

    /// Boolean reading of `on yes true 1` / `off no false 0`, case-insensitive.
    pub fn as_bool(&self) -> Option<bool> {
        let text = self.text();
        let value = unquote(&text).to_ascii_lowercase();
        match value.as_str() {
            "on" | "yes" | "true" | "1" | "+1" => Some(true),
            "off" | "no" | "false" | "0" | "+0" | "-0" => Some(false),
            _ => None,
        }
    }
}

impl BindParameter {
    pub fn token(&self) -> Option<SyntaxToken> {
        first_token(&self.0, |k| {
            matches!(k, SyntaxKind::NamedParameter | SyntaxKind::NumberedParameter)
        })
    }

    /// Parameter name without its `:`/`@`/`$` sigil; `None` for `?` parameters.
    pub fn name(&self) -> Option<String> {
        let token = self.token()?;
        if token.kind() != SyntaxKind::NamedParameter {
            return None;
        }
        Some(token.text()[1..].to_string())
    }
}

impl LiteralExpression {
    pub fn token(&self) -> Option<SyntaxToken> {
        first_token(&self.0, |k| !k.is_trivia())
    }

    pub fn bind_parameter(&self) -> Option<BindParameter> {
        self.0.children().find_map(BindParameter::cast)
    }
}

impl ColumnRefExpression {
    pub fn database(&self) -> Option<DatabaseName> {
        self.0.children().find_map(DatabaseName::cast)
    }

    pub fn table(&self) -> Option<SelectedTableName> {
        self.0.children().find_map(SelectedTableName::cast)
    }

    pub fn column(&self) -> Option<ColumnName> {
        self.0.children().find_map(ColumnName::cast)
    }
}

impl FunctionName {
    pub fn token(&self) -> Option<SyntaxToken> {
        first_token(&self.0, |k| !k.is_trivia())
    }

    pub fn name(&self) -> Option<String> {
        self.token().map(|t| logical_name(&t))
    }
}

impl FunctionCallExpression {
    pub fn name(&self) -> Option<FunctionName> {
        self.0.children().find_map(FunctionName::cast)
    }

    pub fn arguments(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast)
    }

    pub fn is_distinct(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwDistinct)
    }

    /// `count(*)`
    pub fn is_star(&self) -> bool {
        has_token(&self.0, SyntaxKind::Star)
    }
}

impl ParenExpression {
    /// One element for a plain parenthesized expression, several for a row value.
    pub fn elements(&self) -> impl Iterator<Item = Expr> + '_ {
        self.0.children().filter_map(Expr::cast)
    }
}

impl CaseExpression {
    /// Expression between `CASE` and the first `WHEN`, if any.
    pub fn base(&self) -> Option<Expr> {
        let first = self.0.children_with_tokens().find_map(|it| match it {
            rowan::NodeOrToken::Token(t) if t.kind() == SyntaxKind::KwWhen => Some(None),
            rowan::NodeOrToken::Node(n) => Expr::cast(n).map(Some),
            _ => None,
        });
        first.flatten()
    }
}

impl ExistsExpression {
    pub fn query(&self) -> Option<Statement> {
        self.0.children().find_map(Statement::cast)
    }
}

impl CastExpression {
    pub fn expr(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    pub fn type_name(&self) -> Option<TypeName> {
        self.0.children().find_map(TypeName::cast)
    }
}

impl CollateExpression {
    pub fn collation(&self) -> Option<CollationName> {
        self.0.children().find_map(CollationName::cast)
    }
}
