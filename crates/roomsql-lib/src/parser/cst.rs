//! Syntax kinds for the SQL dialect.
//!
//! `SyntaxKind` serves dual roles: token kinds (from lexer) and node kinds (from parser).
//! Logos derives recognition for punctuation, literals and trivia. Keyword kinds carry no
//! logos attribute: the lexer matches an identifier first and then looks the word up in
//! the keyword table (see [`super::keywords`]).
//! `RoomSql` implements Rowan's `Language` trait for tree construction.

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token(",")]
    Comma,

    #[token(".")]
    Dot,

    #[token(";")]
    Semicolon,

    #[token("*")]
    Star,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("/")]
    Slash,

    #[token("%")]
    Percent,

    #[token("~")]
    Tilde,

    #[token("||")]
    Concat,

    #[token("|")]
    Pipe,

    #[token("&")]
    Ampersand,

    #[token("<<")]
    ShiftLeft,

    #[token(">>")]
    ShiftRight,

    #[token("<")]
    Lt,

    #[token("<=")]
    LtEq,

    #[token(">")]
    Gt,

    #[token(">=")]
    GtEq,

    #[token("=")]
    Eq,

    #[token("==")]
    EqEq,

    #[token("!=")]
    NotEq,

    #[token("<>")]
    LtGt,

    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"0[xX][0-9a-fA-F]+")]
    NumericLiteral,

    /// Bare word. Keywords are remapped from this kind after lookup.
    #[regex(r"[a-zA-Z_\x{80}-\x{10FFFF}][a-zA-Z0-9_\x{80}-\x{10FFFF}]*", allow_greedy = true)]
    Ident,

    #[regex(r"`([^`]|``)*`", allow_greedy = true)]
    BacktickLiteral,

    #[regex(r"\[[^\]]*\]", allow_greedy = true)]
    BracketLiteral,

    #[regex(r#""([^"]|"")*""#, allow_greedy = true)]
    #[regex(r#"[xX]"([^"]|"")*""#, allow_greedy = true)]
    DoubleQuoteStringLiteral,

    #[regex(r"'([^']|'')*'", allow_greedy = true)]
    #[regex(r"[xX]'([^']|'')*'", allow_greedy = true)]
    SingleQuoteStringLiteral,

    #[regex(r"`([^`]|``)*", allow_greedy = true)]
    UnterminatedBacktickLiteral,

    #[regex(r"\[[^\]]*", allow_greedy = true)]
    UnterminatedBracketLiteral,

    #[regex(r#""([^"]|"")*"#, allow_greedy = true)]
    #[regex(r#"[xX]"([^"]|"")*"#, allow_greedy = true)]
    UnterminatedDoubleQuoteStringLiteral,

    #[regex(r"'([^']|'')*", allow_greedy = true)]
    #[regex(r"[xX]'([^']|'')*", allow_greedy = true)]
    UnterminatedSingleQuoteStringLiteral,

    /// `:name`, `@name`, `$name`
    #[regex(
        r"[:@$][a-zA-Z_\x{80}-\x{10FFFF}][a-zA-Z0-9_\x{80}-\x{10FFFF}]*",
        allow_greedy = true
    )]
    NamedParameter,

    /// `?` or `?123`
    #[regex(r"\?[0-9]*")]
    NumberedParameter,

    #[regex(r"[ \t\r\x0C]+")]
    #[token("\n")]
    Whitespace,

    #[regex(r"--[^\n]*", allow_greedy = true)]
    LineComment,

    /// Block comment. An unterminated comment runs to end of input with the same kind.
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", allow_greedy = true)]
    #[regex(r"/\*([^*]|\*+[^*/])*\**", allow_greedy = true)]
    Comment,

    /// One character no rule matches.
    BadCharacter,

    /// Lookahead past the last token. Never produced by the lexer.
    Eof,

    // --- Keywords (alphabetical, contiguous: `is_keyword` relies on it) ---
    KwAbort,
    KwAction,
    KwAdd,
    KwAfter,
    KwAll,
    KwAlter,
    KwAnalyze,
    KwAnd,
    KwAs,
    KwAsc,
    KwAttach,
    KwAutoincrement,
    KwBefore,
    KwBegin,
    KwBetween,
    KwBy,
    KwCascade,
    KwCase,
    KwCast,
    KwCheck,
    KwCollate,
    KwColumn,
    KwCommit,
    KwConflict,
    KwConstraint,
    KwCreate,
    KwCross,
    KwCurrentDate,
    KwCurrentTime,
    KwCurrentTimestamp,
    KwDatabase,
    KwDefault,
    KwDeferrable,
    KwDeferred,
    KwDelete,
    KwDesc,
    KwDetach,
    KwDistinct,
    KwDrop,
    KwEach,
    KwElse,
    KwEnd,
    KwEscape,
    KwExcept,
    KwExclusive,
    KwExists,
    KwExplain,
    KwFail,
    KwFalse,
    KwFor,
    KwForeign,
    KwFrom,
    KwGlob,
    KwGroup,
    KwHaving,
    KwIf,
    KwIgnore,
    KwImmediate,
    KwIn,
    KwIndex,
    KwIndexed,
    KwInitially,
    KwInner,
    KwInsert,
    KwInstead,
    KwIntersect,
    KwInto,
    KwIs,
    KwIsnull,
    KwJoin,
    KwKey,
    KwLeft,
    KwLike,
    KwLimit,
    KwMatch,
    KwNatural,
    KwNo,
    KwNot,
    KwNotnull,
    KwNull,
    KwOf,
    KwOffset,
    KwOn,
    KwOr,
    KwOrder,
    KwOuter,
    KwPlan,
    KwPragma,
    KwPrimary,
    KwQuery,
    KwRaise,
    KwRecursive,
    KwReferences,
    KwRegexp,
    KwReindex,
    KwRelease,
    KwRename,
    KwReplace,
    KwRestrict,
    KwRollback,
    KwRow,
    KwSavepoint,
    KwSelect,
    KwSet,
    KwTable,
    KwTemp,
    KwTemporary,
    KwThen,
    KwTo,
    KwTransaction,
    KwTrigger,
    KwTrue,
    KwUnion,
    KwUnique,
    KwUpdate,
    KwUsing,
    KwVacuum,
    KwValues,
    KwView,
    KwVirtual,
    KwWhen,
    KwWhere,
    KwWith,
    KwWithout,

    // --- Node kinds (non-terminals) ---
    File,
    WithClauseStatement,
    WithClause,
    WithClauseTable,
    TableDefinitionName,
    ColumnDefinitionName,
    SelectStatement,
    SelectCore,
    ValuesRow,
    CompoundOperator,
    ResultColumns,
    ResultColumn,
    ColumnAliasName,
    FromClause,
    TableOrSubquery,
    SelectSubquery,
    JoinOperator,
    JoinConstraint,
    TableAliasName,
    IndexName,
    WhereClause,
    GroupByClause,
    HavingClause,
    OrderClause,
    OrderingTerm,
    LimitClause,
    InsertStatement,
    UpdateStatement,
    UpdateAssignment,
    DeleteStatement,
    SingleTableStatementTable,
    DefinedTableName,
    DatabaseName,
    SelectedTableName,
    ColumnName,
    CreateTableStatement,
    ColumnDefinition,
    TypeName,
    SignedNumber,
    ColumnConstraint,
    TableConstraint,
    ConstraintName,
    IndexedColumn,
    ConflictClause,
    ForeignKeyClause,
    ForeignTable,
    CollationName,
    AlterTableStatement,
    PragmaStatement,
    PragmaName,
    PragmaValue,
    BindParameter,
    FunctionName,
    OrExpression,
    AndExpression,
    EquivalenceExpression,
    LikeExpression,
    BetweenExpression,
    InExpression,
    IsNullExpression,
    ComparisonExpression,
    BitExpression,
    ConcatExpression,
    AddExpression,
    MulExpression,
    UnaryExpression,
    CollateExpression,
    LiteralExpression,
    ColumnRefExpression,
    FunctionCallExpression,
    ParenExpression,
    CaseExpression,
    ExistsExpression,
    CastExpression,
    /// Failed grammar match; carries a diagnostic and any unexpected tokens.
    Error,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | LineComment | Comment)
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        (KwAbort as u16..=KwWithout as u16).contains(&(self as u16))
    }

    #[inline]
    pub fn is_token(self) -> bool {
        (self as u16) < File as u16
    }

    #[inline]
    pub fn is_node(self) -> bool {
        (self as u16) >= File as u16 && self != __LAST
    }

    #[inline]
    pub fn is_unterminated(self) -> bool {
        matches!(
            self,
            UnterminatedBacktickLiteral
                | UnterminatedBracketLiteral
                | UnterminatedDoubleQuoteStringLiteral
                | UnterminatedSingleQuoteStringLiteral
        )
    }

    /// Identifier-bearing tokens whose text decodes to a logical name.
    #[inline]
    pub fn is_name_token(self) -> bool {
        matches!(
            self,
            Ident
                | BacktickLiteral
                | BracketLiteral
                | DoubleQuoteStringLiteral
                | SingleQuoteStringLiteral
        )
    }
}

/// Serializes as the variant name, as shown in CST dumps.
impl serde::Serialize for SyntaxKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!("{self:?}"))
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RoomSql {}

impl Language for RoomSql {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<RoomSql>;
pub type SyntaxToken = rowan::SyntaxToken<RoomSql>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

const TOKEN_SET_BITS: u16 = 256;

/// 256-bit bitset of token `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet([u64; 4]);

impl TokenSet {
    /// Creates an empty token set.
    pub const EMPTY: TokenSet = TokenSet([0; 4]);

    /// Panics at compile time if any kind's discriminant >= 256.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = [0u64; 4];
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(
                kind < TOKEN_SET_BITS,
                "SyntaxKind value exceeds TokenSet capacity"
            );
            bits[(kind / 64) as usize] |= 1 << (kind % 64);
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= TOKEN_SET_BITS {
            return false;
        }
        self.0[(kind / 64) as usize] & (1 << (kind % 64)) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        let mut bits = self.0;
        let mut i = 0;
        while i < bits.len() {
            bits[i] |= other.0[i];
            i += 1;
        }
        TokenSet(bits)
    }

    pub fn iter(self) -> impl Iterator<Item = SyntaxKind> {
        (0..TOKEN_SET_BITS.min(__LAST as u16))
            .filter(move |&i| self.0[(i / 64) as usize] & (1 << (i % 64)) != 0)
            // SAFETY: bounded by `__LAST`, and SyntaxKind is repr(u16)
            .map(|i| unsafe { std::mem::transmute::<u16, SyntaxKind>(i) })
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    pub const TRIVIA: TokenSet = TokenSet::new(&[Whitespace, LineComment, Comment]);

    /// Tokens that can stand for a table, column or alias name.
    pub const NAMES: TokenSet = TokenSet::new(&[
        Ident,
        BacktickLiteral,
        BracketLiteral,
        DoubleQuoteStringLiteral,
        SingleQuoteStringLiteral,
    ]);

    /// Names usable as column references inside expressions. Single-quoted text is a
    /// string value there.
    pub const EXPR_NAMES: TokenSet =
        TokenSet::new(&[Ident, BacktickLiteral, BracketLiteral, DoubleQuoteStringLiteral]);

    pub const LITERAL_VALUES: TokenSet = TokenSet::new(&[
        NumericLiteral,
        SingleQuoteStringLiteral,
        KwNull,
        KwTrue,
        KwFalse,
        KwCurrentTime,
        KwCurrentDate,
        KwCurrentTimestamp,
    ]);

    pub const BIND_PARAMETERS: TokenSet = TokenSet::new(&[NamedParameter, NumberedParameter]);

    /// Keywords that double as scalar function names: `replace(x, 'a', 'b')`.
    pub const FUNCTION_KEYWORDS: TokenSet =
        TokenSet::new(&[KwReplace, KwLike, KwGlob, KwMatch, KwRegexp]);

    pub const UNARY_OPERATORS: TokenSet = TokenSet::new(&[Minus, Plus, Tilde, KwNot]);

    pub const EXPR_FIRST: TokenSet = EXPR_NAMES
        .union(LITERAL_VALUES)
        .union(BIND_PARAMETERS)
        .union(FUNCTION_KEYWORDS)
        .union(UNARY_OPERATORS)
        .union(TokenSet::new(&[ParenOpen, KwExists, KwCase, KwCast]));

    pub const LIKE_OPERATORS: TokenSet = TokenSet::new(&[KwLike, KwGlob, KwRegexp, KwMatch]);

    /// Keywords that `NOT` may negate in infix position: `a NOT IN (..)`, `a NOT NULL`.
    pub const NEGATABLE_OPERATORS: TokenSet =
        LIKE_OPERATORS.union(TokenSet::new(&[KwBetween, KwIn, KwNull]));

    /// Tokens that may continue an expression after an operand.
    pub const BINARY_OPERATOR_FIRST: TokenSet = LIKE_OPERATORS.union(TokenSet::new(&[
        KwOr, KwAnd, Eq, EqEq, NotEq, LtGt, KwIs, KwBetween, KwIn, KwIsnull, KwNotnull, KwNot,
        Lt, LtEq, Gt, GtEq, ShiftLeft, ShiftRight, Ampersand, Pipe, Concat, Plus, Minus, Star,
        Slash, Percent, KwCollate,
    ]));

    pub const RESULT_COLUMN_FIRST: TokenSet = EXPR_FIRST.union(TokenSet::new(&[Star]));

    pub const SELECT_FIRST: TokenSet = TokenSet::new(&[KwSelect, KwValues]);

    /// Anything that may follow `(` as a subquery.
    pub const QUERY_FIRST: TokenSet = SELECT_FIRST.union(TokenSet::new(&[KwWith]));

    pub const STATEMENT_FIRST: TokenSet = QUERY_FIRST.union(TokenSet::new(&[
        KwInsert, KwReplace, KwUpdate, KwDelete, KwCreate, KwAlter, KwPragma,
    ]));

    pub const COMPOUND_OPERATORS: TokenSet = TokenSet::new(&[KwUnion, KwIntersect, KwExcept]);

    pub const JOIN_OPERATOR_FIRST: TokenSet =
        TokenSet::new(&[Comma, KwNatural, KwLeft, KwInner, KwCross, KwJoin]);

    pub const TABLE_OR_SUBQUERY_FIRST: TokenSet =
        NAMES.union(TokenSet::new(&[ParenOpen, KwTemp]));

    pub const CONFLICT_RESOLUTIONS: TokenSet =
        TokenSet::new(&[KwRollback, KwAbort, KwFail, KwIgnore, KwReplace]);

    pub const TABLE_CONSTRAINT_FIRST: TokenSet =
        TokenSet::new(&[KwConstraint, KwPrimary, KwUnique, KwCheck, KwForeign]);

    pub const COLUMN_CONSTRAINT_FIRST: TokenSet = TokenSet::new(&[
        KwConstraint,
        KwPrimary,
        KwNot,
        KwNull,
        KwUnique,
        KwCheck,
        KwDefault,
        KwCollate,
        KwReferences,
    ]);

    pub const SIGNED_NUMBER_FIRST: TokenSet = TokenSet::new(&[Plus, Minus, NumericLiteral]);

    /// Single-token pragma values besides signed numbers. `OFF` and `YES` arrive as `Ident`.
    pub const PRAGMA_VALUE_TOKENS: TokenSet = NAMES.union(TokenSet::new(&[
        KwTrue, KwFalse, KwOn, KwNo, KwNull, KwDelete, KwDefault,
    ]));

    /// Where a broken `WITH` table resumes: the next table or the main select.
    pub const WITH_TABLE_RECOVERY: TokenSet =
        TokenSet::new(&[Comma, KwSelect, KwValues, KwWith]);

    pub const PAREN_RECOVERY: TokenSet = TokenSet::new(&[ParenClose, Semicolon]);
}
