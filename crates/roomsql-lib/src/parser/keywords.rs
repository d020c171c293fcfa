//! Keyword table.
//!
//! Keywords are matched after the lexer has recognized an identifier: the word is
//! lowercased and looked up exactly, so `nulls` or `current_times` stay identifiers.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::cst::SyntaxKind::{self, *};

const KEYWORDS: &[(&str, SyntaxKind)] = &[
    ("abort", KwAbort),
    ("action", KwAction),
    ("add", KwAdd),
    ("after", KwAfter),
    ("all", KwAll),
    ("alter", KwAlter),
    ("analyze", KwAnalyze),
    ("and", KwAnd),
    ("as", KwAs),
    ("asc", KwAsc),
    ("attach", KwAttach),
    ("autoincrement", KwAutoincrement),
    ("before", KwBefore),
    ("begin", KwBegin),
    ("between", KwBetween),
    ("by", KwBy),
    ("cascade", KwCascade),
    ("case", KwCase),
    ("cast", KwCast),
    ("check", KwCheck),
    ("collate", KwCollate),
    ("column", KwColumn),
    ("commit", KwCommit),
    ("conflict", KwConflict),
    ("constraint", KwConstraint),
    ("create", KwCreate),
    ("cross", KwCross),
    ("current_date", KwCurrentDate),
    ("current_time", KwCurrentTime),
    ("current_timestamp", KwCurrentTimestamp),
    ("database", KwDatabase),
    ("default", KwDefault),
    ("deferrable", KwDeferrable),
    ("deferred", KwDeferred),
    ("delete", KwDelete),
    ("desc", KwDesc),
    ("detach", KwDetach),
    ("distinct", KwDistinct),
    ("drop", KwDrop),
    ("each", KwEach),
    ("else", KwElse),
    ("end", KwEnd),
    ("escape", KwEscape),
    ("except", KwExcept),
    ("exclusive", KwExclusive),
    ("exists", KwExists),
    ("explain", KwExplain),
    ("fail", KwFail),
    ("false", KwFalse),
    ("for", KwFor),
    ("foreign", KwForeign),
    ("from", KwFrom),
    ("glob", KwGlob),
    ("group", KwGroup),
    ("having", KwHaving),
    ("if", KwIf),
    ("ignore", KwIgnore),
    ("immediate", KwImmediate),
    ("in", KwIn),
    ("index", KwIndex),
    ("indexed", KwIndexed),
    ("initially", KwInitially),
    ("inner", KwInner),
    ("insert", KwInsert),
    ("instead", KwInstead),
    ("intersect", KwIntersect),
    ("into", KwInto),
    ("is", KwIs),
    ("isnull", KwIsnull),
    ("join", KwJoin),
    ("key", KwKey),
    ("left", KwLeft),
    ("like", KwLike),
    ("limit", KwLimit),
    ("match", KwMatch),
    ("natural", KwNatural),
    ("no", KwNo),
    ("not", KwNot),
    ("notnull", KwNotnull),
    ("null", KwNull),
    ("of", KwOf),
    ("offset", KwOffset),
    ("on", KwOn),
    ("or", KwOr),
    ("order", KwOrder),
    ("outer", KwOuter),
    ("plan", KwPlan),
    ("pragma", KwPragma),
    ("primary", KwPrimary),
    ("query", KwQuery),
    ("raise", KwRaise),
    ("recursive", KwRecursive),
    ("references", KwReferences),
    ("regexp", KwRegexp),
    ("reindex", KwReindex),
    ("release", KwRelease),
    ("rename", KwRename),
    ("replace", KwReplace),
    ("restrict", KwRestrict),
    ("rollback", KwRollback),
    ("row", KwRow),
    ("savepoint", KwSavepoint),
    ("select", KwSelect),
    ("set", KwSet),
    ("table", KwTable),
    ("temp", KwTemp),
    ("temporary", KwTemporary),
    ("then", KwThen),
    ("to", KwTo),
    ("transaction", KwTransaction),
    ("trigger", KwTrigger),
    ("true", KwTrue),
    ("union", KwUnion),
    ("unique", KwUnique),
    ("update", KwUpdate),
    ("using", KwUsing),
    ("vacuum", KwVacuum),
    ("values", KwValues),
    ("view", KwView),
    ("virtual", KwVirtual),
    ("when", KwWhen),
    ("where", KwWhere),
    ("with", KwWith),
    ("without", KwWithout),
];

const LONGEST_KEYWORD: usize = "current_timestamp".len();

static BY_WORD: LazyLock<HashMap<&'static str, SyntaxKind>> =
    LazyLock::new(|| KEYWORDS.iter().copied().collect());

static BY_KIND: LazyLock<HashMap<SyntaxKind, &'static str>> =
    LazyLock::new(|| KEYWORDS.iter().map(|&(word, kind)| (kind, word)).collect());

/// Keyword kind for `word`, compared case-insensitively.
pub fn lookup(word: &str) -> Option<SyntaxKind> {
    if word.len() > LONGEST_KEYWORD || !word.is_ascii() {
        return None;
    }
    BY_WORD.get(word.to_ascii_lowercase().as_str()).copied()
}

/// Lowercase spelling of a keyword kind.
pub fn text(kind: SyntaxKind) -> Option<&'static str> {
    BY_KIND.get(&kind).copied()
}

/// All keyword spellings, lowercase, in alphabetical order.
pub fn all() -> impl Iterator<Item = &'static str> {
    KEYWORDS.iter().map(|&(word, _)| word)
}
