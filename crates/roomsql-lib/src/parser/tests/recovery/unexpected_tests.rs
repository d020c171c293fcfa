use crate::SqlQuery;
use crate::parser::ast::Statement;
use crate::parser::{SyntaxKind, parse};

#[test]
fn statement_expected() {
    let res = SqlQuery::expect_invalid("foo");

    insta::assert_snapshot!(res, @"error at 0..3: <statement> expected, got 'foo'");
}

#[test]
fn without_unknown_word() {
    let res = SqlQuery::expect_invalid("CREATE TABLE t (a) WITHOUT MADEUP");

    insta::assert_snapshot!(res, @"error at 27..33: ROWID expected, got 'MADEUP'");
}

#[test]
fn with_table_garbage_is_wrapped() {
    let res = SqlQuery::expect_invalid("WITH ids AS foo SELECT 1");

    insta::assert_snapshot!(res, @"error at 12..15: '(' expected, got 'foo'");
}

#[test]
fn unexpected_token_inside_parentheses() {
    let res = SqlQuery::expect_invalid("SELECT (1 2) FROM t");

    insta::assert_snapshot!(res, @"error at 10..11: ')', ',' or <operator> expected, got '2'");
}

#[test]
fn having_requires_group_by() {
    let res = SqlQuery::expect_invalid("SELECT a FROM t HAVING a");

    insta::assert_snapshot!(res, @"error at 16..24: ';', <compound operator>, <end of input>, <join operator>, <table alias name>, AS, GROUP, INDEXED, LIMIT, NOT, ORDER or WHERE expected, got 'HAVING'");
}

#[test]
fn trailing_tokens_are_wrapped() {
    let res = SqlQuery::expect_invalid_cst("SELECT 1 FROM t AS u v w");

    insta::assert_snapshot!(res, @r#"
    File
      SelectStatement
        SelectCore
          KwSelect "SELECT"
          ResultColumns
            ResultColumn
              LiteralExpression
                NumericLiteral "1"
          FromClause
            KwFrom "FROM"
            TableOrSubquery
              DefinedTableName
                Ident "t"
              KwAs "AS"
              TableAliasName
                Ident "u"
      Error: ';', <compound operator>, <end of input>, <join operator>, GROUP, INDEXED, LIMIT, NOT, ORDER or WHERE expected, got 'v'
        Ident "v"
        Ident "w"
    "#);
}

#[test]
fn error_in_with_table_stays_local() {
    let parse = parse(
        "WITH ids AS (SELECT something stupid WHERE doesnt parse) SELECT foo FROM bar",
    );
    let errors = parse.errors();

    assert_eq!(errors.len(), 1);
    insta::assert_snapshot!(errors[0].message.as_str(), @"'(', ')', '.', <compound operator>, <operator>, GROUP, LIMIT or ORDER expected, got 'parse'");
    assert_eq!(u32::from(errors[0].range.start()), 50);
    assert_eq!(u32::from(errors[0].range.end()), 55);

    let file = parse.tree().unwrap();
    let Some(Statement::With(with)) = file.statement() else {
        panic!("expected WITH statement");
    };
    let select = with.select().unwrap();
    assert!(select.as_cst().descendants().all(|n| n.kind() != SyntaxKind::Error));
}

#[test]
fn bad_character_in_expression() {
    let res = SqlQuery::expect_invalid("SELECT a FROM t WHERE x = ::p");

    insta::assert_snapshot!(res, @r"
    error at 26..27: unexpected character ':'
    error at 26..27: <expression> expected, got ':'
    error at 27..29: ';', <compound operator>, <end of input>, <operator>, GROUP, LIMIT or ORDER expected, got ':p'
    ");
}
