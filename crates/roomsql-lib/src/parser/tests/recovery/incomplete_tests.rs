use crate::SqlQuery;

#[test]
fn update_missing_set() {
    let res = SqlQuery::expect_invalid("update IntellijIdeaRulezzz ");

    insta::assert_snapshot!(res, @"error at 27..27: '.', INDEXED, NOT or SET expected");
}

#[test]
fn update_missing_assignment_value() {
    let res = SqlQuery::expect_invalid("update foo set x");

    insta::assert_snapshot!(res, @"error at 16..16: '=' expected");
}

#[test]
fn delete_missing_from() {
    let res = SqlQuery::expect_invalid("DELETE ");

    insta::assert_snapshot!(res, @"error at 7..7: FROM expected");
}

#[test]
fn delete_missing_table() {
    let res = SqlQuery::expect_invalid("DELETE FROM");

    insta::assert_snapshot!(res, @"error at 11..11: <single table statement table> expected");
}

#[test]
fn select_missing_table() {
    let res = SqlQuery::expect_invalid("SELECT foo FROM ");

    insta::assert_snapshot!(res, @"error at 16..16: <table or subquery> expected");
}

#[test]
fn unclosed_parenthesis() {
    let res = SqlQuery::expect_invalid("SELECT (1 + 2");

    insta::assert_snapshot!(res, @"error at 13..13: ')', ',' or <operator> expected");
}

#[test]
fn unclosed_parenthesis_keeps_partial_tree() {
    let res = SqlQuery::expect_invalid_cst("SELECT (1 + 2");

    insta::assert_snapshot!(res, @r#"
    File
      SelectStatement
        SelectCore
          KwSelect "SELECT"
          ResultColumns
            ResultColumn
              ParenExpression
                ParenOpen "("
                AddExpression
                  LiteralExpression
                    NumericLiteral "1"
                  Plus "+"
                  LiteralExpression
                    NumericLiteral "2"
                Error: ')', ',' or <operator> expected
    "#);
}

#[test]
fn with_table_missing_as() {
    let res = SqlQuery::expect_invalid("WITH ids SELECT 1");

    insta::assert_snapshot!(res, @"error at 9..15: '(' or AS expected, got 'SELECT'");
}

#[test]
fn with_table_missing_parenthesis() {
    let res = SqlQuery::expect_invalid("WITH ids AS SELECT 1");

    insta::assert_snapshot!(res, @"error at 12..18: '(' expected, got 'SELECT'");
}

#[test]
fn with_missing_table() {
    let res = SqlQuery::expect_invalid("WITH SELECT 1");

    insta::assert_snapshot!(res, @"error at 5..11: <table definition name> or RECURSIVE expected, got 'SELECT'");
}

#[test]
fn incomplete_input_is_never_valid() {
    for source in [
        "SELECT",
        "SELECT a FROM",
        "SELECT a FROM t WHERE",
        "SELECT a FROM t ORDER",
        "SELECT * FROM t LIMIT",
        "SELECT a UNION",
        "INSERT INTO",
        "INSERT INTO t",
        "CREATE TABLE",
        "CREATE TABLE t",
        "CREATE TABLE t (",
        "ALTER TABLE t",
        "PRAGMA",
        "PRAGMA x =",
        "SELECT CASE a END",
        "SELECT CAST(a)",
    ] {
        SqlQuery::expect_invalid(source);
    }
}
