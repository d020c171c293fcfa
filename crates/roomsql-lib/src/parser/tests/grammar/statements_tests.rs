use crate::SqlQuery;

#[test]
fn insert_values() {
    let res = SqlQuery::expect_valid_cst("INSERT INTO t (a, b) VALUES (1, 2)");

    insta::assert_snapshot!(res, @r#"
    File
      InsertStatement
        KwInsert "INSERT"
        KwInto "INTO"
        SingleTableStatementTable
          DefinedTableName
            Ident "t"
        ParenOpen "("
        ColumnName
          Ident "a"
        Comma ","
        ColumnName
          Ident "b"
        ParenClose ")"
        SelectStatement
          SelectCore
            KwValues "VALUES"
            ValuesRow
              ParenOpen "("
              LiteralExpression
                NumericLiteral "1"
              Comma ","
              LiteralExpression
                NumericLiteral "2"
              ParenClose ")"
    "#);
}

#[test]
fn update_with_conflict_resolution() {
    let res = SqlQuery::expect_valid_cst("UPDATE OR IGNORE t SET a = a + 1 WHERE b");

    insta::assert_snapshot!(res, @r#"
    File
      UpdateStatement
        KwUpdate "UPDATE"
        KwOr "OR"
        KwIgnore "IGNORE"
        SingleTableStatementTable
          DefinedTableName
            Ident "t"
        KwSet "SET"
        UpdateAssignment
          ColumnName
            Ident "a"
          Eq "="
          AddExpression
            ColumnRefExpression
              ColumnName
                Ident "a"
            Plus "+"
            LiteralExpression
              NumericLiteral "1"
        WhereClause
          KwWhere "WHERE"
          ColumnRefExpression
            ColumnName
              Ident "b"
    "#);
}

#[test]
fn delete_from_qualified_table() {
    let res = SqlQuery::expect_valid_cst("DELETE FROM main.t NOT INDEXED WHERE id = ?");

    insta::assert_snapshot!(res, @r#"
    File
      DeleteStatement
        KwDelete "DELETE"
        KwFrom "FROM"
        SingleTableStatementTable
          DatabaseName
            Ident "main"
          Dot "."
          DefinedTableName
            Ident "t"
          KwNot "NOT"
          KwIndexed "INDEXED"
        WhereClause
          KwWhere "WHERE"
          EquivalenceExpression
            ColumnRefExpression
              ColumnName
                Ident "id"
            Eq "="
            LiteralExpression
              BindParameter
                NumberedParameter "?"
    "#);
}

#[test]
fn valid_data_statements() {
    for source in [
        "INSERT INTO t DEFAULT VALUES",
        "INSERT OR ROLLBACK INTO t SELECT * FROM u",
        "INSERT INTO t WITH x AS (SELECT 1) SELECT * FROM x",
        "REPLACE INTO temp.t (a) VALUES (:a)",
        "UPDATE t INDEXED BY idx SET a = 1, b = NULL",
        "UPDATE OR REPLACE main.t SET a = (SELECT max(a) FROM t)",
        "DELETE FROM t",
        "DELETE FROM t WHERE a IN (SELECT a FROM u);",
    ] {
        SqlQuery::expect_valid(source);
    }
}
