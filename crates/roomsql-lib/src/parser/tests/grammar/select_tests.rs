use crate::SqlQuery;
use indoc::indoc;

#[test]
fn simple_select() {
    let res = SqlQuery::expect_valid_cst("SELECT * FROM foo");

    insta::assert_snapshot!(res, @r#"
    File
      SelectStatement
        SelectCore
          KwSelect "SELECT"
          ResultColumns
            ResultColumn
              Star "*"
          FromClause
            KwFrom "FROM"
            TableOrSubquery
              DefinedTableName
                Ident "foo"
    "#);
}

#[test]
fn trailing_semicolon_belongs_to_file() {
    let res = SqlQuery::expect_valid_cst("SELECT 1;");

    insta::assert_snapshot!(res, @r#"
    File
      SelectStatement
        SelectCore
          KwSelect "SELECT"
          ResultColumns
            ResultColumn
              LiteralExpression
                NumericLiteral "1"
      Semicolon ";"
    "#);
}

#[test]
fn all_clauses() {
    let input = indoc! {"
        SELECT DISTINCT a AS x
        FROM main.t AS u
        WHERE a > 1
        GROUP BY a
        HAVING count(*) > 1
    "};

    let res = SqlQuery::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    File
      SelectStatement
        SelectCore
          KwSelect "SELECT"
          KwDistinct "DISTINCT"
          ResultColumns
            ResultColumn
              ColumnRefExpression
                ColumnName
                  Ident "a"
              KwAs "AS"
              ColumnAliasName
                Ident "x"
          FromClause
            KwFrom "FROM"
            TableOrSubquery
              DatabaseName
                Ident "main"
              Dot "."
              DefinedTableName
                Ident "t"
              KwAs "AS"
              TableAliasName
                Ident "u"
          WhereClause
            KwWhere "WHERE"
            ComparisonExpression
              ColumnRefExpression
                ColumnName
                  Ident "a"
              Gt ">"
              LiteralExpression
                NumericLiteral "1"
          GroupByClause
            KwGroup "GROUP"
            KwBy "BY"
            ColumnRefExpression
              ColumnName
                Ident "a"
          HavingClause
            KwHaving "HAVING"
            ComparisonExpression
              FunctionCallExpression
                FunctionName
                  Ident "count"
                ParenOpen "("
                Star "*"
                ParenClose ")"
              Gt ">"
              LiteralExpression
                NumericLiteral "1"
    "#);
}

#[test]
fn compound_with_order_and_limit() {
    let res = SqlQuery::expect_valid_cst("SELECT a FROM x UNION ALL VALUES (1) ORDER BY a LIMIT 1, 2");

    insta::assert_snapshot!(res, @r#"
    File
      SelectStatement
        SelectCore
          KwSelect "SELECT"
          ResultColumns
            ResultColumn
              ColumnRefExpression
                ColumnName
                  Ident "a"
          FromClause
            KwFrom "FROM"
            TableOrSubquery
              DefinedTableName
                Ident "x"
        CompoundOperator
          KwUnion "UNION"
          KwAll "ALL"
        SelectCore
          KwValues "VALUES"
          ValuesRow
            ParenOpen "("
            LiteralExpression
              NumericLiteral "1"
            ParenClose ")"
        OrderClause
          KwOrder "ORDER"
          KwBy "BY"
          OrderingTerm
            ColumnRefExpression
              ColumnName
                Ident "a"
        LimitClause
          KwLimit "LIMIT"
          LiteralExpression
            NumericLiteral "1"
          Comma ","
          LiteralExpression
            NumericLiteral "2"
    "#);
}

#[test]
fn join_chain() {
    let res =
        SqlQuery::expect_valid_cst("SELECT * FROM a LEFT OUTER JOIN b ON a.id = b.id CROSS JOIN c");

    insta::assert_snapshot!(res, @r#"
    File
      SelectStatement
        SelectCore
          KwSelect "SELECT"
          ResultColumns
            ResultColumn
              Star "*"
          FromClause
            KwFrom "FROM"
            TableOrSubquery
              DefinedTableName
                Ident "a"
            JoinOperator
              KwLeft "LEFT"
              KwOuter "OUTER"
              KwJoin "JOIN"
            TableOrSubquery
              DefinedTableName
                Ident "b"
            JoinConstraint
              KwOn "ON"
              EquivalenceExpression
                ColumnRefExpression
                  SelectedTableName
                    Ident "a"
                  Dot "."
                  ColumnName
                    Ident "id"
                Eq "="
                ColumnRefExpression
                  SelectedTableName
                    Ident "b"
                  Dot "."
                  ColumnName
                    Ident "id"
            JoinOperator
              KwCross "CROSS"
              KwJoin "JOIN"
            TableOrSubquery
              DefinedTableName
                Ident "c"
    "#);
}

#[test]
fn subquery_with_alias() {
    let res = SqlQuery::expect_valid_cst("SELECT * FROM (SELECT 1) s");

    insta::assert_snapshot!(res, @r#"
    File
      SelectStatement
        SelectCore
          KwSelect "SELECT"
          ResultColumns
            ResultColumn
              Star "*"
          FromClause
            KwFrom "FROM"
            TableOrSubquery
              SelectSubquery
                ParenOpen "("
                SelectStatement
                  SelectCore
                    KwSelect "SELECT"
                    ResultColumns
                      ResultColumn
                        LiteralExpression
                          NumericLiteral "1"
                ParenClose ")"
              TableAliasName
                Ident "s"
    "#);
}

#[test]
fn with_clause() {
    let res = SqlQuery::expect_valid_cst("WITH t(a) AS (SELECT 1) SELECT a FROM t");

    insta::assert_snapshot!(res, @r#"
    File
      WithClauseStatement
        WithClause
          KwWith "WITH"
          WithClauseTable
            TableDefinitionName
              Ident "t"
            ParenOpen "("
            ColumnDefinitionName
              Ident "a"
            ParenClose ")"
            KwAs "AS"
            ParenOpen "("
            SelectStatement
              SelectCore
                KwSelect "SELECT"
                ResultColumns
                  ResultColumn
                    LiteralExpression
                      NumericLiteral "1"
            ParenClose ")"
        SelectStatement
          SelectCore
            KwSelect "SELECT"
            ResultColumns
              ResultColumn
                ColumnRefExpression
                  ColumnName
                    Ident "a"
            FromClause
              KwFrom "FROM"
              TableOrSubquery
                DefinedTableName
                  Ident "t"
    "#);
}

#[test]
fn valid_selects() {
    for source in [
        "select * from foo",
        "SELECT t.*, `x y` FROM t",
        "SELECT a FROM t1, t2 NATURAL JOIN t3 INNER JOIN t4 USING (id)",
        "SELECT * FROM (a JOIN b) AS nested",
        "SELECT * FROM t INDEXED BY idx WHERE a",
        "SELECT * FROM temp.t NOT INDEXED",
        "SELECT a FROM t EXCEPT SELECT b FROM u INTERSECT SELECT c FROM v",
        "SELECT a FROM t ORDER BY a COLLATE nocase ASC, b DESC LIMIT 10 OFFSET 20",
        "WITH RECURSIVE n(x) AS (VALUES (1) UNION ALL SELECT x + 1 FROM n) SELECT x FROM n",
        "VALUES (1, 'a'), (2, 'b');",
        "SELECT count(DISTINCT a), max(b) FROM t GROUP BY c, d HAVING count() > 0",
        "SELECT * FROM [table] AS \"alias\"",
    ] {
        SqlQuery::expect_valid(source);
    }
}

#[test]
fn trivia_belongs_to_the_enclosing_node() {
    let source = indoc! {"
        -- users by id
        SELECT a, /* b */ b
        FROM t
        WHERE a = 1 AND b
    "};
    let query = SqlQuery::expect_valid(source);

    for node in query.syntax().descendants().skip(1) {
        if let Some(first) = node.first_token() {
            assert!(
                !first.kind().is_trivia(),
                "{:?} starts with {:?}",
                node.kind(),
                first.kind()
            );
        }
    }
    assert_eq!(query.syntax().text().to_string(), source);
}
