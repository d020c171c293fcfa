use crate::SqlQuery;

#[test]
fn equality_is_left_associative() {
    let res = SqlQuery::expect_valid_cst("SELECT 2 == 2 == 1");

    insta::assert_snapshot!(res, @r#"
    File
      SelectStatement
        SelectCore
          KwSelect "SELECT"
          ResultColumns
            ResultColumn
              EquivalenceExpression
                EquivalenceExpression
                  LiteralExpression
                    NumericLiteral "2"
                  EqEq "=="
                  LiteralExpression
                    NumericLiteral "2"
                EqEq "=="
                LiteralExpression
                  NumericLiteral "1"
    "#);
}

#[test]
fn addition_binds_tighter_than_like() {
    let res = SqlQuery::expect_valid_cst("SELECT 10 + 10 LIKE 10");

    insta::assert_snapshot!(res, @r#"
    File
      SelectStatement
        SelectCore
          KwSelect "SELECT"
          ResultColumns
            ResultColumn
              LikeExpression
                AddExpression
                  LiteralExpression
                    NumericLiteral "10"
                  Plus "+"
                  LiteralExpression
                    NumericLiteral "10"
                KwLike "LIKE"
                LiteralExpression
                  NumericLiteral "10"
    "#);
}

#[test]
fn and_binds_tighter_than_or() {
    let res = SqlQuery::expect_valid_cst("SELECT a = 1 OR b IN (2, 3) AND c LIKE 3");

    insta::assert_snapshot!(res, @r#"
    File
      SelectStatement
        SelectCore
          KwSelect "SELECT"
          ResultColumns
            ResultColumn
              OrExpression
                EquivalenceExpression
                  ColumnRefExpression
                    ColumnName
                      Ident "a"
                  Eq "="
                  LiteralExpression
                    NumericLiteral "1"
                KwOr "OR"
                AndExpression
                  InExpression
                    ColumnRefExpression
                      ColumnName
                        Ident "b"
                    KwIn "IN"
                    ParenOpen "("
                    LiteralExpression
                      NumericLiteral "2"
                    Comma ","
                    LiteralExpression
                      NumericLiteral "3"
                    ParenClose ")"
                  KwAnd "AND"
                  LikeExpression
                    ColumnRefExpression
                      ColumnName
                        Ident "c"
                    KwLike "LIKE"
                    LiteralExpression
                      NumericLiteral "3"
    "#);
}

#[test]
fn arithmetic_tiers() {
    let res = SqlQuery::expect_valid_cst("SELECT 1 + 2 * 3 - 4");

    insta::assert_snapshot!(res, @r#"
    File
      SelectStatement
        SelectCore
          KwSelect "SELECT"
          ResultColumns
            ResultColumn
              AddExpression
                AddExpression
                  LiteralExpression
                    NumericLiteral "1"
                  Plus "+"
                  MulExpression
                    LiteralExpression
                      NumericLiteral "2"
                    Star "*"
                    LiteralExpression
                      NumericLiteral "3"
                Minus "-"
                LiteralExpression
                  NumericLiteral "4"
    "#);
}

#[test]
fn prefix_not_binds_to_operand() {
    let res = SqlQuery::expect_valid_cst("SELECT NOT a = b");

    insta::assert_snapshot!(res, @r#"
    File
      SelectStatement
        SelectCore
          KwSelect "SELECT"
          ResultColumns
            ResultColumn
              EquivalenceExpression
                UnaryExpression
                  KwNot "NOT"
                  ColumnRefExpression
                    ColumnName
                      Ident "a"
                Eq "="
                ColumnRefExpression
                  ColumnName
                    Ident "b"
    "#);
}

#[test]
fn between_bounds_bind_tighter_than_and() {
    let res = SqlQuery::expect_valid_cst("SELECT a BETWEEN 1 AND 2 AND b");

    insta::assert_snapshot!(res, @r#"
    File
      SelectStatement
        SelectCore
          KwSelect "SELECT"
          ResultColumns
            ResultColumn
              AndExpression
                BetweenExpression
                  ColumnRefExpression
                    ColumnName
                      Ident "a"
                  KwBetween "BETWEEN"
                  LiteralExpression
                    NumericLiteral "1"
                  KwAnd "AND"
                  LiteralExpression
                    NumericLiteral "2"
                KwAnd "AND"
                ColumnRefExpression
                  ColumnName
                    Ident "b"
    "#);
}

#[test]
fn collate_binds_tightest() {
    let res = SqlQuery::expect_valid_cst("SELECT a || b COLLATE nocase");

    insta::assert_snapshot!(res, @r#"
    File
      SelectStatement
        SelectCore
          KwSelect "SELECT"
          ResultColumns
            ResultColumn
              ConcatExpression
                ColumnRefExpression
                  ColumnName
                    Ident "a"
                Concat "||"
                CollateExpression
                  ColumnRefExpression
                    ColumnName
                      Ident "b"
                  KwCollate "COLLATE"
                  CollationName
                    Ident "nocase"
    "#);
}

#[test]
fn negated_operators() {
    let res = SqlQuery::expect_valid_cst("SELECT x IS NOT NULL, y NOT IN t");

    insta::assert_snapshot!(res, @r#"
    File
      SelectStatement
        SelectCore
          KwSelect "SELECT"
          ResultColumns
            ResultColumn
              EquivalenceExpression
                ColumnRefExpression
                  ColumnName
                    Ident "x"
                KwIs "IS"
                KwNot "NOT"
                LiteralExpression
                  KwNull "NULL"
            Comma ","
            ResultColumn
              InExpression
                ColumnRefExpression
                  ColumnName
                    Ident "y"
                KwNot "NOT"
                KwIn "IN"
                DefinedTableName
                  Ident "t"
    "#);
}

#[test]
fn cast_and_exists() {
    let res = SqlQuery::expect_valid_cst("SELECT CAST(a AS TEXT), EXISTS (SELECT 1)");

    insta::assert_snapshot!(res, @r#"
    File
      SelectStatement
        SelectCore
          KwSelect "SELECT"
          ResultColumns
            ResultColumn
              CastExpression
                KwCast "CAST"
                ParenOpen "("
                ColumnRefExpression
                  ColumnName
                    Ident "a"
                KwAs "AS"
                TypeName
                  Ident "TEXT"
                ParenClose ")"
            Comma ","
            ResultColumn
              ExistsExpression
                KwExists "EXISTS"
                ParenOpen "("
                SelectStatement
                  SelectCore
                    KwSelect "SELECT"
                    ResultColumns
                      ResultColumn
                        LiteralExpression
                          NumericLiteral "1"
                ParenClose ")"
    "#);
}

#[test]
fn bind_parameter() {
    let res = SqlQuery::expect_valid_cst("SELECT :id");

    insta::assert_snapshot!(res, @r#"
    File
      SelectStatement
        SelectCore
          KwSelect "SELECT"
          ResultColumns
            ResultColumn
              LiteralExpression
                BindParameter
                  NamedParameter ":id"
    "#);
}

#[test]
fn valid_expressions() {
    for expr in [
        "-1",
        "+a",
        "~a & b | c << 2 >> 1",
        "a <> b",
        "a != b",
        "a IS b",
        "a NOT BETWEEN 1 AND 2",
        "a NOT LIKE 'x' ESCAPE '!'",
        "a GLOB '*' OR a REGEXP 'x' OR a MATCH 'y'",
        "a ISNULL OR b NOTNULL OR c NOT NULL",
        "a IN ()",
        "a IN (SELECT b FROM t)",
        "a IN main.t",
        "(a, b) = (1, 2)",
        "NOT EXISTS (SELECT 1)",
        "(SELECT max(x) FROM t)",
        "CASE WHEN a THEN 1 WHEN b THEN 2 ELSE 3 END",
        "CASE a WHEN 1 THEN 'one' END",
        "CAST(a AS VARCHAR(10))",
        "replace(a, 'x', 'y')",
        "like(a, b)",
        "main.t.c",
        "\"quoted\".[column]",
        "x'00ff'",
        "NULL, TRUE, FALSE, CURRENT_TIME, CURRENT_DATE, CURRENT_TIMESTAMP",
        "@a, $b, ?, ?7",
        "a % 2 / 3",
    ] {
        SqlQuery::expect_valid(&format!("SELECT {expr}"));
    }
}
