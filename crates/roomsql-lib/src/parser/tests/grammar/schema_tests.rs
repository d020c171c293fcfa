use crate::SqlQuery;
use indoc::indoc;

#[test]
fn create_table_with_column_constraints() {
    let res = SqlQuery::expect_valid_cst(
        "CREATE TABLE t (id INTEGER PRIMARY KEY, name TEXT NOT NULL DEFAULT 'x')",
    );

    insta::assert_snapshot!(res, @r#"
    File
      CreateTableStatement
        KwCreate "CREATE"
        KwTable "TABLE"
        TableDefinitionName
          Ident "t"
        ParenOpen "("
        ColumnDefinition
          ColumnDefinitionName
            Ident "id"
          TypeName
            Ident "INTEGER"
          ColumnConstraint
            KwPrimary "PRIMARY"
            KwKey "KEY"
        Comma ","
        ColumnDefinition
          ColumnDefinitionName
            Ident "name"
          TypeName
            Ident "TEXT"
          ColumnConstraint
            KwNot "NOT"
            KwNull "NULL"
          ColumnConstraint
            KwDefault "DEFAULT"
            LiteralExpression
              SingleQuoteStringLiteral "'x'"
        ParenClose ")"
    "#);
}

#[test]
fn create_table_with_table_constraints() {
    let input = indoc! {"
        CREATE TABLE t (
          a,
          b,
          PRIMARY KEY (a, b),
          FOREIGN KEY (b) REFERENCES u (id) ON DELETE SET NULL
        ) WITHOUT ROWID
    "};

    let res = SqlQuery::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    File
      CreateTableStatement
        KwCreate "CREATE"
        KwTable "TABLE"
        TableDefinitionName
          Ident "t"
        ParenOpen "("
        ColumnDefinition
          ColumnDefinitionName
            Ident "a"
        Comma ","
        ColumnDefinition
          ColumnDefinitionName
            Ident "b"
        Comma ","
        TableConstraint
          KwPrimary "PRIMARY"
          KwKey "KEY"
          ParenOpen "("
          IndexedColumn
            ColumnName
              Ident "a"
          Comma ","
          IndexedColumn
            ColumnName
              Ident "b"
          ParenClose ")"
        Comma ","
        TableConstraint
          KwForeign "FOREIGN"
          KwKey "KEY"
          ParenOpen "("
          ColumnName
            Ident "b"
          ParenClose ")"
          ForeignKeyClause
            KwReferences "REFERENCES"
            ForeignTable
              Ident "u"
            ParenOpen "("
            ColumnName
              Ident "id"
            ParenClose ")"
            KwOn "ON"
            KwDelete "DELETE"
            KwSet "SET"
            KwNull "NULL"
        ParenClose ")"
        KwWithout "WITHOUT"
        Ident "ROWID"
    "#);
}

#[test]
fn alter_table_add_column() {
    let res = SqlQuery::expect_valid_cst("ALTER TABLE t ADD COLUMN c TEXT DEFAULT 0");

    insta::assert_snapshot!(res, @r#"
    File
      AlterTableStatement
        KwAlter "ALTER"
        KwTable "TABLE"
        SingleTableStatementTable
          DefinedTableName
            Ident "t"
        KwAdd "ADD"
        KwColumn "COLUMN"
        ColumnDefinition
          ColumnDefinitionName
            Ident "c"
          TypeName
            Ident "TEXT"
          ColumnConstraint
            KwDefault "DEFAULT"
            SignedNumber
              NumericLiteral "0"
    "#);
}

#[test]
fn pragma_with_signed_value() {
    let res = SqlQuery::expect_valid_cst("PRAGMA main.cache_size = -2000");

    insta::assert_snapshot!(res, @r#"
    File
      PragmaStatement
        KwPragma "PRAGMA"
        DatabaseName
          Ident "main"
        Dot "."
        PragmaName
          Ident "cache_size"
        Eq "="
        PragmaValue
          SignedNumber
            Minus "-"
            NumericLiteral "2000"
    "#);
}

#[test]
fn pragma_with_keyword_value() {
    let res = SqlQuery::expect_valid_cst("PRAGMA foreign_keys(ON)");

    insta::assert_snapshot!(res, @r#"
    File
      PragmaStatement
        KwPragma "PRAGMA"
        PragmaName
          Ident "foreign_keys"
        ParenOpen "("
        PragmaValue
          KwOn "ON"
        ParenClose ")"
    "#);
}

#[test]
fn valid_schema_statements() {
    for source in [
        "CREATE TEMP TABLE IF NOT EXISTS t AS SELECT 1",
        "CREATE TEMPORARY TABLE main.t (a)",
        "CREATE TABLE t (a INT CONSTRAINT pk PRIMARY KEY DESC ON CONFLICT FAIL AUTOINCREMENT)",
        "CREATE TABLE t (a UNIQUE ON CONFLICT ABORT NULL CHECK (a > 0) COLLATE nocase)",
        "CREATE TABLE t (a DEFAULT (1 + 2), b DEFAULT +5, c DEFAULT CURRENT_TIMESTAMP)",
        "CREATE TABLE t (a REFERENCES u ON UPDATE NO ACTION MATCH simple NOT DEFERRABLE)",
        "CREATE TABLE t (a REFERENCES u (id) DEFERRABLE INITIALLY DEFERRED)",
        "CREATE TABLE t (a double precision, b unsigned big int(8, +2))",
        "CREATE TABLE t (a, CONSTRAINT c CHECK (a), UNIQUE (a COLLATE binary ASC) ON CONFLICT REPLACE)",
        "CREATE TABLE t (a, FOREIGN KEY (a) REFERENCES u ON DELETE RESTRICT) without rowid",
        "ALTER TABLE t RENAME TO u",
        "ALTER TABLE main.t RENAME COLUMN a TO b",
        "ALTER TABLE t RENAME a TO b",
        "ALTER TABLE t DROP COLUMN a",
        "ALTER TABLE t ADD b",
        "PRAGMA journal_mode = DELETE",
        "PRAGMA synchronous = 'full'",
        "PRAGMA cache_size(+100)",
        "PRAGMA table_info",
        "PRAGMA temp.x = NULL",
    ] {
        SqlQuery::expect_valid(source);
    }
}
