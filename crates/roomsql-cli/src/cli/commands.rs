//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("roomsql")
        .about("Lossless parser and checker for SQLite queries in ORM annotations")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(tokens_command())
        .subcommand(ast_command())
        .subcommand(check_command())
        .subcommand(quote_command())
}

/// Show the token stream of a query.
pub fn tokens_command() -> Command {
    Command::new("tokens")
        .about("Show the tokens of a query")
        .override_usage(
            "\
  roomsql tokens <QUERY>
  roomsql tokens -f <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  roomsql tokens 'SELECT * FROM user'   # one token per line
  roomsql tokens -f query.sql --json    # kind, text and range as JSON
  echo 'SELECT 1' | roomsql tokens      # from stdin"#,
        )
        .arg(query_text_arg())
        .arg(query_file_arg())
        .arg(json_arg())
}

/// Show the syntax tree of a query.
pub fn ast_command() -> Command {
    Command::new("ast")
        .about("Show the concrete syntax tree of a query")
        .override_usage(
            "\
  roomsql ast <QUERY>
  roomsql ast -f <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  roomsql ast 'SELECT a FROM t'            # nodes and tokens
  roomsql ast 'SELECT a FROM t' --spans    # with byte ranges
  roomsql ast -f query.sql --trivia        # keep whitespace and comments"#,
        )
        .arg(query_text_arg())
        .arg(query_file_arg())
        .arg(trivia_arg())
        .arg(spans_arg())
}

/// Validate a query.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a query")
        .override_usage(
            "\
  roomsql check <QUERY>
  roomsql check -f <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  roomsql check 'SELECT * FROM user'    # silent on success
  roomsql check -f query.sql            # annotated report on failure
  roomsql check -f query.sql --json     # diagnostics as JSON"#,
        )
        .arg(query_text_arg())
        .arg(query_file_arg())
        .arg(json_arg())
        .arg(color_arg())
}

/// Quote names so they read back as identifiers.
pub fn quote_command() -> Command {
    Command::new("quote")
        .about("Quote names that are keywords or not plain identifiers")
        .after_help(
            r#"EXAMPLES:
  roomsql quote user order "first name"   # user, `order`, `first name`"#,
        )
        .arg(names_arg())
}
