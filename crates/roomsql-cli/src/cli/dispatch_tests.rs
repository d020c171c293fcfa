//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Query input: positional text and --file are mutually exclusive
//! 2. Params extraction: correct fields are extracted from ArgMatches
//! 3. Global flags: -v is accepted before and after the subcommand

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{ast_command, check_command, quote_command, tokens_command};
use crate::commands::check::CheckArgs;
use crate::commands::input::QueryInput;

#[test]
fn tokens_positional_query() {
    let m = tokens_command()
        .try_get_matches_from(["tokens", "SELECT 1", "--json"])
        .unwrap();
    let params = TokensParams::from_matches(&m);

    assert_eq!(params.query_text.as_deref(), Some("SELECT 1"));
    assert_eq!(params.query_file, None);
    assert!(params.json);
}

#[test]
fn tokens_file_query() {
    let m = tokens_command()
        .try_get_matches_from(["tokens", "-f", "query.sql"])
        .unwrap();
    let params = TokensParams::from_matches(&m);

    assert_eq!(params.query_text, None);
    assert_eq!(params.query_file, Some(PathBuf::from("query.sql")));
    assert!(!params.json);
}

#[test]
fn query_text_conflicts_with_file() {
    let result = check_command().try_get_matches_from(["check", "SELECT 1", "--file", "q.sql"]);

    assert!(result.is_err(), "positional query and --file should conflict");
}

#[test]
fn no_query_means_stdin() {
    let m = check_command().try_get_matches_from(["check"]).unwrap();
    let args: CheckArgs = CheckParams::from_matches(&m).into();

    assert_eq!(args.input, QueryInput::default());
}

#[test]
fn ast_flags() {
    let m = ast_command()
        .try_get_matches_from(["ast", "SELECT 1", "--trivia", "--spans"])
        .unwrap();
    let params = AstParams::from_matches(&m);

    assert_eq!(params.query_text.as_deref(), Some("SELECT 1"));
    assert!(params.trivia);
    assert!(params.spans);
}

#[test]
fn check_color_choice() {
    let default = check_command().try_get_matches_from(["check", "x"]).unwrap();
    assert_eq!(CheckParams::from_matches(&default).color, ColorChoice::Auto);

    let never = check_command()
        .try_get_matches_from(["check", "x", "--color", "never"])
        .unwrap();
    let params = CheckParams::from_matches(&never);
    assert_eq!(params.color, ColorChoice::Never);
    assert!(!params.color.should_colorize());

    let always = check_command()
        .try_get_matches_from(["check", "x", "--color", "always"])
        .unwrap();
    assert!(CheckParams::from_matches(&always).color.should_colorize());
}

#[test]
fn check_rejects_unknown_color() {
    let result = check_command().try_get_matches_from(["check", "x", "--color", "sometimes"]);

    assert!(result.is_err());
}

#[test]
fn quote_collects_names() {
    let m = quote_command()
        .try_get_matches_from(["quote", "user", "order", "first name"])
        .unwrap();
    let params = QuoteParams::from_matches(&m);

    assert_eq!(params.names, ["user", "order", "first name"]);
}

#[test]
fn quote_requires_a_name() {
    let result = quote_command().try_get_matches_from(["quote"]);

    assert!(result.is_err());
}

#[test]
fn verbose_is_global() {
    let before = build_cli()
        .try_get_matches_from(["roomsql", "-v", "check", "SELECT 1"])
        .unwrap();
    assert_eq!(before.get_count("verbose"), 1);

    let after = build_cli()
        .try_get_matches_from(["roomsql", "check", "SELECT 1", "-vvv"])
        .unwrap();
    assert_eq!(after.get_count("verbose"), 3);
}

#[test]
fn subcommand_is_required() {
    let result = build_cli().try_get_matches_from(["roomsql"]);

    assert!(result.is_err());
}

#[test]
fn help_lists_check_flags() {
    let help = check_command().render_help().to_string();

    assert!(help.contains("--json"));
    assert!(help.contains("--color"));
    assert!(help.contains("--file"));
}
