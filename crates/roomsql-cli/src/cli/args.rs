//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Inline query text (positional).
pub fn query_text_arg() -> Arg {
    Arg::new("query_text")
        .value_name("QUERY")
        .help("Query text (reads --file or stdin when omitted)")
}

/// Query file (-f/--file). `-` reads stdin.
pub fn query_file_arg() -> Arg {
    Arg::new("query_file")
        .short('f')
        .long("file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("query_text")
        .help("Read the query from a file")
}

/// Machine-readable output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output JSON")
}

/// Show whitespace and comments (--trivia).
pub fn trivia_arg() -> Arg {
    Arg::new("trivia")
        .long("trivia")
        .action(ArgAction::SetTrue)
        .help("Include whitespace and comment tokens")
}

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show source positions")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Names to quote (positional, one or more).
pub fn names_arg() -> Arg {
    Arg::new("names")
        .value_name("NAME")
        .required(true)
        .num_args(1..)
        .help("Table, column or alias names")
}

/// Log verbosity (-v, -vv, -vvv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Log more to stderr (-v info, -vv debug, -vvv trace)")
}
