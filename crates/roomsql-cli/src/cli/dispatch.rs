//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `From<*Params>` impls bridge dispatch to the command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::input::QueryInput;
use crate::commands::quote::QuoteArgs;
use crate::commands::tokens::TokensArgs;

pub struct TokensParams {
    pub query_text: Option<String>,
    pub query_file: Option<PathBuf>,
    pub json: bool,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query_text: m.get_one::<String>("query_text").cloned(),
            query_file: m.get_one::<PathBuf>("query_file").cloned(),
            json: m.get_flag("json"),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            input: QueryInput::new(p.query_text, p.query_file),
            json: p.json,
        }
    }
}

pub struct AstParams {
    pub query_text: Option<String>,
    pub query_file: Option<PathBuf>,
    pub trivia: bool,
    pub spans: bool,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query_text: m.get_one::<String>("query_text").cloned(),
            query_file: m.get_one::<PathBuf>("query_file").cloned(),
            trivia: m.get_flag("trivia"),
            spans: m.get_flag("spans"),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            input: QueryInput::new(p.query_text, p.query_file),
            trivia: p.trivia,
            spans: p.spans,
        }
    }
}

pub struct CheckParams {
    pub query_text: Option<String>,
    pub query_file: Option<PathBuf>,
    pub json: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query_text: m.get_one::<String>("query_text").cloned(),
            query_file: m.get_one::<PathBuf>("query_file").cloned(),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: QueryInput::new(p.query_text, p.query_file),
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct QuoteParams {
    pub names: Vec<String>,
}

impl QuoteParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            names: m
                .get_many::<String>("names")
                .map(|names| names.cloned().collect())
                .unwrap_or_default(),
        }
    }
}

impl From<QuoteParams> for QuoteArgs {
    fn from(p: QuoteParams) -> Self {
        Self { names: p.names }
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
