//! Show the token stream of a query.

use roomsql_lib::{SyntaxKind, lex, token_text};
use serde::Serialize;

use super::input::QueryInput;

pub struct TokensArgs {
    pub input: QueryInput,
    pub json: bool,
}

#[derive(Serialize)]
struct TokenRow<'a> {
    kind: String,
    text: &'a str,
    range: Range,
}

#[derive(Serialize)]
struct Range {
    start: u32,
    end: u32,
}

pub fn run(args: TokensArgs) {
    let loaded = args.input.load_or_exit();

    let output = if args.json {
        match tokens_json(&loaded.source) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("error: JSON serialization failed: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        tokens_text(&loaded.source)
    };

    println!("{}", output);
}

/// One token per line: `Kind start..end "text"`.
pub fn tokens_text(source: &str) -> String {
    lex(source)
        .iter()
        .map(|token| {
            format!(
                "{:?} {}..{} {:?}",
                token.kind,
                u32::from(token.span.start()),
                u32::from(token.span.end()),
                token_text(source, token)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn tokens_json(source: &str) -> serde_json::Result<String> {
    let tokens = lex(source);
    let rows: Vec<_> = tokens
        .iter()
        .map(|token| TokenRow {
            kind: kind_name(token.kind),
            text: token_text(source, token),
            range: Range {
                start: token.span.start().into(),
                end: token.span.end().into(),
            },
        })
        .collect();
    serde_json::to_string_pretty(&rows)
}

fn kind_name(kind: SyntaxKind) -> String {
    format!("{kind:?}")
}
