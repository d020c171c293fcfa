//! Validate a query.

use roomsql_lib::{Diagnostics, Error, QueryBuilder};
use serde::Serialize;

use super::input::QueryInput;

pub struct CheckArgs {
    pub input: QueryInput,
    pub json: bool,
    pub color: bool,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub valid: bool,
    pub diagnostics: Diagnostics,
}

pub fn run(args: CheckArgs) {
    let loaded = args.input.load_or_exit();
    let report = check(&loaded.source);

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: JSON serialization failed: {}", e);
                std::process::exit(1);
            }
        }
    } else if !report.diagnostics.is_empty() {
        let mut printer = report
            .diagnostics
            .printer()
            .source(&loaded.source)
            .colored(args.color);
        if let Some(path) = loaded.path.as_deref() {
            printer = printer.path(path);
        }
        eprint!("{}", printer.render());
    }

    if !report.valid {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}

/// Validity plus every diagnostic, warnings included. Empty input is reported as a missing
/// statement.
pub fn check(source: &str) -> CheckReport {
    let query = QueryBuilder::new(source).parse();
    match query.into_result() {
        Ok(query) => CheckReport {
            valid: true,
            diagnostics: query.diagnostics(),
        },
        Err(Error::InvalidQuery(diagnostics)) => {
            tracing::info!(errors = diagnostics.error_count(), "invalid query");
            CheckReport {
                valid: false,
                diagnostics,
            }
        }
    }
}
