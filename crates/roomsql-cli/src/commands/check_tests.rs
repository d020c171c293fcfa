use super::check::check;
use roomsql_lib::{DiagnosticKind, Severity};

#[test]
fn valid_query_has_no_diagnostics() {
    let report = check("SELECT name FROM users WHERE id = :id");

    assert!(report.valid);
    assert!(report.diagnostics.is_empty());
}

#[test]
fn empty_input_reports_missing_statement() {
    let report = check("");

    assert!(!report.valid);
    let messages: Vec<_> = report.diagnostics.iter().map(|d| d.to_string()).collect();
    assert_eq!(messages, ["error at 0..0: <statement> expected"]);
}

#[test]
fn syntax_error_is_invalid() {
    let report = check("DELETE ");

    assert!(!report.valid);
    assert_eq!(report.diagnostics.error_count(), 1);
    let first = report.diagnostics.iter().next().unwrap();
    assert_eq!(first.kind(), DiagnosticKind::Syntax);
    assert_eq!(first.message(), "FROM expected");
}

#[test]
fn warnings_keep_query_valid() {
    let report = check("SELECT 1 /* note");

    assert!(report.valid);
    assert_eq!(report.diagnostics.warning_count(), 1);
    let warning = report.diagnostics.iter().next().unwrap();
    assert_eq!(warning.severity(), Severity::Warning);
    assert_eq!(warning.kind(), DiagnosticKind::UnterminatedComment);
}

#[test]
fn report_serializes_as_json() {
    let report = check("SELECT 1");

    insta::assert_snapshot!(serde_json::to_string(&report).unwrap(), @r#"{"valid":true,"diagnostics":[]}"#);
}
