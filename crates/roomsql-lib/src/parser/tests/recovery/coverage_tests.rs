use crate::diagnostics::DiagnosticKind;
use crate::parser::{DEFAULT_RECURSION_LIMIT, SyntaxKind, parse};
use crate::query::QueryBuilder;

fn nested_parens(depth: usize) -> String {
    format!("SELECT {}1{}", "(".repeat(depth), ")".repeat(depth))
}

fn nested_with_tables(depth: usize) -> String {
    let mut input = "SELECT 1".to_string();
    for _ in 0..depth {
        input = format!("WITH a AS ({input}) SELECT 1");
    }
    input
}

#[test]
fn deeply_nested_parentheses_hit_recursion_limit() {
    let input = nested_parens(10_000);

    let parse = parse(&input);
    let errors = parse.errors();

    assert!(parse.hit_recursion_limit());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "nesting too deep");
    assert_eq!(usize::from(errors[0].range.end()), input.len());
    assert_eq!(parse.syntax().text().to_string(), input);
}

#[test]
fn nesting_below_the_limit_is_fine() {
    let depth = (DEFAULT_RECURSION_LIMIT / 4) as usize;
    let parse = parse(&nested_parens(depth));

    assert!(!parse.has_errors());
    assert!(!parse.hit_recursion_limit());
}

#[test]
fn deeply_nested_subqueries_hit_recursion_limit() {
    let depth = 16;
    let mut input = String::new();
    for _ in 0..depth {
        input.push_str("SELECT * FROM (");
    }
    input.push_str("SELECT 1");
    input.push_str(&")".repeat(depth));

    let query = QueryBuilder::new(&input).with_recursion_limit(8).parse();
    let diagnostics = query.diagnostics();

    assert!(!query.is_valid());
    assert_eq!(diagnostics.len(), 1);
    let diagnostic = diagnostics.iter().next().unwrap();
    assert_eq!(diagnostic.kind(), DiagnosticKind::RecursionLimit);
    assert_eq!(usize::from(diagnostic.range().end()), input.len());
}

#[test]
fn recursion_limit_error_node_holds_the_rest() {
    let input = nested_parens(300);

    let parse = parse(&input);
    let error_nodes = parse.error_nodes();

    assert_eq!(error_nodes.len(), 1);
    let (node, message) = &error_nodes[0];
    assert_eq!(node.kind(), SyntaxKind::Error);
    assert_eq!(message, "nesting too deep");
    assert!(node.text().to_string().ends_with(")))"));
}

#[test]
fn deeply_nested_with_clauses_hit_recursion_limit() {
    let input = format!("with {}", "a as (with ".repeat(10_000));

    let parse = parse(&input);
    let errors = parse.errors();

    assert!(parse.hit_recursion_limit());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "nesting too deep");
    assert_eq!(usize::from(errors[0].range.end()), input.len());
    assert_eq!(parse.syntax().text().to_string(), input);
}

#[test]
fn unfinished_with_nesting_below_the_limit_unwinds() {
    let input = format!("with {}", "a as (with ".repeat(100));

    let parse = parse(&input);

    assert!(parse.has_errors());
    assert!(!parse.hit_recursion_limit());
    assert_eq!(parse.syntax().text().to_string(), input);
}

#[test]
fn nested_with_clauses_below_the_limit_are_fine() {
    let parse = parse(&nested_with_tables(50));

    assert!(!parse.has_errors());
    assert!(!parse.hit_recursion_limit());
}
