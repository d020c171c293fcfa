//! Show the concrete syntax tree of a query.

use roomsql_lib::SqlQuery;

use super::input::QueryInput;

pub struct AstArgs {
    pub input: QueryInput,
    pub trivia: bool,
    pub spans: bool,
}

pub fn run(args: AstArgs) {
    let loaded = args.input.load_or_exit();
    let query = SqlQuery::new(&loaded.source);

    // The tree is printed even for invalid queries; error nodes carry their messages.
    print!("{}", render_ast(&query, args.trivia, args.spans));

    let diagnostics = query.diagnostics();
    if !diagnostics.is_empty() {
        eprint!("{}", diagnostics.printer().render());
    }
}

pub fn render_ast(query: &SqlQuery<'_>, trivia: bool, spans: bool) -> String {
    query
        .printer()
        .with_trivia(trivia)
        .with_spans(spans)
        .dump()
}
