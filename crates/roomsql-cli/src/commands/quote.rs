//! Quote names so they read back as identifiers.

use roomsql_lib::get_valid_name;

pub struct QuoteArgs {
    pub names: Vec<String>,
}

pub fn run(args: QuoteArgs) {
    for name in &args.names {
        tracing::debug!(%name, quoted = roomsql_lib::needs_quoting(name), "quoting");
        println!("{}", get_valid_name(name));
    }
}
