mod expressions_tests;
mod schema_tests;
mod select_tests;
mod statements_tests;
