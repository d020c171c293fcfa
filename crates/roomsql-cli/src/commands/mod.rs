pub mod ast;
pub mod check;
pub mod input;
pub mod quote;
pub mod tokens;

#[cfg(test)]
mod check_tests;
