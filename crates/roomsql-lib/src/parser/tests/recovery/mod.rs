mod coverage_tests;
mod incomplete_tests;
mod unexpected_tests;
