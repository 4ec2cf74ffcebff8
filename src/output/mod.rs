//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::print_solve_report;
pub use formatters::format_elapsed;
