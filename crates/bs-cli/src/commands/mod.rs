//! CLI subcommand implementations.

pub mod chart;
pub mod parse;
pub mod report;
pub mod table;
pub mod util;
