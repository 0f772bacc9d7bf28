//! blame-stats CLI library.
//!
//! This crate provides the CLI interface, configuration, and chart rendering
//! around the `bs-core` parsing and formatting logic.

mod cli;
pub mod commands;
mod config;
pub mod svg;

pub use cli::{ChartKind, Cli, Commands};
pub use config::{BarChartConfig, Config, ConfigError, PieChartConfig};
