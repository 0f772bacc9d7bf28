//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Boot-time statistics from `systemd-analyze blame`.
///
/// Normalizes unit start-up durations to seconds and renders them as a
/// markdown table plus bar and pie charts.
#[derive(Debug, Parser)]
#[command(name = "blame-stats", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file (YAML or TOML).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for generated files, overriding the configured one.
    #[arg(short, long, global = true)]
    pub output_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the parsed records.
    Parse {
        /// Blame output to read (defaults to `input_file` from config).
        input: Option<PathBuf>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Append the markdown table to the report file.
    Table {
        /// Blame output to read (defaults to `input_file` from config).
        input: Option<PathBuf>,

        /// Print the table instead of appending it to a file.
        #[arg(long)]
        stdout: bool,
    },

    /// Render bar and/or pie charts as SVG.
    Chart {
        /// Blame output to read (defaults to `input_file` from config).
        input: Option<PathBuf>,

        /// Which chart to render.
        #[arg(long, value_enum, default_value_t = ChartKind::Both)]
        kind: ChartKind,
    },

    /// Write the table and both charts, then print a summary.
    Report {
        /// Blame output to read (defaults to `input_file` from config).
        input: Option<PathBuf>,

        /// Print the full report as JSON instead of writing files.
        #[arg(long)]
        json: bool,
    },
}

/// Chart selection for the `chart` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    Bar,
    Pie,
    Both,
}

impl ChartKind {
    pub const fn includes_bar(self) -> bool {
        matches!(self, Self::Bar | Self::Both)
    }

    pub const fn includes_pie(self) -> bool {
        matches!(self, Self::Pie | Self::Both)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn chart_kind_defaults_to_both() {
        let cli = Cli::try_parse_from(["blame-stats", "chart", "blame.txt"]).unwrap();
        match cli.command {
            Some(Commands::Chart { input, kind }) => {
                assert_eq!(input, Some(PathBuf::from("blame.txt")));
                assert_eq!(kind, ChartKind::Both);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["blame-stats", "table", "-v", "-o", "out", "--stdout"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
        assert!(matches!(
            cli.command,
            Some(Commands::Table {
                input: None,
                stdout: true
            })
        ));
    }

    #[test]
    fn chart_kind_selection() {
        assert!(ChartKind::Bar.includes_bar());
        assert!(!ChartKind::Bar.includes_pie());
        assert!(ChartKind::Both.includes_bar() && ChartKind::Both.includes_pie());
    }
}
