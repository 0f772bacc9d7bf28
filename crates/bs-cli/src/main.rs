use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bs_cli::commands::{chart, parse, report, table, util};
use bs_cli::{Cli, Commands, Config};

/// Load config and apply command-line overrides.
fn load_config(config_path: Option<&Path>, output_dir: Option<&Path>) -> Result<Config> {
    let mut config = Config::load_from(config_path).context("failed to load configuration")?;
    if let Some(dir) = output_dir {
        config.output_dir = dir.to_path_buf();
    }
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let Some(command) = &cli.command else {
        // No subcommand, show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = load_config(cli.config.as_deref(), cli.output_dir.as_deref())?;
    let mut stdout = io::stdout().lock();

    match command {
        Commands::Parse { input, json } => {
            let input = util::resolve_input(input.as_deref(), &config)?;
            parse::run(&mut stdout, &config, &input, *json)?;
        }
        Commands::Table { input, stdout: to_stdout } => {
            let input = util::resolve_input(input.as_deref(), &config)?;
            table::run(&mut stdout, &config, &input, *to_stdout)?;
        }
        Commands::Chart { input, kind } => {
            let input = util::resolve_input(input.as_deref(), &config)?;
            chart::run(&mut stdout, &config, &input, *kind)?;
        }
        Commands::Report { input, json } => {
            let input = util::resolve_input(input.as_deref(), &config)?;
            report::run(&mut stdout, &config, &input, *json)?;
        }
    }

    Ok(())
}
