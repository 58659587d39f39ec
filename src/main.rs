//! Tic-tac-toe solver - CLI entry point.

use anyhow::Result;
use clap::Parser;
use tictactoe_solver::{
    apply_config_filter, execute, initial_filter, subscriber, Cli, OutputFormat, SolverConfig,
};
use tracing::debug;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let (subscriber, filter_handle) = subscriber(initial_filter(), std::io::stderr);
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = SolverConfig::load(cli.config.as_deref())?;
    if cli.json {
        config = config.with_format(OutputFormat::Json);
    }
    apply_config_filter(&filter_handle, &config)?;

    debug!(?config, "Configuration resolved");

    let output = execute(cli.command, &config)?;
    println!("{}", output);
    Ok(())
}
