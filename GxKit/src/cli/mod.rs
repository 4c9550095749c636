//! GxKit CLI - Command-line interface for ART banks and GXTX textures

pub mod commands;
pub mod progress;

use clap::Parser;
use commands::Commands;

#[derive(Parser)]
#[command(name = "gxkit")]
#[command(version)]
#[command(about = "GxKit: ART bank and GXTX texture tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Run the GxKit CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.command.execute()?;

    Ok(())
}
