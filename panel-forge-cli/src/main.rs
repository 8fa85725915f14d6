//! panel-forge CLI tool

#![forbid(unsafe_code)]

mod commands;
mod observability;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{InitConfigCommand, MakeResourceCommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "panel-forge")]
#[command(version)]
#[command(about = "Scaffold Filament admin panel resources", long_about = None)]
struct Cli {
    /// Project root (where `panel-forge.toml` and `app/` live)
    #[arg(short = 'C', long, global = true, default_value = ".")]
    project_root: PathBuf,

    /// Show debug output on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a resource bundle (schemas, table, resource, pages)
    MakeResource(MakeResourceCommand),
    /// Write a default panel-forge.toml
    InitConfig(InitConfigCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    observability::init(cli.verbose)?;

    match cli.command {
        Commands::MakeResource(cmd) => cmd.execute(&cli.project_root)?,
        Commands::InitConfig(cmd) => {
            cmd.execute(&cli.project_root)?;
        }
    }

    Ok(())
}
