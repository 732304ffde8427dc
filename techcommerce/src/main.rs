// techcommerce/src/main.rs

mod cli;
mod commands;

use clap::Parser;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug techcommerce run ... to see the details
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { project_dir } => commands::run::execute(project_dir),
        Commands::Analyze { project_dir, check } => commands::analyze::execute(project_dir, check),
        Commands::Validate { project_dir } => commands::validate::execute(project_dir),
        Commands::Clean { project_dir } => commands::clean::execute(project_dir),
    }
}
