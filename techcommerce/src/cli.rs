// techcommerce/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "techcommerce")]
#[command(about = "The TechCommerce Data-Quality Correction & Validation Pipeline", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🚀 Runs the full pipeline (Load -> Correct -> Write -> Validate)
    Run {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },

    /// 🔍 Detects quality problems in the raw datasets and prints the
    /// prioritized report
    Analyze {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Exit with error if any Crítica-priority problem is found
        #[arg(long)]
        check: bool,
    },

    /// 🧪 Re-runs the expectation checkpoint against the processed datasets
    Validate {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },

    /// 🧹 Cleans generated artifacts (processed + quality folders)
    Clean {
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },
}
