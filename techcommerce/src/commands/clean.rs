// techcommerce/src/commands/clean.rs
//
// USE CASE: Clean generated artifacts.

use std::path::PathBuf;

use anyhow::Context;

use techcommerce_core::application::clean_project;
use techcommerce_core::infrastructure::config::load_pipeline_config;

pub fn execute(project_dir: PathBuf) -> anyhow::Result<()> {
    let config = load_pipeline_config(&project_dir).with_context(|| {
        format!(
            "Failed to load project configuration from {:?}",
            project_dir
        )
    })?;

    if let Err(e) = clean_project(&project_dir, &config) {
        eprintln!("❌ Clean failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
