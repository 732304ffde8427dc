// techcommerce/src/commands/validate.rs
//
// USE CASE: Re-run the expectation checkpoint against already-processed
// datasets, without touching the raw files.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;

use techcommerce_core::application::run_checkpoint;
use techcommerce_core::infrastructure::alert::ConsoleAlert;
use techcommerce_core::infrastructure::config::load_pipeline_config;
use techcommerce_core::infrastructure::csv::load_clean_data;
use techcommerce_core::infrastructure::fs::save_json;

pub fn execute(project_dir: PathBuf) -> anyhow::Result<()> {
    println!("⚙️  Loading configuration...");
    let config = load_pipeline_config(&project_dir).with_context(|| {
        format!(
            "Failed to load project configuration from {:?}",
            project_dir
        )
    })?;

    let processed_dir = project_dir.join(&config.processed_path);
    println!("📥 Loading processed datasets from {:?}...", processed_dir);
    let clean = load_clean_data(&processed_dir)?;

    let today = Local::now().date_naive();
    let checkpoint = run_checkpoint(&clean, today, &ConsoleAlert);

    for suite in &checkpoint.suites {
        if suite.success() {
            println!("   ✅ PASS: {} ({} expectations)", suite.suite, suite.expectations);
        } else {
            println!(
                "   ❌ FAIL: {} ({}/{} expectations failed)",
                suite.suite, suite.failed, suite.expectations
            );
        }
    }

    let quality_dir = project_dir.join(&config.quality_path);
    fs::create_dir_all(&quality_dir)?;
    save_json(&quality_dir.join("validation_results.json"), &checkpoint)?;

    if checkpoint.success {
        println!("\n✨ Checkpoint passed.");
    } else if config.strict {
        eprintln!("\n❌ Checkpoint failed (strict mode).");
        std::process::exit(1);
    } else {
        println!("\n⚠️  Checkpoint failed (strict mode OFF).");
    }

    Ok(())
}
