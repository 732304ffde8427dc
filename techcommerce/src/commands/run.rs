// techcommerce/src/commands/run.rs
//
// USE CASE: Run the full data-quality pipeline.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;

use techcommerce_core::application::pipeline::RunResult;
use techcommerce_core::application::{correct_all, run_checkpoint};
use techcommerce_core::infrastructure::alert::ConsoleAlert;
use techcommerce_core::infrastructure::config::load_pipeline_config;
use techcommerce_core::infrastructure::csv::{PROCESSED_DELIMITER, load_raw_data, write_dataset};
use techcommerce_core::infrastructure::fs::save_json;

pub fn execute(project_dir: PathBuf) -> anyhow::Result<()> {
    let start = std::time::Instant::now();

    // A. Load the Config (Infra)
    println!("⚙️  Loading configuration...");
    let config = load_pipeline_config(&project_dir).with_context(|| {
        format!(
            "Failed to load project configuration from {:?}",
            project_dir
        )
    })?;
    println!("   Project: {} (v{})", config.name, config.version);

    // The reference date for every temporal rule comes from here, once.
    let today = Local::now().date_naive();

    // B. Load raw datasets
    let raw_dir = project_dir.join(&config.raw_path);
    println!("📥 Loading raw datasets from {:?}...", raw_dir);
    let raw = load_raw_data(&raw_dir)?;

    // C. Correct in dependency order (Application Layer)
    println!("🧼 Applying automatic corrections...");
    let (clean, stages) = correct_all(&raw, today)?;
    for stage in &stages {
        println!(
            "   ✅ {}: {} → {} rows",
            stage.dataset, stage.before, stage.after
        );
    }

    // D. Write processed datasets (semicolon-separated, derived columns)
    let processed_dir = project_dir.join(&config.processed_path);
    fs::create_dir_all(&processed_dir)?;
    if let Some(clientes) = &clean.clientes {
        write_dataset(
            &processed_dir.join("clientes_clean.csv"),
            clientes,
            PROCESSED_DELIMITER,
        )?;
    }
    if let Some(produtos) = &clean.produtos {
        write_dataset(
            &processed_dir.join("produtos_clean.csv"),
            produtos,
            PROCESSED_DELIMITER,
        )?;
    }
    if let Some(vendas) = &clean.vendas {
        write_dataset(
            &processed_dir.join("vendas_clean.csv"),
            vendas,
            PROCESSED_DELIMITER,
        )?;
    }
    if let Some(logistica) = &clean.logistica {
        write_dataset(
            &processed_dir.join("logistica_clean.csv"),
            logistica,
            PROCESSED_DELIMITER,
        )?;
    }
    println!("💾 Processed datasets written to {:?}", processed_dir);

    // E. Expectation checkpoint over the corrected data
    println!("🧪 Running expectation checkpoint...");
    let checkpoint = run_checkpoint(&clean, today, &ConsoleAlert);

    // F. Persist run artifacts
    let quality_dir = project_dir.join(&config.quality_path);
    fs::create_dir_all(&quality_dir)?;
    save_json(&quality_dir.join("validation_results.json"), &checkpoint)?;

    let result = RunResult {
        success: checkpoint.success,
        stages,
        errors: checkpoint
            .suites
            .iter()
            .filter(|s| !s.success())
            .map(|s| format!("{}: {} failed expectation(s)", s.suite, s.failed))
            .collect(),
    };
    save_json(&quality_dir.join("run_results.json"), &result)?;

    if checkpoint.success {
        println!("\n✨ SUCCESS! Pipeline finished in {:.2?}", start.elapsed());
    } else if config.strict {
        eprintln!(
            "\n❌ FAILURE. {} expectation suite(s) failed (strict mode).",
            result.errors.len()
        );
        std::process::exit(1);
    } else {
        println!(
            "\n⚠️  Pipeline finished in {:.2?} with {} failed suite(s) (strict mode OFF).",
            start.elapsed(),
            result.errors.len()
        );
    }

    Ok(())
}
