// techcommerce/src/commands/analyze.rs
//
// USE CASE: Diagnostic report over the raw datasets.

use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use comfy_table::{Table, presets::UTF8_FULL};

use techcommerce_core::application::diagnose;
use techcommerce_core::domain::quality::Priority;
use techcommerce_core::infrastructure::config::load_pipeline_config;
use techcommerce_core::infrastructure::csv::load_raw_data;

pub fn execute(project_dir: PathBuf, check: bool) -> anyhow::Result<()> {
    println!("⚙️  Loading configuration...");
    let config = load_pipeline_config(&project_dir).with_context(|| {
        format!(
            "Failed to load project configuration from {:?}",
            project_dir
        )
    })?;

    let raw_dir = project_dir.join(&config.raw_path);
    let raw = load_raw_data(&raw_dir)?;
    let today = Local::now().date_naive();

    let ranked = diagnose(&raw, today)?;

    println!("\n--- RELATÓRIO DE QUALIDADE DE DADOS - TechCommerce ---\n");

    if ranked.is_empty() {
        println!("Nenhum problema de qualidade de dados identificado.");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Prioridade",
        "Dataset",
        "Dimensão",
        "Problema",
        "Registros Afetados",
        "Impacto (%)",
    ]);

    for r in &ranked {
        table.add_row(vec![
            r.priority.to_string(),
            r.problem.dataset.to_string(),
            r.problem.dimension.to_string(),
            r.problem.description.clone(),
            r.problem.affected.to_string(),
            format!("{:.2}%", r.problem.impact_pct),
        ]);
    }
    println!("{table}");

    let criticos = ranked
        .iter()
        .filter(|r| r.priority == Priority::Critical)
        .count();

    if check && criticos > 0 {
        eprintln!("\n❌ {} problema(s) com prioridade Crítica.", criticos);
        std::process::exit(1);
    }

    Ok(())
}
