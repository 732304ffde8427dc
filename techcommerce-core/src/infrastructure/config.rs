// techcommerce-core/src/infrastructure/config.rs

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::infrastructure::error::InfrastructureError;

fn default_raw_path() -> String {
    "data/raw".to_string()
}
fn default_processed_path() -> String {
    "data/processed".to_string()
}
fn default_quality_path() -> String {
    "data/quality".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub version: String,

    #[serde(default = "default_raw_path")]
    pub raw_path: String,
    #[serde(default = "default_processed_path")]
    pub processed_path: String,
    #[serde(default = "default_quality_path")]
    pub quality_path: String,

    /// Artifacts removed by `clean`, relative to the project directory.
    #[serde(default)]
    pub clean_targets: Vec<String>,

    /// When true, a failed expectation checkpoint fails the whole run.
    #[serde(default)]
    pub strict: bool,
}

// --- LOADER ---

#[instrument(skip(project_dir))] // automatic entry/exit log of the function
pub fn load_pipeline_config(project_dir: &Path) -> Result<PipelineConfig, InfrastructureError> {
    // 1. Discovery of the main file
    let config_path = find_main_config(project_dir)?;
    info!(path = ?config_path, "Loading project configuration");

    // 2. YAML load
    let content = fs::read_to_string(&config_path)?;
    let mut config: PipelineConfig = serde_yaml::from_str(&content)?;

    // 3. Override via environment variables (Pattern 'Layering')
    // Allows: TECHCOMMERCE_STRICT=1 techcommerce run
    apply_env_overrides(&mut config);

    Ok(config)
}

fn find_main_config(root: &Path) -> Result<PathBuf, InfrastructureError> {
    let candidates = ["techcommerce.yaml", "techcommerce_project.yaml"];
    for filename in candidates {
        let p = root.join(filename);
        if p.exists() {
            return Ok(p);
        }
    }
    Err(InfrastructureError::ConfigNotFound(format!(
        "No configuration file found in {:?}. Checked: {:?}",
        root, candidates
    )))
}

fn apply_env_overrides(config: &mut PipelineConfig) {
    if let Ok(val) = std::env::var("TECHCOMMERCE_PROCESSED_PATH") {
        info!(old = ?config.processed_path, new = ?val, "Overriding processed path via ENV");
        config.processed_path = val;
    }
    if std::env::var("TECHCOMMERCE_STRICT").is_ok() {
        info!("Overriding strict mode via ENV");
        config.strict = true;
    }
}
