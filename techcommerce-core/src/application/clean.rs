// techcommerce-core/src/application/clean.rs

use crate::error::TechCommerceError;
use crate::infrastructure::config::PipelineConfig;
use crate::infrastructure::error::InfrastructureError;
use std::fs;
use std::path::Path;

/// Removes generated artifacts (processed datasets, quality reports).
pub fn clean_project(
    project_dir: &Path,
    config: &PipelineConfig,
) -> Result<(), TechCommerceError> {
    tracing::info!("🧹 Initializing cleanup sequence...");

    let targets = if config.clean_targets.is_empty() {
        vec![config.processed_path.clone(), config.quality_path.clone()]
    } else {
        config.clean_targets.clone()
    };

    for target_rel_path in targets {
        let full_path = project_dir.join(&target_rel_path);

        // Zero-Trust Path Traversal Guard
        if !full_path.starts_with(project_dir) {
            return Err(TechCommerceError::UnsafePath(target_rel_path));
        }

        if full_path.exists() {
            if full_path.is_dir() {
                fs::remove_dir_all(&full_path)
                    .map_err(|e| TechCommerceError::Infrastructure(InfrastructureError::Io(e)))?;
            } else {
                fs::remove_file(&full_path)
                    .map_err(|e| TechCommerceError::Infrastructure(InfrastructureError::Io(e)))?;
            }
            println!("   🗑️  Artifact removed: {}", target_rel_path);
        }
    }

    Ok(())
}
