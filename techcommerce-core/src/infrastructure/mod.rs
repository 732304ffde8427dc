// techcommerce-core/src/infrastructure/mod.rs

pub mod alert;
pub mod config;
pub mod csv;
pub mod error;
pub mod fs;

pub use alert::ConsoleAlert;
pub use config::{PipelineConfig, load_pipeline_config};
pub use error::InfrastructureError;
