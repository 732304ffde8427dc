// techcommerce-core/src/application/mod.rs

pub mod checkpoint;
pub mod clean;
pub mod diagnostics;
pub mod pipeline;
pub mod validation;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI do:
// `use techcommerce_core::application::{correct_all, diagnose, run_checkpoint};`
// without knowing the internal file structure.

pub use checkpoint::{CheckpointResult, run_checkpoint};
pub use clean::clean_project;
pub use diagnostics::diagnose;
pub use pipeline::{RunResult, StageCounts, correct_all};
pub use validation::{ExpectationResult, SuiteResult, run_suite};
