// techcommerce-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Cannot correct '{stage}': corrected '{requires}' dataset is missing")]
    #[diagnostic(
        code(techcommerce::domain::missing_upstream),
        help("Stage ordering is clientes/produtos -> vendas -> logistica; load the upstream dataset first.")
    )]
    MissingUpstream { stage: String, requires: String },

    #[error("Checkpoint '{checkpoint}' failed: {failed} expectation suite(s) did not pass")]
    #[diagnostic(code(techcommerce::domain::checkpoint))]
    CheckpointFailed { checkpoint: String, failed: usize },
}
