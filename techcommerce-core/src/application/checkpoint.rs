// techcommerce-core/src/application/checkpoint.rs
//
// The checkpoint bundles the four expectation-suite validations over the
// corrected datasets and pushes a notification through the alert port for
// every suite that failed. Whether a failed checkpoint fails the run is the
// caller's call (strict mode).

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::application::validation::{SuiteResult, run_suite};
use crate::domain::expectations;
use crate::domain::model::Datasets;
use crate::ports::alert::AlertSink;

pub const CHECKPOINT_NAME: &str = "techcommerce_checkpoint";

#[derive(Debug, Serialize)]
pub struct CheckpointResult {
    pub checkpoint: String,
    pub success: bool,
    pub suites: Vec<SuiteResult>,
}

#[instrument(skip_all)]
pub fn run_checkpoint(
    clean: &Datasets,
    today: NaiveDate,
    alert: &dyn AlertSink,
) -> CheckpointResult {
    let mut suites = Vec::new();

    if let Some(clientes) = &clean.clientes {
        suites.push(run_suite(&expectations::clientes_suite(), clientes));
    }
    if let Some(produtos) = &clean.produtos {
        suites.push(run_suite(&expectations::produtos_suite(), produtos));
    }
    if let Some(vendas) = &clean.vendas {
        let clientes = clean.clientes.as_deref().unwrap_or(&[]);
        let produtos = clean.produtos.as_deref().unwrap_or(&[]);
        suites.push(run_suite(
            &expectations::vendas_suite(clientes, produtos, today),
            vendas,
        ));
    }
    if let Some(logistica) = &clean.logistica {
        let vendas = clean.vendas.as_deref().unwrap_or(&[]);
        suites.push(run_suite(&expectations::logistica_suite(vendas), logistica));
    }

    for suite in suites.iter().filter(|s| !s.success()) {
        warn!(suite = %suite.suite, failed = suite.failed, "expectation suite failed");
        alert.notify(&suite.suite, suite.failed);
    }

    let success = suites.iter().all(SuiteResult::success);
    info!(checkpoint = CHECKPOINT_NAME, success, "checkpoint finished");

    CheckpointResult {
        checkpoint: CHECKPOINT_NAME.to_string(),
        success,
        suites,
    }
}
