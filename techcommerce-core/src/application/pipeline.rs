// techcommerce-core/src/application/pipeline.rs
//
// Cross-entity resolution: one explicit pipeline of typed stages.
// clientes and produtos have no mutual dependency; vendas consumes both
// corrected outputs; logistica consumes the corrected vendas. A dependent
// stage whose upstream dataset was never loaded is a fatal error, not a
// partial correction.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::instrument;

use crate::domain::correction::{
    correct_clientes, correct_logistica, correct_produtos, correct_vendas,
};
use crate::domain::error::DomainError;
use crate::domain::model::Datasets;
use crate::error::TechCommerceError;

/// Before/after row counts of one correction stage.
#[derive(Debug, Clone, Serialize)]
pub struct StageCounts {
    pub dataset: String,
    pub before: usize,
    pub after: usize,
}

/// Persisted as run_results.json at the end of a pipeline run.
#[derive(Debug, Serialize)]
pub struct RunResult {
    pub success: bool,
    pub stages: Vec<StageCounts>,
    pub errors: Vec<String>,
}

fn missing_upstream(stage: &str, requires: &str) -> DomainError {
    DomainError::MissingUpstream {
        stage: stage.to_string(),
        requires: requires.to_string(),
    }
}

/// Runs every loaded dataset through its corrector, in dependency order,
/// and returns the corrected bundle plus per-stage counts.
#[instrument(skip_all, fields(today = %today))]
pub fn correct_all(
    raw: &Datasets,
    today: NaiveDate,
) -> Result<(Datasets, Vec<StageCounts>), TechCommerceError> {
    let mut clean = Datasets::default();
    let mut stages = Vec::new();

    if let Some(clientes) = &raw.clientes {
        let corrected = correct_clientes(clientes);
        stages.push(StageCounts {
            dataset: "clientes".to_string(),
            before: clientes.len(),
            after: corrected.len(),
        });
        clean.clientes = Some(corrected);
    }

    if let Some(produtos) = &raw.produtos {
        let corrected = correct_produtos(produtos);
        stages.push(StageCounts {
            dataset: "produtos".to_string(),
            before: produtos.len(),
            after: corrected.len(),
        });
        clean.produtos = Some(corrected);
    }

    if let Some(vendas) = &raw.vendas {
        let clientes = clean
            .clientes
            .as_deref()
            .ok_or_else(|| missing_upstream("vendas", "clientes"))?;
        let produtos = clean
            .produtos
            .as_deref()
            .ok_or_else(|| missing_upstream("vendas", "produtos"))?;
        let corrected = correct_vendas(vendas, clientes, produtos, today);
        stages.push(StageCounts {
            dataset: "vendas".to_string(),
            before: vendas.len(),
            after: corrected.len(),
        });
        clean.vendas = Some(corrected);
    }

    if let Some(logistica) = &raw.logistica {
        let vendas = clean
            .vendas
            .as_deref()
            .ok_or_else(|| missing_upstream("logistica", "vendas"))?;
        let corrected = correct_logistica(logistica, vendas);
        stages.push(StageCounts {
            dataset: "logistica".to_string(),
            before: logistica.len(),
            after: corrected.len(),
        });
        clean.logistica = Some(corrected);
    }

    Ok((clean, stages))
}
