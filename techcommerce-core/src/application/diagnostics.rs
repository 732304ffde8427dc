// techcommerce-core/src/application/diagnostics.rs
//
// Read-only diagnostic pass over the RAW datasets: runs the detector
// battery and hands the findings to the priority aggregator. Nothing here
// modifies data; it is the report the team reads before trusting the
// automatic correction.

use chrono::NaiveDate;
use tracing::{info, instrument};

use crate::domain::error::DomainError;
use crate::domain::model::Datasets;
use crate::domain::quality::detector::{
    detect_clientes, detect_logistica, detect_produtos, detect_vendas,
};
use crate::domain::quality::{RankedProblem, prioritize};
use crate::error::TechCommerceError;

fn missing_upstream(stage: &str, requires: &str) -> DomainError {
    DomainError::MissingUpstream {
        stage: stage.to_string(),
        requires: requires.to_string(),
    }
}

#[instrument(skip_all, fields(today = %today))]
pub fn diagnose(
    raw: &Datasets,
    today: NaiveDate,
) -> Result<Vec<RankedProblem>, TechCommerceError> {
    let mut problems = Vec::new();

    if let Some(clientes) = &raw.clientes {
        problems.extend(detect_clientes(clientes));
    }
    if let Some(produtos) = &raw.produtos {
        problems.extend(detect_produtos(produtos));
    }
    if let Some(vendas) = &raw.vendas {
        let clientes = raw
            .clientes
            .as_deref()
            .ok_or_else(|| missing_upstream("vendas", "clientes"))?;
        let produtos = raw
            .produtos
            .as_deref()
            .ok_or_else(|| missing_upstream("vendas", "produtos"))?;
        problems.extend(detect_vendas(vendas, clientes, produtos, today));
    }
    if let Some(logistica) = &raw.logistica {
        let vendas = raw
            .vendas
            .as_deref()
            .ok_or_else(|| missing_upstream("logistica", "vendas"))?;
        problems.extend(detect_logistica(logistica, vendas));
    }

    info!(problems = problems.len(), "diagnostic pass finished");
    Ok(prioritize(problems))
}

// --- UNIT TESTS ---
#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::model::{Cliente, Produto, Venda};
    use crate::domain::quality::Priority;

    fn hoje() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 4, 1).unwrap()
    }

    #[test]
    fn test_orphan_sale_surfaces_as_critical() {
        let raw = Datasets {
            clientes: Some(vec![Cliente {
                id_cliente: Some(1),
                nome: Some("João".into()),
                email: Some("joao@email.com".into()),
                telefone: Some("11999887766".into()),
                ..Default::default()
            }]),
            produtos: Some(vec![Produto {
                id_produto: Some(101),
                nome_produto: Some("Mouse".into()),
                categoria: Some("Periféricos".into()),
                preco: Some(29.99),
                estoque: Some(10.0),
                ..Default::default()
            }]),
            vendas: Some(vec![Venda {
                id_venda: Some(1003),
                id_cliente: Some(999),
                id_produto: Some(101),
                quantidade: Some(3.0),
                valor_unitario: Some(29.99),
                valor_total: Some(89.97),
                data_venda: NaiveDate::from_ymd_opt(2023, 3, 3),
                status: Some("Concluída".into()),
            }]),
            logistica: None,
        };

        let ranked = diagnose(&raw, hoje()).unwrap();
        assert!(!ranked.is_empty());
        // Critical problems sort first
        assert_eq!(ranked[0].priority, Priority::Critical);
        assert_eq!(ranked[0].problem.description, "Venda com 'id_cliente' inexistente");
    }

    #[test]
    fn test_diagnosing_vendas_without_upstream_is_fatal() {
        let raw = Datasets {
            vendas: Some(vec![Venda::default()]),
            ..Default::default()
        };

        let err = diagnose(&raw, hoje()).unwrap_err();
        assert!(matches!(
            err,
            TechCommerceError::Domain(DomainError::MissingUpstream { .. })
        ));
    }

    #[test]
    fn test_clean_bundle_reports_nothing() {
        let raw = Datasets {
            clientes: Some(vec![Cliente {
                id_cliente: Some(1),
                nome: Some("João".into()),
                email: Some("joao@email.com".into()),
                telefone: Some("11999887766".into()),
                ..Default::default()
            }]),
            ..Default::default()
        };

        let ranked = diagnose(&raw, hoje()).unwrap();
        assert!(ranked.is_empty());
    }
}
