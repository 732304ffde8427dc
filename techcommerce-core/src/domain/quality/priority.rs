// techcommerce-core/src/domain/quality/priority.rs
//
// Pure reporting transform: assigns a severity tier to each detected
// problem and orders the summary. Has no effect on corrected data.

use crate::domain::quality::detector::descriptions as d;
use crate::domain::quality::problem::{Priority, Problem, RankedProblem};

/// Exact-match description → severity table. Unmapped descriptions are Low.
const PRIORITY_TABLE: &[(&str, Priority)] = &[
    (d::VENDA_CLIENTE_ORFAO, Priority::Critical),
    (d::VENDA_PRODUTO_ORFAO, Priority::Critical),
    (d::ENTREGA_VENDA_ORFA, Priority::Critical),
    (d::PRECO_INVALIDO, Priority::Critical),
    (d::ESTOQUE_NEGATIVO, Priority::Critical),
    (d::LINHAS_DUPLICADAS, Priority::High),
    (d::EMAIL_VAZIO, Priority::High),
    (d::EMAIL_INVALIDO, Priority::High),
    (d::QUANTIDADE_INVALIDA, Priority::High),
    (d::STATUS_INVALIDO, Priority::High),
    (d::DATA_VENDA_FUTURA, Priority::High),
    (d::ENTREGA_DUPLICADA, Priority::High),
    (d::NOME_VAZIO, Priority::Medium),
    (d::TELEFONE_INVALIDO, Priority::Medium),
    (d::CATEGORIA_VAZIA, Priority::Medium),
    (d::NOME_PRODUTO_VAZIO, Priority::Medium),
    (d::VALOR_TOTAL_INCONSISTENTE, Priority::Medium),
    (d::TRANSPORTADORA_VAZIA, Priority::Medium),
    (d::ENVIO_APOS_ENTREGA, Priority::Medium),
    (d::ENVIO_ANTES_VENDA, Priority::Medium),
];

pub fn classify(description: &str) -> Priority {
    PRIORITY_TABLE
        .iter()
        .find(|(desc, _)| *desc == description)
        .map_or(Priority::Low, |(_, p)| *p)
}

/// Assigns priorities and sorts by (severity, dataset name, impact desc).
pub fn prioritize(problems: Vec<Problem>) -> Vec<RankedProblem> {
    let mut ranked: Vec<RankedProblem> = problems
        .into_iter()
        .map(|problem| RankedProblem {
            priority: classify(&problem.description),
            problem,
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| a.problem.dataset.cmp(b.problem.dataset))
            .then_with(|| b.problem.impact_pct.total_cmp(&a.problem.impact_pct))
    });
    ranked
}
