// techcommerce-core/src/domain/quality/detector.rs
//
// Read-only diagnostic pass. Each check selects the violating subset of one
// dataset and yields a Problem, or nothing when the subset is empty; the
// caller collects whatever the battery produced. No check mutates data and
// no check sees the wall clock.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::model::{Cliente, Entrega, Produto, Record, Venda, key_set};
use crate::domain::quality::problem::{Dimension, Problem};
use crate::domain::round2;
use crate::domain::validators::{is_future_date, is_valid_email, is_valid_phone};

/// Allowed sale statuses. "Processando" counts as valid here even though no
/// correction rule ever enforces the set.
pub const STATUS_VENDA_VALIDOS: [&str; 4] = ["Concluída", "Pendente", "Cancelada", "Processando"];

/// Shipment statuses for which a carrier must be present.
pub const STATUS_ENTREGA_ATIVOS: [&str; 2] = ["Entregue", "Em Trânsito"];

/// Exact report wording for every check. The priority table matches on
/// these strings, so they live in one place.
pub mod descriptions {
    pub const LINHAS_DUPLICADAS: &str = "Registros completamente duplicados";
    pub const EMAIL_VAZIO: &str = "Campo 'email' está vazio";
    pub const NOME_VAZIO: &str = "Campo 'nome' está vazio";
    pub const EMAIL_INVALIDO: &str = "Formato do 'email' é inválido";
    pub const TELEFONE_INVALIDO: &str = "Formato do 'telefone' inválido (não tem 11 dígitos)";
    pub const CATEGORIA_VAZIA: &str = "Campo 'categoria' está vazio";
    pub const NOME_PRODUTO_VAZIO: &str = "Campo 'nome_produto' está vazio";
    pub const PRECO_INVALIDO: &str = "'preco' do produto é negativo ou zero";
    pub const ESTOQUE_NEGATIVO: &str = "'estoque' do produto é negativo";
    pub const QUANTIDADE_INVALIDA: &str = "'quantidade' de venda é zero ou negativa";
    pub const DATA_VENDA_FUTURA: &str = "'data_venda' está no futuro";
    pub const STATUS_INVALIDO: &str = "Valor do campo 'status' é inválido";
    pub const VALOR_TOTAL_INCONSISTENTE: &str =
        "Inconsistência na regra: valor_total != qtd * valor_unit";
    pub const VENDA_CLIENTE_ORFAO: &str = "Venda com 'id_cliente' inexistente";
    pub const VENDA_PRODUTO_ORFAO: &str = "Venda com 'id_produto' inexistente";
    pub const ENTREGA_VENDA_ORFA: &str = "Entrega com 'id_venda' inexistente";
    pub const ENTREGA_DUPLICADA: &str = "Mesma 'id_venda' com múltiplas entregas";
    pub const TRANSPORTADORA_VAZIA: &str = "'transportadora' vazia para entregas ativas";
    pub const ENVIO_APOS_ENTREGA: &str = "data_envio posterior à data_entrega_real";
    pub const ENVIO_ANTES_VENDA: &str = "data_envio anterior à data_venda";
}

use self::descriptions as d;

/// Builds a Problem from the affected subset, or None when nothing matched.
/// Impact is affected/total × 100 at two decimals; examples carry every
/// affected primary key in original order, untruncated.
fn build_problem<R: Record>(
    records: &[R],
    affected: &[&R],
    dimension: Dimension,
    description: &str,
) -> Option<Problem> {
    if affected.is_empty() {
        return None;
    }
    let impact = round2(affected.len() as f64 / records.len() as f64 * 100.0);
    Some(Problem {
        dataset: R::DATASET,
        dimension,
        description: description.to_string(),
        affected: affected.len(),
        impact_pct: impact,
        examples: affected.iter().filter_map(|r| r.key()).collect(),
    })
}

fn check<R: Record>(
    records: &[R],
    dimension: Dimension,
    description: &str,
    violates: impl Fn(&R) -> bool,
) -> Option<Problem> {
    let affected: Vec<&R> = records.iter().filter(|r| violates(r)).collect();
    build_problem(records, &affected, dimension, description)
}

/// Rows identical across every field, all occurrences counted.
fn duplicated_rows<R: Record>(records: &[R]) -> Option<Problem> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    for r in records {
        *seen.entry(r.fingerprint()).or_insert(0) += 1;
    }
    let affected: Vec<&R> = records
        .iter()
        .filter(|r| seen.get(&r.fingerprint()).copied().unwrap_or(0) > 1)
        .collect();
    build_problem(records, &affected, Dimension::Uniqueness, d::LINHAS_DUPLICADAS)
}

pub fn detect_clientes(clientes: &[Cliente]) -> Vec<Problem> {
    let mut problems = Vec::new();
    problems.extend(duplicated_rows(clientes));
    problems.extend(check(clientes, Dimension::Completeness, d::EMAIL_VAZIO, |c| {
        c.email.is_none()
    }));
    problems.extend(check(clientes, Dimension::Completeness, d::NOME_VAZIO, |c| {
        c.nome.is_none()
    }));
    problems.extend(check(clientes, Dimension::Validity, d::EMAIL_INVALIDO, |c| {
        !is_valid_email(c.email.as_deref())
    }));
    problems.extend(check(clientes, Dimension::Validity, d::TELEFONE_INVALIDO, |c| {
        !is_valid_phone(c.telefone.as_deref())
    }));
    problems
}

pub fn detect_produtos(produtos: &[Produto]) -> Vec<Problem> {
    let mut problems = Vec::new();
    problems.extend(duplicated_rows(produtos));
    problems.extend(check(produtos, Dimension::Completeness, d::CATEGORIA_VAZIA, |p| {
        p.categoria.is_none()
    }));
    problems.extend(check(
        produtos,
        Dimension::Completeness,
        d::NOME_PRODUTO_VAZIO,
        |p| p.nome_produto.is_none(),
    ));
    problems.extend(check(produtos, Dimension::Validity, d::PRECO_INVALIDO, |p| {
        matches!(p.preco, Some(v) if v <= 0.0)
    }));
    problems.extend(check(produtos, Dimension::Validity, d::ESTOQUE_NEGATIVO, |p| {
        matches!(p.estoque, Some(v) if v < 0.0)
    }));
    problems
}

pub fn detect_vendas(
    vendas: &[Venda],
    clientes: &[Cliente],
    produtos: &[Produto],
    today: NaiveDate,
) -> Vec<Problem> {
    let clientes_validos = key_set(clientes);
    let produtos_validos = key_set(produtos);

    let mut problems = Vec::new();
    problems.extend(check(vendas, Dimension::Validity, d::QUANTIDADE_INVALIDA, |v| {
        matches!(v.quantidade, Some(q) if q <= 0.0)
    }));
    problems.extend(check(vendas, Dimension::Timeliness, d::DATA_VENDA_FUTURA, |v| {
        matches!(v.data_venda, Some(dt) if is_future_date(dt, today))
    }));
    problems.extend(check(vendas, Dimension::Validity, d::STATUS_INVALIDO, |v| {
        !v.status
            .as_deref()
            .is_some_and(|s| STATUS_VENDA_VALIDOS.contains(&s))
    }));
    problems.extend(check(
        vendas,
        Dimension::Accuracy,
        d::VALOR_TOTAL_INCONSISTENTE,
        |v| match (v.quantidade, v.valor_unitario, v.valor_total) {
            (Some(q), Some(vu), Some(vt)) => (vt - round2(q * vu)).abs() > 0.01,
            // A missing operand makes the rule unverifiable: flagged.
            _ => true,
        },
    ));
    problems.extend(check(vendas, Dimension::Consistency, d::VENDA_CLIENTE_ORFAO, |v| {
        !v.id_cliente.is_some_and(|id| clientes_validos.contains(&id))
    }));
    problems.extend(check(vendas, Dimension::Consistency, d::VENDA_PRODUTO_ORFAO, |v| {
        !v.id_produto.is_some_and(|id| produtos_validos.contains(&id))
    }));
    problems
}

pub fn detect_logistica(logistica: &[Entrega], vendas: &[Venda]) -> Vec<Problem> {
    let vendas_validas = key_set(vendas);
    let datas_venda: HashMap<i64, NaiveDate> = vendas
        .iter()
        .filter_map(|v| Some((v.id_venda?, v.data_venda?)))
        .collect();

    let mut contagem_vendas: HashMap<Option<i64>, usize> = HashMap::new();
    for e in logistica {
        *contagem_vendas.entry(e.id_venda).or_insert(0) += 1;
    }

    let mut problems = Vec::new();
    problems.extend(check(logistica, Dimension::Uniqueness, d::ENTREGA_DUPLICADA, |e| {
        contagem_vendas.get(&e.id_venda).copied().unwrap_or(0) > 1
    }));
    problems.extend(check(
        logistica,
        Dimension::Completeness,
        d::TRANSPORTADORA_VAZIA,
        |e| {
            e.transportadora.is_none()
                && e.status_entrega
                    .as_deref()
                    .is_some_and(|s| STATUS_ENTREGA_ATIVOS.contains(&s))
        },
    ));
    problems.extend(check(logistica, Dimension::Consistency, d::ENTREGA_VENDA_ORFA, |e| {
        !e.id_venda.is_some_and(|id| vendas_validas.contains(&id))
    }));
    problems.extend(check(logistica, Dimension::Consistency, d::ENVIO_APOS_ENTREGA, |e| {
        matches!((e.data_envio, e.data_entrega_real), (Some(envio), Some(real)) if envio > real)
    }));
    problems.extend(check(logistica, Dimension::Consistency, d::ENVIO_ANTES_VENDA, |e| {
        match (e.data_envio, e.id_venda.and_then(|id| datas_venda.get(&id))) {
            (Some(envio), Some(&venda)) => envio < venda,
            _ => false,
        }
    }));
    problems
}
