// techcommerce-core/src/domain/correction/vendas.rs

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::domain::model::{Cliente, Produto, Venda, key_set};
use crate::domain::round2;
use crate::domain::validators::is_future_date;

/// Corrects the vendas dataset against the already-corrected clientes and
/// produtos datasets.
///
/// Consistency: a sale pointing at an unknown customer or product is
/// dropped, not repaired. Validity: quantities must be positive. Accuracy:
/// valor_total is recomputed from quantidade × valor_unitario whenever it
/// drifts beyond 0.01. Timeliness: sales dated after `today` (or with an
/// unparseable date) are dropped.
///
/// Filter order (FK -> quantity -> recompute -> date) shrinks the set
/// before the arithmetic runs; each filter is independent of the others'
/// outcome.
pub fn correct_vendas(
    vendas: &[Venda],
    clientes: &[Cliente],
    produtos: &[Produto],
    today: NaiveDate,
) -> Vec<Venda> {
    info!(total = vendas.len(), "correcting vendas");

    let clientes_validos = key_set(clientes);
    let produtos_validos = key_set(produtos);

    // 1. CONSISTENCY: both foreign keys must resolve
    let antes = vendas.len();
    let mut corrigidas: Vec<Venda> = vendas
        .iter()
        .filter(|v| {
            v.id_cliente.is_some_and(|id| clientes_validos.contains(&id))
                && v.id_produto.is_some_and(|id| produtos_validos.contains(&id))
        })
        .cloned()
        .collect();
    let removidas = antes - corrigidas.len();
    if removidas > 0 {
        warn!(removidas, "vendas with broken foreign keys dropped");
    }

    // 2. VALIDITY: quantidade must be positive when present
    let antes = corrigidas.len();
    corrigidas.retain(|v| !matches!(v.quantidade, Some(q) if q <= 0.0));
    let removidas = antes - corrigidas.len();
    if removidas > 0 {
        warn!(removidas, "vendas with quantidade <= 0 dropped");
    }

    // 3. ACCURACY: valor_total = round(quantidade × valor_unitario, 2)
    let mut recalculados = 0;
    for v in &mut corrigidas {
        match (v.quantidade, v.valor_unitario) {
            (Some(q), Some(vu)) => {
                let esperado = round2(q * vu);
                let divergente = match v.valor_total {
                    Some(vt) => (vt - esperado).abs() > 0.01,
                    None => true,
                };
                if divergente {
                    v.valor_total = Some(esperado);
                    recalculados += 1;
                }
            }
            // Without both operands the total cannot be vouched for.
            _ => {
                if v.valor_total.is_some() {
                    v.valor_total = None;
                    recalculados += 1;
                }
            }
        }
    }
    if recalculados > 0 {
        warn!(recalculados, "valores_total recomputed");
    }

    // 4. TIMELINESS: unparseable or future data_venda drops the record
    let antes = corrigidas.len();
    corrigidas.retain(|v| matches!(v.data_venda, Some(dt) if !is_future_date(dt, today)));
    let removidas = antes - corrigidas.len();
    if removidas > 0 {
        warn!(removidas, "vendas with missing or future data_venda dropped");
    }

    info!(restantes = corrigidas.len(), "vendas correction finished");
    corrigidas
}

// --- UNIT TESTS ---
#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, dia: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, dia).unwrap()
    }

    fn hoje() -> NaiveDate {
        date(2023, 4, 1)
    }

    fn clientes_validos() -> Vec<Cliente> {
        [1, 2, 3]
            .into_iter()
            .map(|id| Cliente {
                id_cliente: Some(id),
                ..Default::default()
            })
            .collect()
    }

    fn produtos_validos() -> Vec<Produto> {
        [101, 102, 103]
            .into_iter()
            .map(|id| Produto {
                id_produto: Some(id),
                ..Default::default()
            })
            .collect()
    }

    fn venda(id: i64, id_cliente: i64, id_produto: i64, q: f64, vu: f64, vt: f64) -> Venda {
        Venda {
            id_venda: Some(id),
            id_cliente: Some(id_cliente),
            id_produto: Some(id_produto),
            quantidade: Some(q),
            valor_unitario: Some(vu),
            valor_total: Some(vt),
            data_venda: Some(date(2023, 3, 1)),
            status: Some("Concluída".into()),
        }
    }

    #[test]
    fn test_orphan_customer_removes_record_entirely() {
        // Customer 999 does not exist: removal, regardless of the other
        // perfectly valid fields.
        let vendas = vec![
            venda(1001, 1, 101, 2.0, 899.99, 1799.98),
            venda(1002, 999, 102, 1.0, 1299.99, 1299.99),
        ];

        let corrigidas =
            correct_vendas(&vendas, &clientes_validos(), &produtos_validos(), hoje());
        assert_eq!(corrigidas.len(), 1);
        assert_eq!(corrigidas[0].id_venda, Some(1001));
    }

    #[test]
    fn test_orphan_product_removes_record() {
        let vendas = vec![venda(1020, 3, 999, 1.0, 199.99, 199.99)];
        let corrigidas =
            correct_vendas(&vendas, &clientes_validos(), &produtos_validos(), hoje());
        assert!(corrigidas.is_empty());
    }

    #[test]
    fn test_negative_quantity_removes_record_not_value_corrected() {
        let vendas = vec![venda(1001, 1, 101, -1.0, 199.99, -199.99)];
        let corrigidas =
            correct_vendas(&vendas, &clientes_validos(), &produtos_validos(), hoje());
        assert!(corrigidas.is_empty());
    }

    #[test]
    fn test_valor_total_recomputed_beyond_tolerance() {
        let mut divergente = venda(1003, 1, 101, 3.0, 29.99, 100.00);
        divergente.valor_total = Some(100.00);
        let consistente = venda(1001, 2, 102, 2.0, 899.99, 1799.98);

        let corrigidas = correct_vendas(
            &[divergente, consistente],
            &clientes_validos(),
            &produtos_validos(),
            hoje(),
        );
        assert_eq!(corrigidas[0].valor_total, Some(89.97));
        assert_eq!(corrigidas[1].valor_total, Some(1799.98));
    }

    #[test]
    fn test_missing_valor_total_filled_in() {
        let mut sem_total = venda(1004, 1, 101, 2.0, 25.5, 0.0);
        sem_total.valor_total = None;
        let corrigidas =
            correct_vendas(&[sem_total], &clientes_validos(), &produtos_validos(), hoje());
        assert_eq!(corrigidas[0].valor_total, Some(51.0));
    }

    #[test]
    fn test_future_sale_date_removes_record() {
        let mut futura = venda(1005, 3, 101, 1.0, 899.99, 899.99);
        futura.data_venda = Some(date(2024, 12, 31));
        let corrigidas =
            correct_vendas(&[futura], &clientes_validos(), &produtos_validos(), hoje());
        assert!(corrigidas.is_empty());
    }

    #[test]
    fn test_unparseable_sale_date_removes_record() {
        let mut sem_data = venda(1006, 2, 103, 1.0, 10.0, 10.0);
        sem_data.data_venda = None;
        let corrigidas =
            correct_vendas(&[sem_data], &clientes_validos(), &produtos_validos(), hoje());
        assert!(corrigidas.is_empty());
    }

    #[test]
    fn test_correction_is_idempotent() {
        let vendas = vec![
            venda(1001, 1, 101, 2.0, 899.99, 1799.98),
            venda(1002, 999, 102, 1.0, 1299.99, 1299.99),
            venda(1003, 1, 101, 3.0, 29.99, 100.00),
            venda(1004, 2, 102, -1.0, 199.99, -199.99),
        ];
        let clientes = clientes_validos();
        let produtos = produtos_validos();

        let uma_vez = correct_vendas(&vendas, &clientes, &produtos, hoje());
        let duas_vezes = correct_vendas(&uma_vez, &clientes, &produtos, hoje());
        assert_eq!(uma_vez, duas_vezes);
    }
}
