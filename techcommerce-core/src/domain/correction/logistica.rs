// techcommerce-core/src/domain/correction/logistica.rs

use tracing::{info, warn};

use super::dedup_first;
use crate::domain::model::{Entrega, Venda, key_set};

/// Corrects the logistica dataset against the already-corrected vendas.
///
/// Uniqueness: first occurrence wins on duplicated id_entrega.
/// Consistency: a delivery pointing at an unknown sale is dropped.
/// Accuracy: tempo_entrega_dias is recomputed from the shipping and actual
/// delivery dates; records with missing dates are kept, the derived field
/// just stays null.
pub fn correct_logistica(logistica: &[Entrega], vendas: &[Venda]) -> Vec<Entrega> {
    info!(total = logistica.len(), "correcting logistica");

    // 1. UNIQUENESS: drop duplicated primary keys, keep first
    let mut corrigidas = dedup_first(logistica, |e| e.id_entrega);
    let removidas = logistica.len() - corrigidas.len();
    if removidas > 0 {
        warn!(removidas, "duplicated id_entrega rows dropped");
    }

    // 2. CONSISTENCY: id_venda must resolve in the corrected vendas
    let vendas_validas = key_set(vendas);
    let antes = corrigidas.len();
    corrigidas.retain(|e| e.id_venda.is_some_and(|id| vendas_validas.contains(&id)));
    let removidas = antes - corrigidas.len();
    if removidas > 0 {
        warn!(removidas, "entregas with unknown id_venda dropped");
    }

    // 3. ACCURACY: whole days between shipping and actual delivery
    for e in &mut corrigidas {
        e.tempo_entrega_dias = match (e.data_envio, e.data_entrega_real) {
            (Some(envio), Some(real)) => Some((real - envio).num_days()),
            _ => None,
        };
    }

    info!(restantes = corrigidas.len(), "logistica correction finished");
    corrigidas
}

// --- UNIT TESTS ---
#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, dia: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, dia).unwrap()
    }

    fn vendas_validas() -> Vec<Venda> {
        [1001, 1002]
            .into_iter()
            .map(|id| Venda {
                id_venda: Some(id),
                ..Default::default()
            })
            .collect()
    }

    fn entrega(id: i64, id_venda: i64) -> Entrega {
        Entrega {
            id_entrega: Some(id),
            id_venda: Some(id_venda),
            transportadora: Some("Correios".into()),
            data_envio: Some(date(2023, 3, 2)),
            data_entrega_prevista: Some(date(2023, 3, 5)),
            data_entrega_real: Some(date(2023, 3, 4)),
            status_entrega: Some("Entregue".into()),
            tempo_entrega_dias: None,
        }
    }

    #[test]
    fn test_duplicated_id_entrega_removed_keep_first() {
        let entregas = vec![entrega(2001, 1001), entrega(2001, 1001), entrega(2003, 1002)];
        let corrigidas = correct_logistica(&entregas, &vendas_validas());
        assert_eq!(corrigidas.len(), 2);
        assert_eq!(corrigidas[0].id_entrega, Some(2001));
        assert_eq!(corrigidas[1].id_entrega, Some(2003));
    }

    #[test]
    fn test_orphan_sale_removes_record() {
        // Sale 1003 is absent from the corrected vendas
        let entregas = vec![entrega(2003, 1003), entrega(2001, 1001)];
        let corrigidas = correct_logistica(&entregas, &vendas_validas());
        assert_eq!(corrigidas.len(), 1);
        assert_eq!(corrigidas[0].id_entrega, Some(2001));
    }

    #[test]
    fn test_tempo_entrega_dias_computed_in_whole_days() {
        let corrigidas = correct_logistica(&[entrega(2001, 1001)], &vendas_validas());
        assert_eq!(corrigidas[0].tempo_entrega_dias, Some(2));
    }

    #[test]
    fn test_missing_dates_keep_record_with_null_derived_field() {
        let mut sem_data = entrega(2007, 1002);
        sem_data.data_entrega_real = None;
        sem_data.status_entrega = Some("Em Trânsito".into());

        let corrigidas = correct_logistica(&[sem_data], &vendas_validas());
        assert_eq!(corrigidas.len(), 1);
        assert_eq!(corrigidas[0].tempo_entrega_dias, None);
    }

    #[test]
    fn test_correction_is_idempotent() {
        let entregas = vec![
            entrega(2001, 1001),
            entrega(2001, 1001),
            entrega(2005, 9999),
        ];
        let vendas = vendas_validas();

        let uma_vez = correct_logistica(&entregas, &vendas);
        let duas_vezes = correct_logistica(&uma_vez, &vendas);
        assert_eq!(uma_vez, duas_vezes);
    }
}
