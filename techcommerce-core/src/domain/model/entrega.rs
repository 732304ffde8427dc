// techcommerce-core/src/domain/model/entrega.rs

use super::{Record, Value};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Entrega {
    pub id_entrega: Option<i64>,
    pub id_venda: Option<i64>,
    pub transportadora: Option<String>,
    pub data_envio: Option<NaiveDate>,
    pub data_entrega_prevista: Option<NaiveDate>,
    pub data_entrega_real: Option<NaiveDate>,
    pub status_entrega: Option<String>,
    /// Derived: whole days between shipping and actual delivery.
    pub tempo_entrega_dias: Option<i64>,
}

impl Record for Entrega {
    const DATASET: &'static str = "logistica";
    const FIELDS: &'static [&'static str] = &[
        "id_entrega",
        "id_venda",
        "transportadora",
        "data_envio",
        "data_entrega_prevista",
        "data_entrega_real",
        "status_entrega",
        "tempo_entrega_dias",
    ];

    fn get(&self, field: &str) -> Value {
        match field {
            "id_entrega" => self.id_entrega.into(),
            "id_venda" => self.id_venda.into(),
            "transportadora" => (&self.transportadora).into(),
            "data_envio" => self.data_envio.into(),
            "data_entrega_prevista" => self.data_entrega_prevista.into(),
            "data_entrega_real" => self.data_entrega_real.into(),
            "status_entrega" => (&self.status_entrega).into(),
            "tempo_entrega_dias" => self.tempo_entrega_dias.into(),
            _ => Value::Null,
        }
    }

    fn key(&self) -> Option<i64> {
        self.id_entrega
    }
}
