// techcommerce-core/src/domain/model/venda.rs

use super::{Record, Value};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Venda {
    pub id_venda: Option<i64>,
    pub id_cliente: Option<i64>,
    pub id_produto: Option<i64>,
    pub quantidade: Option<f64>,
    pub valor_unitario: Option<f64>,
    pub valor_total: Option<f64>,
    pub data_venda: Option<NaiveDate>,
    pub status: Option<String>,
}

impl Record for Venda {
    const DATASET: &'static str = "vendas";
    const FIELDS: &'static [&'static str] = &[
        "id_venda",
        "id_cliente",
        "id_produto",
        "quantidade",
        "valor_unitario",
        "valor_total",
        "data_venda",
        "status",
    ];

    fn get(&self, field: &str) -> Value {
        match field {
            "id_venda" => self.id_venda.into(),
            "id_cliente" => self.id_cliente.into(),
            "id_produto" => self.id_produto.into(),
            "quantidade" => self.quantidade.into(),
            "valor_unitario" => self.valor_unitario.into(),
            "valor_total" => self.valor_total.into(),
            "data_venda" => self.data_venda.into(),
            "status" => (&self.status).into(),
            _ => Value::Null,
        }
    }

    fn key(&self) -> Option<i64> {
        self.id_venda
    }
}
