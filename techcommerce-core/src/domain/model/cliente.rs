// techcommerce-core/src/domain/model/cliente.rs

use super::{Record, Value};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cliente {
    pub id_cliente: Option<i64>,
    pub nome: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub data_nascimento: Option<NaiveDate>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub data_cadastro: Option<NaiveDate>,
}

impl Record for Cliente {
    const DATASET: &'static str = "clientes";
    const FIELDS: &'static [&'static str] = &[
        "id_cliente",
        "nome",
        "email",
        "telefone",
        "data_nascimento",
        "cidade",
        "estado",
        "data_cadastro",
    ];

    fn get(&self, field: &str) -> Value {
        match field {
            "id_cliente" => self.id_cliente.into(),
            "nome" => (&self.nome).into(),
            "email" => (&self.email).into(),
            "telefone" => (&self.telefone).into(),
            "data_nascimento" => self.data_nascimento.into(),
            "cidade" => (&self.cidade).into(),
            "estado" => (&self.estado).into(),
            "data_cadastro" => self.data_cadastro.into(),
            _ => Value::Null,
        }
    }

    fn key(&self) -> Option<i64> {
        self.id_cliente
    }
}
