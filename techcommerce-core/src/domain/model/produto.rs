// techcommerce-core/src/domain/model/produto.rs

use super::{Record, Value};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Produto {
    pub id_produto: Option<i64>,
    pub nome_produto: Option<String>,
    pub categoria: Option<String>,
    pub preco: Option<f64>,
    pub estoque: Option<f64>,
    pub data_criacao: Option<NaiveDate>,
    // Kept as text: no rule coerces it, the expectation suite checks the
    // raw token against {"true", "false"}.
    pub ativo: Option<String>,
}

impl Record for Produto {
    const DATASET: &'static str = "produtos";
    const FIELDS: &'static [&'static str] = &[
        "id_produto",
        "nome_produto",
        "categoria",
        "preco",
        "estoque",
        "data_criacao",
        "ativo",
    ];

    fn get(&self, field: &str) -> Value {
        match field {
            "id_produto" => self.id_produto.into(),
            "nome_produto" => (&self.nome_produto).into(),
            "categoria" => (&self.categoria).into(),
            "preco" => self.preco.into(),
            "estoque" => self.estoque.into(),
            "data_criacao" => self.data_criacao.into(),
            "ativo" => (&self.ativo).into(),
            _ => Value::Null,
        }
    }

    fn key(&self) -> Option<i64> {
        self.id_produto
    }
}
