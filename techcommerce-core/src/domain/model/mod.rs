// techcommerce-core/src/domain/model/mod.rs
//
// Explicit per-entity record types. Every field is optional: absence is a
// data-quality fact, not an access error. A record also exposes its fields
// by name as typed `Value`s, which is what the expectation evaluator and
// the tabular writers consume.

pub mod cliente;
pub mod entrega;
pub mod produto;
pub mod venda;

pub use cliente::Cliente;
pub use entrega::Entrega;
pub use produto::Produto;
pub use venda::Venda;

use chrono::NaiveDate;
use std::collections::HashSet;

/// A single typed cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Int(i64),
    Float(f64),
    Str(String),
    Date(NaiveDate),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Textual form used for set membership and tabular output.
    /// Null renders as the empty cell.
    pub fn render(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Int(v) => v.to_string(),
            Value::Float(v) => format!("{}", v),
            Value::Str(s) => s.clone(),
            Value::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }

    /// Like [`render`](Self::render) but keeps Null distinguishable from "".
    pub fn text(&self) -> Option<String> {
        match self {
            Value::Null => None,
            other => Some(other.render()),
        }
    }
}

impl From<Option<i64>> for Value {
    fn from(v: Option<i64>) -> Self {
        v.map_or(Value::Null, Value::Int)
    }
}

impl From<Option<f64>> for Value {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Value::Null, Value::Float)
    }
}

impl From<Option<NaiveDate>> for Value {
    fn from(v: Option<NaiveDate>) -> Self {
        v.map_or(Value::Null, Value::Date)
    }
}

impl From<&Option<String>> for Value {
    fn from(v: &Option<String>) -> Self {
        v.as_ref().map_or(Value::Null, |s| Value::Str(s.clone()))
    }
}

/// Field-by-name access over a typed record.
pub trait Record {
    /// Dataset name as it appears in files, logs and reports.
    const DATASET: &'static str;
    /// Column order for tabular output (derived columns included).
    const FIELDS: &'static [&'static str];

    fn get(&self, field: &str) -> Value;

    /// Primary key, when present and parseable.
    fn key(&self) -> Option<i64>;

    /// Composite key over every field, used to spot fully duplicated rows.
    fn fingerprint(&self) -> String {
        Self::FIELDS
            .iter()
            .map(|f| self.get(f).render())
            .collect::<Vec<_>>()
            .join("\u{1f}")
    }
}

/// Primary-key set of a dataset, used for referential checks downstream.
pub fn key_set<R: Record>(records: &[R]) -> HashSet<i64> {
    records.iter().filter_map(Record::key).collect()
}

/// The four TechCommerce datasets, each optional: a pipeline run works with
/// whatever raw files were found, and dependent stages fail fast when their
/// upstream is absent.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub clientes: Option<Vec<Cliente>>,
    pub produtos: Option<Vec<Produto>>,
    pub vendas: Option<Vec<Venda>>,
    pub logistica: Option<Vec<Entrega>>,
}

impl Datasets {
    pub fn is_empty(&self) -> bool {
        self.clientes.is_none()
            && self.produtos.is_none()
            && self.vendas.is_none()
            && self.logistica.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_render() {
        assert_eq!(Value::Null.render(), "");
        assert_eq!(Value::Int(42).render(), "42");
        assert_eq!(Value::Float(899.99).render(), "899.99");
        assert_eq!(Value::Float(50.0).render(), "50");
        assert_eq!(Value::Str("SP".into()).render(), "SP");
    }

    #[test]
    fn test_value_text_keeps_null_distinguishable() {
        assert_eq!(Value::Null.text(), None);
        assert_eq!(Value::Str(String::new()).text(), Some(String::new()));
    }

    #[test]
    fn test_key_set_skips_missing_keys() {
        let clientes = vec![
            Cliente {
                id_cliente: Some(1),
                ..Default::default()
            },
            Cliente {
                id_cliente: None,
                ..Default::default()
            },
        ];
        let keys = key_set(&clientes);
        assert_eq!(keys.len(), 1);
        assert!(keys.contains(&1));
    }
}
