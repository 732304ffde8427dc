// techcommerce-core/src/domain/expectations.rs
//
// Declarative data-quality expectations, evaluated downstream against the
// corrected datasets. Suites are plain serde data: the core only declares
// them, the application layer runs them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::model::{Cliente, Produto, Venda, key_set};
use crate::domain::quality::detector::STATUS_VENDA_VALIDOS;
use crate::domain::validators::UFS_VALIDAS;

fn default_mostly() -> f64 {
    1.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expectation {
    NotNull {
        column: String,
    },
    Unique {
        column: String,
    },
    MatchRegex {
        column: String,
        pattern: String,
        #[serde(default = "default_mostly")]
        mostly: f64,
    },
    Between {
        column: String,
        min: Option<f64>,
        max: Option<f64>,
    },
    NotAfter {
        column: String,
        reference: NaiveDate,
    },
    InSet {
        column: String,
        values: Vec<String>,
        #[serde(default = "default_mostly")]
        mostly: f64,
    },
    NotInSet {
        column: String,
        values: Vec<String>,
    },
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::NotNull { column } => write!(f, "not_null({})", column),
            Expectation::Unique { column } => write!(f, "unique({})", column),
            Expectation::MatchRegex { column, pattern, .. } => {
                write!(f, "match_regex({}, {})", column, pattern)
            }
            Expectation::Between { column, min, max } => {
                write!(f, "between({}, {:?}, {:?})", column, min, max)
            }
            Expectation::NotAfter { column, reference } => {
                write!(f, "not_after({}, {})", column, reference)
            }
            Expectation::InSet { column, .. } => write!(f, "in_set({})", column),
            Expectation::NotInSet { column, .. } => write!(f, "not_in_set({})", column),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpectationSuite {
    pub name: String,
    pub expectations: Vec<Expectation>,
}

fn not_null(column: &str) -> Expectation {
    Expectation::NotNull {
        column: column.to_string(),
    }
}

fn unique(column: &str) -> Expectation {
    Expectation::Unique {
        column: column.to_string(),
    }
}

fn in_set<S: ToString>(column: &str, values: &[S], mostly: f64) -> Expectation {
    Expectation::InSet {
        column: column.to_string(),
        values: values.iter().map(ToString::to_string).collect(),
        mostly,
    }
}

/// Completude, unicidade and validade of the corrected clientes dataset.
pub fn clientes_suite() -> ExpectationSuite {
    ExpectationSuite {
        name: "techcommerce.clientes.warning".to_string(),
        expectations: vec![
            not_null("id_cliente"),
            not_null("nome"),
            not_null("email"),
            unique("id_cliente"),
            unique("email"),
            Expectation::MatchRegex {
                column: "email".to_string(),
                pattern: r"^[\w.-]+@[\w.-]+\.\w+$".to_string(),
                mostly: 0.99,
            },
            Expectation::MatchRegex {
                column: "telefone".to_string(),
                pattern: r"^\d{11}$".to_string(),
                mostly: 0.98,
            },
            in_set("estado", &UFS_VALIDAS, 1.0),
        ],
    }
}

pub fn produtos_suite() -> ExpectationSuite {
    ExpectationSuite {
        name: "techcommerce.produtos.warning".to_string(),
        expectations: vec![
            not_null("id_produto"),
            not_null("nome_produto"),
            not_null("categoria"),
            not_null("preco"),
            unique("id_produto"),
            Expectation::Between {
                column: "preco".to_string(),
                min: Some(0.01),
                max: None,
            },
            Expectation::Between {
                column: "estoque".to_string(),
                min: Some(0.0),
                max: None,
            },
            Expectation::NotInSet {
                column: "categoria".to_string(),
                values: vec!["SEM CATEGORIA".to_string()],
            },
            in_set("ativo", &["true", "false"], 1.0),
        ],
    }
}

/// Cross-dataset membership comes from the corrected upstream key sets.
pub fn vendas_suite(
    clientes: &[Cliente],
    produtos: &[Produto],
    today: NaiveDate,
) -> ExpectationSuite {
    let ids_clientes: Vec<i64> = {
        let mut ids: Vec<i64> = key_set(clientes).into_iter().collect();
        ids.sort_unstable();
        ids
    };
    let ids_produtos: Vec<i64> = {
        let mut ids: Vec<i64> = key_set(produtos).into_iter().collect();
        ids.sort_unstable();
        ids
    };

    ExpectationSuite {
        name: "techcommerce.vendas.warning".to_string(),
        expectations: vec![
            not_null("id_venda"),
            not_null("id_cliente"),
            not_null("id_produto"),
            not_null("quantidade"),
            not_null("valor_total"),
            unique("id_venda"),
            Expectation::Between {
                column: "quantidade".to_string(),
                min: Some(1.0),
                max: None,
            },
            in_set("status", &STATUS_VENDA_VALIDOS, 1.0),
            Expectation::NotAfter {
                column: "data_venda".to_string(),
                reference: today,
            },
            in_set("id_cliente", &ids_clientes, 1.0),
            in_set("id_produto", &ids_produtos, 1.0),
        ],
    }
}

pub fn logistica_suite(vendas: &[Venda]) -> ExpectationSuite {
    let ids_vendas: Vec<i64> = {
        let mut ids: Vec<i64> = key_set(vendas).into_iter().collect();
        ids.sort_unstable();
        ids
    };

    ExpectationSuite {
        name: "techcommerce.logistica.warning".to_string(),
        expectations: vec![
            not_null("id_entrega"),
            not_null("id_venda"),
            not_null("data_envio"),
            unique("id_entrega"),
            in_set(
                "status_entrega",
                &["Entregue", "Em Trânsito", "Cancelada", "Atrasada"],
                1.0,
            ),
            in_set("id_venda", &ids_vendas, 1.0),
        ],
    }
}

// --- UNIT TESTS ---
#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_suites_carry_their_dataset_names() {
        assert_eq!(clientes_suite().name, "techcommerce.clientes.warning");
        assert_eq!(produtos_suite().name, "techcommerce.produtos.warning");
    }

    #[test]
    fn test_vendas_suite_embeds_upstream_key_sets() {
        let clientes = vec![Cliente {
            id_cliente: Some(7),
            ..Default::default()
        }];
        let produtos = vec![Produto {
            id_produto: Some(101),
            ..Default::default()
        }];
        let today = NaiveDate::from_ymd_opt(2023, 4, 1).unwrap();

        let suite = vendas_suite(&clientes, &produtos, today);
        let fk = suite
            .expectations
            .iter()
            .find_map(|e| match e {
                Expectation::InSet { column, values, .. } if column == "id_cliente" => {
                    Some(values.clone())
                }
                _ => None,
            })
            .unwrap();
        assert_eq!(fk, vec!["7".to_string()]);
    }

    #[test]
    fn test_suite_roundtrips_through_yaml() {
        let suite = produtos_suite();
        let yaml = serde_yaml::to_string(&suite).unwrap();
        let back: ExpectationSuite = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.name, suite.name);
        assert_eq!(back.expectations.len(), suite.expectations.len());
    }
}
