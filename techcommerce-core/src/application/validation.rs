// techcommerce-core/src/application/validation.rs
//
// Evaluates an expectation suite against a corrected dataset through the
// Record trait. Element counts follow the usual expectation semantics:
// null cells are only evaluated by not_null, every other check looks at the
// present values and compares the pass ratio against its `mostly`
// threshold.

use std::collections::HashMap;

use regex::Regex;
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::expectations::{Expectation, ExpectationSuite};
use crate::domain::model::Record;

#[derive(Debug, Clone, Serialize)]
pub struct ExpectationResult {
    pub expectation: String,
    pub evaluated: usize,
    pub unexpected: usize,
    pub success: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuiteResult {
    pub suite: String,
    pub expectations: usize,
    pub failed: usize,
    pub results: Vec<ExpectationResult>,
}

impl SuiteResult {
    pub fn success(&self) -> bool {
        self.failed == 0
    }
}

pub fn run_suite<R: Record>(suite: &ExpectationSuite, records: &[R]) -> SuiteResult {
    let results: Vec<ExpectationResult> = suite
        .expectations
        .iter()
        .map(|expectation| {
            let result = evaluate(expectation, records);
            if result.success {
                debug!(suite = %suite.name, expectation = %result.expectation, "PASS");
            } else {
                warn!(
                    suite = %suite.name,
                    expectation = %result.expectation,
                    unexpected = result.unexpected,
                    "FAIL"
                );
            }
            result
        })
        .collect();

    let failed = results.iter().filter(|r| !r.success).count();
    SuiteResult {
        suite: suite.name.clone(),
        expectations: results.len(),
        failed,
        results,
    }
}

fn ratio_ok(evaluated: usize, unexpected: usize, mostly: f64) -> bool {
    if evaluated == 0 {
        return true;
    }
    (evaluated - unexpected) as f64 / evaluated as f64 >= mostly
}

fn evaluate<R: Record>(expectation: &Expectation, records: &[R]) -> ExpectationResult {
    let (evaluated, unexpected, success) = match expectation {
        Expectation::NotNull { column } => {
            let evaluated = records.len();
            let unexpected = records.iter().filter(|r| r.get(column).is_null()).count();
            (evaluated, unexpected, unexpected == 0)
        }
        Expectation::Unique { column } => {
            let values: Vec<String> = records.iter().filter_map(|r| r.get(column).text()).collect();
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for v in &values {
                *counts.entry(v.as_str()).or_insert(0) += 1;
            }
            let unexpected = values
                .iter()
                .filter(|v| counts.get(v.as_str()).copied().unwrap_or(0) > 1)
                .count();
            (values.len(), unexpected, unexpected == 0)
        }
        Expectation::MatchRegex {
            column,
            pattern,
            mostly,
        } => match Regex::new(pattern) {
            Ok(re) => {
                let values: Vec<String> =
                    records.iter().filter_map(|r| r.get(column).text()).collect();
                let evaluated = values.len();
                let unexpected = values.iter().filter(|v| !re.is_match(v)).count();
                (evaluated, unexpected, ratio_ok(evaluated, unexpected, *mostly))
            }
            Err(e) => {
                warn!(pattern = %pattern, error = %e, "invalid expectation pattern");
                (0, 0, false)
            }
        },
        Expectation::Between { column, min, max } => {
            let values: Vec<f64> = records.iter().filter_map(|r| r.get(column).as_f64()).collect();
            let evaluated = values.len();
            let unexpected = values
                .iter()
                .filter(|&&v| min.is_some_and(|m| v < m) || max.is_some_and(|m| v > m))
                .count();
            (evaluated, unexpected, unexpected == 0)
        }
        Expectation::NotAfter { column, reference } => {
            let values: Vec<_> = records.iter().filter_map(|r| r.get(column).as_date()).collect();
            let evaluated = values.len();
            let unexpected = values.iter().filter(|&&d| d > *reference).count();
            (evaluated, unexpected, unexpected == 0)
        }
        Expectation::InSet {
            column,
            values,
            mostly,
        } => {
            let cells: Vec<String> = records.iter().filter_map(|r| r.get(column).text()).collect();
            let evaluated = cells.len();
            let unexpected = cells.iter().filter(|c| !values.contains(c)).count();
            (evaluated, unexpected, ratio_ok(evaluated, unexpected, *mostly))
        }
        Expectation::NotInSet { column, values } => {
            let cells: Vec<String> = records.iter().filter_map(|r| r.get(column).text()).collect();
            let evaluated = cells.len();
            let unexpected = cells.iter().filter(|c| values.contains(c)).count();
            (evaluated, unexpected, unexpected == 0)
        }
    };

    ExpectationResult {
        expectation: expectation.to_string(),
        evaluated,
        unexpected,
        success,
    }
}

// --- UNIT TESTS ---
#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::expectations::{clientes_suite, produtos_suite};
    use crate::domain::model::{Cliente, Produto};

    fn cliente(id: i64, nome: &str, email: Option<&str>, telefone: &str) -> Cliente {
        Cliente {
            id_cliente: Some(id),
            nome: Some(nome.to_string()),
            email: email.map(str::to_string),
            telefone: Some(telefone.to_string()),
            estado: Some("SP".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_clean_clientes_pass_their_suite() {
        let clientes = vec![
            cliente(1, "João", Some("joao@email.com"), "11999887766"),
            cliente(2, "Maria", Some("maria@email.com"), "11888776655"),
        ];

        let result = run_suite(&clientes_suite(), &clientes);
        assert!(result.success(), "unexpected failures: {:?}", result.results);
    }

    #[test]
    fn test_null_email_fails_not_null_but_not_regex() {
        let clientes = vec![cliente(1, "Maria", None, "11888776655")];

        let result = run_suite(&clientes_suite(), &clientes);
        let not_null = result
            .results
            .iter()
            .find(|r| r.expectation == "not_null(email)")
            .unwrap();
        assert!(!not_null.success);

        // Null cells are not evaluated by the regex expectation
        let regex = result
            .results
            .iter()
            .find(|r| r.expectation.starts_with("match_regex(email"))
            .unwrap();
        assert_eq!(regex.evaluated, 0);
        assert!(regex.success);
    }

    #[test]
    fn test_sem_categoria_placeholder_fails_produtos_suite() {
        // The "SEM CATEGORIA" fill keeps the record complete but the suite
        // still reports it: filled is not the same as known.
        let produtos = vec![Produto {
            id_produto: Some(106),
            nome_produto: Some("Vaso".into()),
            categoria: Some("SEM CATEGORIA".into()),
            preco: Some(45.90),
            estoque: Some(200.0),
            ativo: Some("true".into()),
            ..Default::default()
        }];

        let result = run_suite(&produtos_suite(), &produtos);
        let not_in_set = result
            .results
            .iter()
            .find(|r| r.expectation == "not_in_set(categoria)")
            .unwrap();
        assert!(!not_in_set.success);
    }

    #[test]
    fn test_zero_price_fails_between_expectation() {
        let produtos = vec![Produto {
            id_produto: Some(110),
            nome_produto: Some("Webcam HD".into()),
            categoria: Some("Informática".into()),
            preco: Some(0.0),
            estoque: Some(30.0),
            ativo: Some("true".into()),
            ..Default::default()
        }];

        let result = run_suite(&produtos_suite(), &produtos);
        let between = result
            .results
            .iter()
            .find(|r| r.expectation.starts_with("between(preco"))
            .unwrap();
        assert!(!between.success);
        assert_eq!(between.unexpected, 1);
    }

    #[test]
    fn test_mostly_threshold_tolerates_small_fraction() {
        // 1 bad phone out of 100: 99% >= the 98% threshold
        let mut clientes: Vec<Cliente> = (1..=99)
            .map(|id| cliente(id, "Cliente", Some("c@email.com"), "11999887766"))
            .collect();
        clientes.push(cliente(100, "Cliente", Some("c@email.com"), "123"));

        let result = run_suite(&clientes_suite(), &clientes);
        let telefone = result
            .results
            .iter()
            .find(|r| r.expectation.starts_with("match_regex(telefone"))
            .unwrap();
        assert_eq!(telefone.unexpected, 1);
        assert!(telefone.success);
    }

    #[test]
    fn test_duplicate_keys_fail_unique() {
        let clientes = vec![
            cliente(1, "João", Some("joao@email.com"), "11999887766"),
            cliente(1, "João", Some("outro@email.com"), "11999887766"),
        ];

        let result = run_suite(&clientes_suite(), &clientes);
        let unique = result
            .results
            .iter()
            .find(|r| r.expectation == "unique(id_cliente)")
            .unwrap();
        assert!(!unique.success);
        assert_eq!(unique.unexpected, 2);
    }
}
