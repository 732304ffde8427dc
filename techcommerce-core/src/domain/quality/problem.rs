// techcommerce-core/src/domain/quality/problem.rs

use serde::Serialize;
use std::fmt;

/// The six data-quality axes. Report labels stay in Portuguese, the
/// language of the datasets and of the people reading the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Dimension {
    Completeness,
    Uniqueness,
    Validity,
    Consistency,
    Accuracy,
    Timeliness,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Dimension::Completeness => "Completude",
            Dimension::Uniqueness => "Unicidade",
            Dimension::Validity => "Validade",
            Dimension::Consistency => "Consistência",
            Dimension::Accuracy => "Acurácia",
            Dimension::Timeliness => "Temporalidade",
        };
        write!(f, "{}", label)
    }
}

/// Severity tiers, most severe first. The derived `Ord` follows declaration
/// order, which is exactly the report ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::Critical => "Crítica",
            Priority::High => "Alta",
            Priority::Medium => "Média",
            Priority::Low => "Baixa",
        };
        write!(f, "{}", label)
    }
}

/// One detected quality finding over one dataset.
#[derive(Debug, Clone, Serialize)]
pub struct Problem {
    pub dataset: &'static str,
    pub dimension: Dimension,
    pub description: String,
    /// Number of affected records.
    pub affected: usize,
    /// affected / dataset size × 100, two-decimal rounding.
    pub impact_pct: f64,
    /// Primary keys of every affected record, in original dataset order.
    pub examples: Vec<i64>,
}

/// A problem with its severity tier assigned by the aggregator.
#[derive(Debug, Clone, Serialize)]
pub struct RankedProblem {
    pub priority: Priority,
    #[serde(flatten)]
    pub problem: Problem,
}
