// techcommerce-core/src/domain/correction/mod.rs
//
// Entity correctors. Each one is a pure `&[T] -> Vec<T>` transformation:
// the input is never mutated, and re-applying a corrector to its own output
// yields the same dataset. Dependent correctors take the already-corrected
// upstream datasets for their referential checks.

pub mod clientes;
pub mod logistica;
pub mod produtos;
pub mod vendas;

// Re-exports
pub use clientes::correct_clientes;
pub use logistica::correct_logistica;
pub use produtos::correct_produtos;
pub use vendas::correct_vendas;

use std::collections::HashSet;
use std::hash::Hash;

/// Keeps the first occurrence of every key, in original order.
/// A missing key deduplicates against other missing keys.
pub(crate) fn dedup_first<T: Clone, K: Eq + Hash>(
    records: &[T],
    key: impl Fn(&T) -> K,
) -> Vec<T> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert(key(r)))
        .cloned()
        .collect()
}
