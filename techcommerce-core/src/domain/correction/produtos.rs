// techcommerce-core/src/domain/correction/produtos.rs

use tracing::{info, warn};

use super::dedup_first;
use crate::domain::model::Produto;

pub const CATEGORIA_PADRAO: &str = "SEM CATEGORIA";

/// Corrects the produtos dataset.
///
/// Accuracy: negative prices are sign mistakes, repaired with the absolute
/// value. A price of exactly zero is NOT repaired here: it stays in the
/// dataset and keeps failing detection and the downstream expectations.
/// Completeness: missing categoria is filled with "SEM CATEGORIA".
/// Validity: negative stock is clamped to zero.
/// Uniqueness: first occurrence wins on duplicated id_produto.
pub fn correct_produtos(produtos: &[Produto]) -> Vec<Produto> {
    info!(total = produtos.len(), "correcting produtos");

    let mut corrigidos: Vec<Produto> = produtos.to_vec();

    // 1. ACCURACY: negative price -> absolute value
    let mut precos_negativos = 0;
    for p in &mut corrigidos {
        if let Some(preco) = p.preco
            && preco < 0.0
        {
            p.preco = Some(preco.abs());
            precos_negativos += 1;
        }
    }
    if precos_negativos > 0 {
        warn!(precos_negativos, "negative prices converted with abs()");
    }

    // 2. COMPLETENESS: missing categoria
    let mut categorias_preenchidas = 0;
    for p in &mut corrigidos {
        if p.categoria.is_none() {
            p.categoria = Some(CATEGORIA_PADRAO.to_string());
            categorias_preenchidas += 1;
        }
    }
    if categorias_preenchidas > 0 {
        warn!(
            categorias_preenchidas,
            "empty categorias filled with 'SEM CATEGORIA'"
        );
    }

    // 3. VALIDITY: negative stock -> 0
    let mut estoques_negativos = 0;
    for p in &mut corrigidos {
        if let Some(estoque) = p.estoque
            && estoque < 0.0
        {
            p.estoque = Some(0.0);
            estoques_negativos += 1;
        }
    }
    if estoques_negativos > 0 {
        warn!(estoques_negativos, "negative stocks clamped to 0");
    }

    // 4. UNIQUENESS: drop duplicated primary keys, keep first
    let antes = corrigidos.len();
    let corrigidos = dedup_first(&corrigidos, |p| p.id_produto);
    let removidas = antes - corrigidos.len();
    if removidas > 0 {
        warn!(removidas, "duplicated id_produto rows dropped");
    }

    info!(restantes = corrigidos.len(), "produtos correction finished");
    corrigidos
}
