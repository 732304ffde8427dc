// techcommerce-core/src/domain/correction/clientes.rs

use tracing::{info, warn};

use super::dedup_first;
use crate::domain::model::Cliente;
use crate::domain::validators::{
    TELEFONE_DIGITOS, is_valid_email, is_valid_state, normalize_phone,
};

pub const NOME_PADRAO: &str = "NÃO INFORMADO";

/// Corrects the clientes dataset.
///
/// Uniqueness: first occurrence wins on duplicated id_cliente.
/// Validity: malformed emails become null; phones are reduced to digits and
/// nulled unless exactly 11 remain.
/// Completeness: missing nome is filled with "NÃO INFORMADO".
/// Consistency: estado outside the UF set (case-insensitive) becomes null;
/// valid values keep their stored casing.
pub fn correct_clientes(clientes: &[Cliente]) -> Vec<Cliente> {
    info!(total = clientes.len(), "correcting clientes");

    // 1. UNIQUENESS: drop duplicated primary keys, keep first
    let mut corrigidos = dedup_first(clientes, |c| c.id_cliente);
    let removidas = clientes.len() - corrigidos.len();
    if removidas > 0 {
        warn!(removidas, "duplicated id_cliente rows dropped");
    }

    // 2. VALIDITY: email must match the pattern; null otherwise
    let mut emails_invalidos = 0;
    for c in &mut corrigidos {
        if c.email.is_some() && !is_valid_email(c.email.as_deref()) {
            c.email = None;
            emails_invalidos += 1;
        }
    }
    if emails_invalidos > 0 {
        warn!(emails_invalidos, "invalid emails set to null");
    }

    // 3. VALIDITY: phone keeps its digits only, and only with 11 of them
    let mut telefones_invalidos = 0;
    for c in &mut corrigidos {
        if let Some(telefone) = c.telefone.take() {
            let digitos = normalize_phone(&telefone);
            if digitos.len() == TELEFONE_DIGITOS {
                c.telefone = Some(digitos);
            } else {
                telefones_invalidos += 1;
            }
        }
    }
    if telefones_invalidos > 0 {
        warn!(telefones_invalidos, "phones without 11 digits set to null");
    }

    // 4. COMPLETENESS: missing nome
    let mut nomes_preenchidos = 0;
    for c in &mut corrigidos {
        if c.nome.is_none() {
            c.nome = Some(NOME_PADRAO.to_string());
            nomes_preenchidos += 1;
        }
    }
    if nomes_preenchidos > 0 {
        warn!(nomes_preenchidos, "empty nomes filled with 'NÃO INFORMADO'");
    }

    // 5. CONSISTENCY: estado must be a valid UF
    let mut estados_invalidos = 0;
    for c in &mut corrigidos {
        if c.estado.is_some() && !is_valid_state(c.estado.as_deref()) {
            c.estado = None;
            estados_invalidos += 1;
        }
    }
    if estados_invalidos > 0 {
        warn!(estados_invalidos, "invalid UFs set to null");
    }

    info!(restantes = corrigidos.len(), "clientes correction finished");
    corrigidos
}
