// techcommerce-core/src/infrastructure/csv.rs
//
// Tabular file adapters. Raw inputs are tab-separated, processed outputs
// are semicolon-separated; every cell is read as text and coerced here, at
// the boundary. An unparseable number or date is a missing value, never an
// error: correction rules downstream deal with the null.

use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use tracing::{debug, info, warn};

use crate::domain::model::{Cliente, Datasets, Entrega, Produto, Record, Venda};
use crate::infrastructure::error::InfrastructureError;

pub const RAW_DELIMITER: u8 = b'\t';
pub const PROCESSED_DELIMITER: u8 = b';';

const DATE_FORMAT: &str = "%Y-%m-%d";

// --- CELL COERCION ---

fn header_index(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.trim().to_string(), i))
        .collect()
}

/// A present, non-empty cell. Whitespace-only counts as absent.
fn cell<'a>(row: &'a StringRecord, idx: &HashMap<String, usize>, name: &str) -> Option<&'a str> {
    idx.get(name)
        .and_then(|&i| row.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn coerce_i64(raw: Option<&str>, field: &str) -> Option<i64> {
    let s = raw?;
    match s.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            debug!(field, value = s, "non-numeric value coerced to null");
            None
        }
    }
}

fn coerce_f64(raw: Option<&str>, field: &str) -> Option<f64> {
    let s = raw?;
    match s.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            debug!(field, value = s, "non-numeric value coerced to null");
            None
        }
    }
}

fn coerce_date(raw: Option<&str>, field: &str) -> Option<NaiveDate> {
    let s = raw?;
    match NaiveDate::parse_from_str(s, DATE_FORMAT) {
        Ok(d) => Some(d),
        Err(_) => {
            debug!(field, value = s, "unparseable date coerced to null");
            None
        }
    }
}

// --- ROW MAPPERS ---

fn cliente_from_row(row: &StringRecord, idx: &HashMap<String, usize>) -> Cliente {
    Cliente {
        id_cliente: coerce_i64(cell(row, idx, "id_cliente"), "id_cliente"),
        nome: cell(row, idx, "nome").map(str::to_string),
        email: cell(row, idx, "email").map(str::to_string),
        telefone: cell(row, idx, "telefone").map(str::to_string),
        data_nascimento: coerce_date(cell(row, idx, "data_nascimento"), "data_nascimento"),
        cidade: cell(row, idx, "cidade").map(str::to_string),
        estado: cell(row, idx, "estado").map(str::to_string),
        data_cadastro: coerce_date(cell(row, idx, "data_cadastro"), "data_cadastro"),
    }
}

fn produto_from_row(row: &StringRecord, idx: &HashMap<String, usize>) -> Produto {
    Produto {
        id_produto: coerce_i64(cell(row, idx, "id_produto"), "id_produto"),
        nome_produto: cell(row, idx, "nome_produto").map(str::to_string),
        categoria: cell(row, idx, "categoria").map(str::to_string),
        preco: coerce_f64(cell(row, idx, "preco"), "preco"),
        estoque: coerce_f64(cell(row, idx, "estoque"), "estoque"),
        data_criacao: coerce_date(cell(row, idx, "data_criacao"), "data_criacao"),
        ativo: cell(row, idx, "ativo").map(str::to_string),
    }
}

fn venda_from_row(row: &StringRecord, idx: &HashMap<String, usize>) -> Venda {
    Venda {
        id_venda: coerce_i64(cell(row, idx, "id_venda"), "id_venda"),
        id_cliente: coerce_i64(cell(row, idx, "id_cliente"), "id_cliente"),
        id_produto: coerce_i64(cell(row, idx, "id_produto"), "id_produto"),
        quantidade: coerce_f64(cell(row, idx, "quantidade"), "quantidade"),
        valor_unitario: coerce_f64(cell(row, idx, "valor_unitario"), "valor_unitario"),
        valor_total: coerce_f64(cell(row, idx, "valor_total"), "valor_total"),
        data_venda: coerce_date(cell(row, idx, "data_venda"), "data_venda"),
        status: cell(row, idx, "status").map(str::to_string),
    }
}

fn entrega_from_row(row: &StringRecord, idx: &HashMap<String, usize>) -> Entrega {
    Entrega {
        id_entrega: coerce_i64(cell(row, idx, "id_entrega"), "id_entrega"),
        id_venda: coerce_i64(cell(row, idx, "id_venda"), "id_venda"),
        transportadora: cell(row, idx, "transportadora").map(str::to_string),
        data_envio: coerce_date(cell(row, idx, "data_envio"), "data_envio"),
        data_entrega_prevista: coerce_date(
            cell(row, idx, "data_entrega_prevista"),
            "data_entrega_prevista",
        ),
        data_entrega_real: coerce_date(cell(row, idx, "data_entrega_real"), "data_entrega_real"),
        status_entrega: cell(row, idx, "status_entrega").map(str::to_string),
        tempo_entrega_dias: coerce_i64(cell(row, idx, "tempo_entrega_dias"), "tempo_entrega_dias"),
    }
}

// --- READERS ---

fn read_records<T>(
    path: &Path,
    delimiter: u8,
    from_row: impl Fn(&StringRecord, &HashMap<String, usize>) -> T,
) -> Result<Vec<T>, InfrastructureError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)?;
    let idx = header_index(reader.headers()?);

    let mut out = Vec::new();
    for row in reader.records() {
        out.push(from_row(&row?, &idx));
    }
    Ok(out)
}

pub fn read_clientes(path: &Path, delimiter: u8) -> Result<Vec<Cliente>, InfrastructureError> {
    read_records(path, delimiter, cliente_from_row)
}

pub fn read_produtos(path: &Path, delimiter: u8) -> Result<Vec<Produto>, InfrastructureError> {
    read_records(path, delimiter, produto_from_row)
}

pub fn read_vendas(path: &Path, delimiter: u8) -> Result<Vec<Venda>, InfrastructureError> {
    read_records(path, delimiter, venda_from_row)
}

pub fn read_logistica(path: &Path, delimiter: u8) -> Result<Vec<Entrega>, InfrastructureError> {
    read_records(path, delimiter, entrega_from_row)
}

// --- DATASET BUNDLES ---

/// Loads whatever raw files exist under `raw_dir`. A missing file leaves its
/// dataset as None (dependent correction stages will refuse to run); finding
/// none of the four is fatal.
pub fn load_raw_data(raw_dir: &Path) -> Result<Datasets, InfrastructureError> {
    let mut data = Datasets::default();

    let clientes = raw_dir.join("clientes.csv");
    if clientes.exists() {
        let records = read_clientes(&clientes, RAW_DELIMITER)?;
        info!(rows = records.len(), "clientes.csv loaded");
        data.clientes = Some(records);
    } else {
        warn!(path = ?clientes, "raw dataset not found");
    }

    let produtos = raw_dir.join("produtos.csv");
    if produtos.exists() {
        let records = read_produtos(&produtos, RAW_DELIMITER)?;
        info!(rows = records.len(), "produtos.csv loaded");
        data.produtos = Some(records);
    } else {
        warn!(path = ?produtos, "raw dataset not found");
    }

    let vendas = raw_dir.join("vendas.csv");
    if vendas.exists() {
        let records = read_vendas(&vendas, RAW_DELIMITER)?;
        info!(rows = records.len(), "vendas.csv loaded");
        data.vendas = Some(records);
    } else {
        warn!(path = ?vendas, "raw dataset not found");
    }

    let logistica = raw_dir.join("logistica.csv");
    if logistica.exists() {
        let records = read_logistica(&logistica, RAW_DELIMITER)?;
        info!(rows = records.len(), "logistica.csv loaded");
        data.logistica = Some(records);
    } else {
        warn!(path = ?logistica, "raw dataset not found");
    }

    if data.is_empty() {
        return Err(InfrastructureError::NoDatasets(
            raw_dir.to_string_lossy().into_owned(),
        ));
    }
    Ok(data)
}

/// Loads previously processed `*_clean.csv` datasets (semicolon-separated).
pub fn load_clean_data(processed_dir: &Path) -> Result<Datasets, InfrastructureError> {
    let mut data = Datasets::default();

    let clientes = processed_dir.join("clientes_clean.csv");
    if clientes.exists() {
        data.clientes = Some(read_clientes(&clientes, PROCESSED_DELIMITER)?);
    }
    let produtos = processed_dir.join("produtos_clean.csv");
    if produtos.exists() {
        data.produtos = Some(read_produtos(&produtos, PROCESSED_DELIMITER)?);
    }
    let vendas = processed_dir.join("vendas_clean.csv");
    if vendas.exists() {
        data.vendas = Some(read_vendas(&vendas, PROCESSED_DELIMITER)?);
    }
    let logistica = processed_dir.join("logistica_clean.csv");
    if logistica.exists() {
        data.logistica = Some(read_logistica(&logistica, PROCESSED_DELIMITER)?);
    }

    if data.is_empty() {
        return Err(InfrastructureError::NoDatasets(
            processed_dir.to_string_lossy().into_owned(),
        ));
    }
    Ok(data)
}

// --- WRITER ---

/// Writes a dataset in row-per-record shape: header row first (derived
/// columns included), null cells empty.
pub fn write_dataset<R: Record>(
    path: &Path,
    records: &[R],
    delimiter: u8,
) -> Result<(), InfrastructureError> {
    let mut writer = WriterBuilder::new().delimiter(delimiter).from_path(path)?;
    writer.write_record(R::FIELDS)?;
    for record in records {
        writer.write_record(R::FIELDS.iter().map(|f| record.get(f).render()))?;
    }
    writer.flush()?;
    Ok(())
}
