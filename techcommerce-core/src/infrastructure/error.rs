// techcommerce-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(techcommerce::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- TABULAR FILES ---
    #[error("CSV Error: {0}")]
    #[diagnostic(
        code(techcommerce::infra::csv),
        help("Check the delimiter and the header row of the input file.")
    )]
    Csv(#[from] csv::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(techcommerce::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON Serialization Error: {0}")]
    #[diagnostic(code(techcommerce::infra::json))]
    JsonError(#[from] serde_json::Error),

    #[error("Project configuration not found at '{0}'")]
    #[diagnostic(code(techcommerce::infra::config_missing))]
    ConfigNotFound(String),

    #[error("No raw datasets found in '{0}'")]
    #[diagnostic(
        code(techcommerce::infra::no_data),
        help("Expected clientes.csv, produtos.csv, vendas.csv or logistica.csv.")
    )]
    NoDatasets(String),
}
