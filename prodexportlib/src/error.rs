//! Error types for prodexportlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving formats or loading products
#[derive(Error, Debug)]
pub enum ExportError {
    /// No format variant is registered under this identifier
    #[error("unknown export format '{0}' (expected one of: md, markdown, html, htm)")]
    UnknownFormat(String),

    /// No product field has this name
    #[error("unknown product field '{0}' (expected one of: id, description, brand, model, stock)")]
    UnknownField(String),

    /// Failed to read a product file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Product JSON could not be decoded
    #[error("failed to parse products: {0}")]
    Parse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
