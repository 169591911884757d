//! Input options for export operations.
//!
//! This module contains the configuration that selects the output format
//! and any columns added on top of the defaults.

use serde::{Deserialize, Serialize};

use crate::format::{new_exporter, FormatKind};
use crate::product::{Product, ProductField};

/// Options controlling a single export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Output format
    #[serde(default)]
    pub format: FormatKind,
    /// Fields appended after the default columns, in order
    #[serde(default)]
    pub extra_fields: Vec<ProductField>,
}

impl ExportOptions {
    /// Markdown with the default columns
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the output format
    pub fn format(mut self, format: FormatKind) -> Self {
        self.format = format;
        self
    }

    /// Builder: append one extra column
    pub fn field(mut self, field: ProductField) -> Self {
        self.extra_fields.push(field);
        self
    }

    /// Builder: append several extra columns
    pub fn fields(mut self, fields: impl IntoIterator<Item = ProductField>) -> Self {
        self.extra_fields.extend(fields);
        self
    }
}

/// Export `products` with the format and columns chosen in `options`.
pub fn export_products(products: &[Product], options: &ExportOptions) -> String {
    let mut exporter = new_exporter(options.format);
    for field in &options.extra_fields {
        exporter.add_field(*field);
    }
    exporter.export(products)
}
