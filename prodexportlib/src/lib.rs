//! # prodexportlib
//!
//! Render product records as text tables through pluggable output formats.
//!
//! ## Overview
//!
//! Every table is produced by the same fixed algorithm in
//! [`TableExporter::export`]. Everything that differs between output formats
//! (table and row delimiters, the header separator, how cells are decorated)
//! is delegated to a [`TableFormat`] implementation:
//!
//! - **Column**: a title plus an accessor projecting one value out of a [`Product`]
//! - **TableFormat**: the hook points (`open_table`, `close_row`, `make_column`, ...)
//! - **TableExporter**: owns the ordered columns and runs the template
//! - **Factory**: [`new_exporter`] / [`exporter_for`] resolve a format identifier
//!
//! Exporters start with the ID, Description and Stock columns. Brand and Model
//! have titles in [`COLUMN_TITLES`] but are only rendered when added.
//!
//! ## Example
//!
//! ```rust
//! use prodexportlib::{exporter_for, Product, ProductField};
//!
//! let mut exporter = exporter_for("md").unwrap();
//! exporter.add_field(ProductField::Brand);
//!
//! let table = exporter.export(&[Product::new(7, "Widget", "Acme", "W-1", 3)]);
//! assert!(table.starts_with("|ID|Description|Stock|Brand\n"));
//! assert!(table.contains("|7|Widget|3|Acme\n"));
//! ```

pub mod column;
pub mod error;
pub mod exporter;
pub mod format;
pub mod options;
pub mod product;

pub use column::{accessor, Accessor, CellValue, Column, Decoration};
pub use error::ExportError;
pub use exporter::TableExporter;
pub use format::{exporter_for, new_exporter, DynFormat, FormatKind, TableFormat};
pub use options::{export_products, ExportOptions};
pub use product::{
    parse_products, read_products, read_products_from, Product, ProductField, COLUMN_TITLES,
};

/// Result type for prodexportlib operations
pub type Result<T> = std::result::Result<T, ExportError>;
