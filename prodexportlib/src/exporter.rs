//! The export template: one fixed algorithm for every format.
//!
//! [`TableExporter`] owns the ordered column list and a [`TableFormat`]. The
//! order in which fragments are emitted never changes between formats:
//!
//! 1. `open_table`
//! 2. header row: `open_row`, every column's header cell, `close_row`, a newline
//! 3. `close_header_row` (the header/body separator, may be empty)
//! 4. one row per product, in input order: `open_row`, every column's value
//!    cell, `close_row`
//! 5. `close_table`
//!
//! The same column list drives the header and every data row, so all rows
//! have the same cell count and order.

use crate::column::{accessor, Accessor, Column};
use crate::format::TableFormat;
use crate::product::{Product, ProductField};

/// Renders products as a table in the dialect of `F`.
#[derive(Debug, Clone)]
pub struct TableExporter<F> {
    format: F,
    columns: Vec<Column>,
}

impl<F: TableFormat> TableExporter<F> {
    /// Create an exporter with the default columns (ID, Description, Stock).
    pub fn new(format: F) -> Self {
        let columns = ProductField::DEFAULTS
            .iter()
            .map(|field| format.make_column(accessor(field.accessor()), field.title()))
            .collect();
        Self { format, columns }
    }

    /// Append a column; it is rendered after all existing columns.
    pub fn add_column(&mut self, column: Column) {
        log::trace!("{}: adding column '{}'", self.format.name(), column.title());
        self.columns.push(column);
    }

    /// Append a column for one of the product's own fields.
    pub fn add_field(&mut self, field: ProductField) {
        let column = self.make_column(accessor(field.accessor()), field.title());
        self.add_column(column);
    }

    /// Build a column decorated for this exporter's format.
    pub fn make_column(&self, accessor: Accessor, title: &str) -> Column {
        self.format.make_column(accessor, title)
    }

    /// Columns in render order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The format driving this exporter
    pub fn format(&self) -> &F {
        &self.format
    }

    /// Render `products` as a single table string.
    pub fn export(&self, products: &[Product]) -> String {
        log::debug!(
            "exporting {} products as {} ({} columns)",
            products.len(),
            self.format.name(),
            self.columns.len()
        );

        let mut out = self.format.open_table();
        out.push_str(&self.header_row());
        out.push('\n');
        out.push_str(&self.format.close_header_row(&self.columns));
        for product in products {
            out.push_str(&self.data_row(product));
        }
        out.push_str(&self.format.close_table());
        out
    }

    fn header_row(&self) -> String {
        self.row(self.columns.iter().map(Column::render_header))
    }

    fn data_row(&self, product: &Product) -> String {
        self.row(self.columns.iter().map(|column| column.render_value(product)))
    }

    fn row(&self, cells: impl Iterator<Item = String>) -> String {
        let mut row = self.format.open_row();
        row.extend(cells);
        row.push_str(&self.format.close_row());
        row
    }
}
