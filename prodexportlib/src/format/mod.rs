//! Output formats: the hook points of the export template.
//!
//! This module defines [`TableFormat`], the set of format-specific fragments
//! the exporter delegates to, and the factory that resolves a format
//! identifier to an exporter:
//!
//! - **Markdown**: pipe tables with a dashed header rule
//! - **HTML**: a `<table>` with one `<tr>` per row
//!
//! The concrete variants are private to this module. Callers obtain them
//! through [`new_exporter`] / [`exporter_for`], or plug in their own format by
//! implementing [`TableFormat`] and passing it to
//! [`TableExporter::new`](crate::TableExporter::new).
//!
//! ## Example
//!
//! ```rust
//! use prodexportlib::{exporter_for, Product};
//!
//! let exporter = exporter_for("md").unwrap();
//! let table = exporter.export(&[Product::new(7, "Widget", "Acme", "W-1", 3)]);
//! assert!(table.contains("|7|Widget|3"));
//! ```

mod html;
mod markdown;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::column::{Accessor, Column};
use crate::error::ExportError;
use crate::exporter::TableExporter;
use crate::Result;

/// Format-specific fragments consumed by [`TableExporter::export`].
///
/// Implementors only provide punctuation and column construction; the order
/// in which fragments are emitted is fixed by the exporter.
pub trait TableFormat {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Emitted once before the header row
    fn open_table(&self) -> String;

    /// Emitted once after the last data row
    fn close_table(&self) -> String;

    /// Emitted before the cells of each row
    fn open_row(&self) -> String;

    /// Emitted after the cells of each row
    fn close_row(&self) -> String;

    /// Separator between the header and the data rows (may be empty)
    fn close_header_row(&self, columns: &[Column]) -> String;

    /// Build a column decorated for this format
    fn make_column(&self, accessor: Accessor, title: &str) -> Column;
}

impl<F: TableFormat + ?Sized> TableFormat for Box<F> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn open_table(&self) -> String {
        (**self).open_table()
    }

    fn close_table(&self) -> String {
        (**self).close_table()
    }

    fn open_row(&self) -> String {
        (**self).open_row()
    }

    fn close_row(&self) -> String {
        (**self).close_row()
    }

    fn close_header_row(&self, columns: &[Column]) -> String {
        (**self).close_header_row(columns)
    }

    fn make_column(&self, accessor: Accessor, title: &str) -> Column {
        (**self).make_column(accessor, title)
    }
}

/// A format resolved from the factory.
pub type DynFormat = Box<dyn TableFormat + Send + Sync>;

/// Known output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    /// Markdown pipe table
    #[default]
    Markdown,
    /// HTML table
    Html,
}

impl FormatKind {
    /// Every supported format
    pub const ALL: [FormatKind; 2] = [FormatKind::Markdown, FormatKind::Html];

    /// Canonical file extension (without the dot)
    pub fn extension(self) -> &'static str {
        match self {
            FormatKind::Markdown => "md",
            FormatKind::Html => "html",
        }
    }

    /// Resolve a format from a file's extension
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .ok_or_else(|| ExportError::UnknownFormat(path.display().to_string()))?;
        ext.parse()
    }

    fn build(self) -> DynFormat {
        match self {
            FormatKind::Markdown => Box::new(markdown::Markdown),
            FormatKind::Html => Box::new(html::Html),
        }
    }
}

impl FromStr for FormatKind {
    type Err = ExportError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().trim_start_matches('.').to_lowercase().as_str() {
            "md" | "markdown" => Ok(FormatKind::Markdown),
            "html" | "htm" => Ok(FormatKind::Html),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormatKind::Markdown => "markdown",
            FormatKind::Html => "html",
        };
        f.write_str(name)
    }
}

/// Create an exporter for `kind` with the default columns installed.
pub fn new_exporter(kind: FormatKind) -> TableExporter<DynFormat> {
    TableExporter::new(kind.build())
}

/// Create an exporter from a format identifier or file extension (`md`, `.html`, ...).
pub fn exporter_for(identifier: &str) -> Result<TableExporter<DynFormat>> {
    let kind: FormatKind = identifier.parse()?;
    log::debug!("resolved format identifier '{}' to {}", identifier, kind);
    Ok(new_exporter(kind))
}
