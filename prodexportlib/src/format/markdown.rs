//! Markdown pipe tables.

use crate::column::{Accessor, Column, Decoration};

use super::TableFormat;

/// Dashes under each header cell
const RULE: &str = "---------";

/// Markdown variant: `|`-opened cells, newline-terminated rows.
///
/// Cell text is written as-is, so a value containing `|` or a newline
/// splits into extra cells or rows.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Markdown;

impl TableFormat for Markdown {
    fn name(&self) -> &str {
        "markdown"
    }

    fn open_table(&self) -> String {
        String::new()
    }

    fn close_table(&self) -> String {
        "\n".to_string()
    }

    fn open_row(&self) -> String {
        String::new()
    }

    fn close_row(&self) -> String {
        "\n".to_string()
    }

    fn close_header_row(&self, columns: &[Column]) -> String {
        let mut rule: String = columns
            .iter()
            .map(|column| format!("{}{}", column.open(), RULE))
            .collect();
        rule.push('\n');
        rule
    }

    fn make_column(&self, accessor: Accessor, title: &str) -> Column {
        Column::new(title, accessor, Decoration::new("|", ""))
    }
}
