//! HTML tables.

use crate::column::{Accessor, Column, Decoration};

use super::TableFormat;

/// HTML variant: one `<tr>` per row, `<td>` cells, no separator row.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Html;

impl TableFormat for Html {
    fn name(&self) -> &str {
        "html"
    }

    fn open_table(&self) -> String {
        "<table>\n".to_string()
    }

    fn close_table(&self) -> String {
        "</table>\n".to_string()
    }

    fn open_row(&self) -> String {
        "  <tr>".to_string()
    }

    fn close_row(&self) -> String {
        "</tr>\n".to_string()
    }

    fn close_header_row(&self, _columns: &[Column]) -> String {
        String::new()
    }

    fn make_column(&self, accessor: Accessor, title: &str) -> Column {
        Column::new(title, accessor, Decoration::new("<td>", "</td>")).with_escape(escape)
    }
}

/// Escape text for use inside an element body.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
