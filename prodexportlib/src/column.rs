//! Columns: named projections of a product into decorated cell text.
//!
//! A column pairs a title with an accessor and carries the cell markers of the
//! format that created it. Columns are built through
//! [`TableFormat::make_column`](crate::format::TableFormat::make_column), so a
//! column always renders in the dialect of the exporter that owns it.

use std::fmt;
use std::sync::Arc;

use crate::product::Product;

/// A displayable value extracted from a product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CellValue {
    /// An integer, rendered in base 10
    Int(i64),
    /// Text, rendered as-is
    Text(String),
    /// A missing value, rendered as an empty cell
    #[default]
    Empty,
}

impl CellValue {
    /// Check if this cell holds no value
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Int(v) => write!(f, "{}", v),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Empty => Ok(()),
        }
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Empty, Into::into)
    }
}

/// Function extracting one value from a product.
pub type Accessor = Arc<dyn Fn(&Product) -> CellValue + Send + Sync>;

/// Wrap a plain function or closure as an [`Accessor`].
pub fn accessor<F>(f: F) -> Accessor
where
    F: Fn(&Product) -> CellValue + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Markers placed around every cell of a column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoration {
    pub open: String,
    pub close: String,
}

impl Decoration {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Wrap `text` in the open/close markers
    pub fn wrap(&self, text: &str) -> String {
        format!("{}{}{}", self.open, text, self.close)
    }
}

/// Transforms raw cell text before decoration (e.g. HTML escaping).
pub type Escape = fn(&str) -> String;

/// A single table column.
#[derive(Clone)]
pub struct Column {
    title: String,
    accessor: Accessor,
    decoration: Decoration,
    escape: Option<Escape>,
}

impl Column {
    /// Create a column. Format variants call this from `make_column`.
    pub fn new(title: impl Into<String>, accessor: Accessor, decoration: Decoration) -> Self {
        Self {
            title: title.into(),
            accessor,
            decoration,
            escape: None,
        }
    }

    /// Builder: escape header and value text before decorating it
    pub fn with_escape(mut self, escape: Escape) -> Self {
        self.escape = Some(escape);
        self
    }

    /// Display title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Cell markers used by this column
    pub fn decoration(&self) -> &Decoration {
        &self.decoration
    }

    /// Raw value of this column for `product`
    pub fn value(&self, product: &Product) -> CellValue {
        (self.accessor)(product)
    }

    /// Decorated header cell
    pub fn render_header(&self) -> String {
        self.render(&self.title)
    }

    /// Decorated data cell for `product`; missing values give an empty cell
    pub fn render_value(&self, product: &Product) -> String {
        self.render(&self.value(product).to_string())
    }

    /// Leading cell marker
    pub fn open(&self) -> &str {
        &self.decoration.open
    }

    /// Trailing cell marker
    pub fn close(&self) -> &str {
        &self.decoration.close
    }

    fn render(&self, text: &str) -> String {
        match self.escape {
            Some(escape) => self.decoration.wrap(&escape(text)),
            None => self.decoration.wrap(text),
        }
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("title", &self.title)
            .field("decoration", &self.decoration)
            .finish_non_exhaustive()
    }
}
