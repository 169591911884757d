//! Product records and the fields that can be projected into columns.
//!
//! A [`Product`] is a plain data holder. Every field is optional so that a
//! record coming from loosely-shaped input can still be exported: an absent
//! value simply renders as an empty cell.

use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::column::CellValue;
use crate::error::ExportError;
use crate::Result;

/// Column titles, indexed by field position (id, description, brand, model, stock).
pub const COLUMN_TITLES: [&str; 5] = ["ID", "Description", "Brand", "Model", "Stock"];

/// A single product record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub stock: Option<i64>,
}

impl Product {
    /// Create a fully populated product
    pub fn new(
        id: i64,
        description: impl Into<String>,
        brand: impl Into<String>,
        model: impl Into<String>,
        stock: i64,
    ) -> Self {
        Self {
            id: Some(id),
            description: Some(description.into()),
            brand: Some(brand.into()),
            model: Some(model.into()),
            stock: Some(stock),
        }
    }

    /// Builder: set id
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: set brand
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Builder: set model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Builder: set stock
    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = Some(stock);
        self
    }
}

/// A product field that can back a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductField {
    Id,
    Description,
    Brand,
    Model,
    Stock,
}

impl ProductField {
    /// Every field, in title order
    pub const ALL: [ProductField; 5] = [
        ProductField::Id,
        ProductField::Description,
        ProductField::Brand,
        ProductField::Model,
        ProductField::Stock,
    ];

    /// Fields wired into every exporter at construction.
    ///
    /// Brand and model have titles but are left for callers to add.
    pub const DEFAULTS: [ProductField; 3] = [
        ProductField::Id,
        ProductField::Description,
        ProductField::Stock,
    ];

    fn index(self) -> usize {
        match self {
            ProductField::Id => 0,
            ProductField::Description => 1,
            ProductField::Brand => 2,
            ProductField::Model => 3,
            ProductField::Stock => 4,
        }
    }

    /// Column title for this field
    pub fn title(self) -> &'static str {
        COLUMN_TITLES[self.index()]
    }

    /// Plain function projecting this field out of a product
    pub fn accessor(self) -> fn(&Product) -> CellValue {
        match self {
            ProductField::Id => id,
            ProductField::Description => description,
            ProductField::Brand => brand,
            ProductField::Model => model,
            ProductField::Stock => stock,
        }
    }
}

fn id(product: &Product) -> CellValue {
    product.id.into()
}

fn description(product: &Product) -> CellValue {
    product.description.as_deref().into()
}

fn brand(product: &Product) -> CellValue {
    product.brand.as_deref().into()
}

fn model(product: &Product) -> CellValue {
    product.model.as_deref().into()
}

fn stock(product: &Product) -> CellValue {
    product.stock.into()
}

impl FromStr for ProductField {
    type Err = ExportError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "id" => Ok(ProductField::Id),
            "description" | "desc" => Ok(ProductField::Description),
            "brand" => Ok(ProductField::Brand),
            "model" => Ok(ProductField::Model),
            "stock" => Ok(ProductField::Stock),
            _ => Err(ExportError::UnknownField(s.to_string())),
        }
    }
}

/// Parse a JSON array of products, keeping input order.
pub fn parse_products(json: &str) -> Result<Vec<Product>> {
    Ok(serde_json::from_str(json)?)
}

/// Read a JSON array of products from any reader (e.g. stdin).
pub fn read_products_from<R: Read>(reader: R) -> Result<Vec<Product>> {
    let content = std::io::read_to_string(reader)?;
    parse_products(&content)
}

/// Read a JSON array of products from a file.
pub fn read_products(path: impl AsRef<Path>) -> Result<Vec<Product>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| ExportError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let products = parse_products(&content)?;
    log::debug!("read {} products from {}", products.len(), path.display());
    Ok(products)
}
