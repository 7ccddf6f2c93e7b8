//! Products Data

use jiff::Timestamp;

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub value: f64,
    pub movements: Vec<NewMovement>,
}

/// Product Update Data
///
/// Replaces the name, value and full movement list of an existing product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub name: String,
    pub value: f64,
    pub movements: Vec<NewMovement>,
}

/// New Movement Data
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewMovement {
    pub quantity: f64,
    pub date: Timestamp,
}

impl From<NewProduct> for ProductUpdate {
    fn from(product: NewProduct) -> Self {
        Self {
            name: product.name,
            value: product.value,
            movements: product.movements,
        }
    }
}
