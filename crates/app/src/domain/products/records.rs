//! Product Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{domain::products::data::NewMovement, uuids::TypedUuid};

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub name: String,
    pub value: f64,
    pub movements: Vec<MovementRecord>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ProductRecord {
    /// Net stock held: the sum of every movement quantity, zero when there are none.
    #[must_use]
    pub fn stock_level(&self) -> f64 {
        self.movements
            .iter()
            .fold(0.0, |total, movement| total + movement.quantity)
    }
}

/// Movement Record
///
/// Stored embedded in the product's `movements` JSON array, in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovementRecord {
    pub quantity: f64,
    pub date: Timestamp,
}

impl From<NewMovement> for MovementRecord {
    fn from(movement: NewMovement) -> Self {
        Self {
            quantity: movement.quantity,
            date: movement.date,
        }
    }
}
