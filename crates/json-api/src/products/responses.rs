//! Product response payloads.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockroom_app::domain::products::records::{MovementRecord, ProductRecord};

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: Uuid,

    /// The product name
    pub name: String,

    /// The product value
    pub value: f64,

    /// Stock movements in the order they were recorded
    pub movements: Vec<MovementResponse>,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.uuid.into(),
            name: product.name,
            value: product.value,
            movements: product.movements.into_iter().map(Into::into).collect(),
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// Movement Response
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub(crate) struct MovementResponse {
    /// Quantity moved
    pub quantity: f64,

    /// When the movement happened
    pub date: String,
}

impl From<MovementRecord> for MovementResponse {
    fn from(movement: MovementRecord) -> Self {
        MovementResponse {
            quantity: movement.quantity,
            date: movement.date.to_string(),
        }
    }
}

/// Product Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductCreatedResponse {
    /// Human-readable outcome
    pub message: String,

    /// Created product id
    pub id: Uuid,
}
