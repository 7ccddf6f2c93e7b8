//! HTTP error responses.

use salvo::{
    oapi::{self, Components, EndpointOutRegister, Operation, ToSchema},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use stockroom_app::domain::products::ProductsServiceError;

use crate::products::requests::ValidationError;

/// Message Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageResponse {
    /// Human-readable outcome
    pub message: String,
}

impl MessageResponse {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors returned by the product routes, rendered as `{"message": ...}`.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid product id")]
    InvalidId,

    #[error("Product not found")]
    NotFound,

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub(crate) fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidId => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ProductsServiceError> for ApiError {
    fn from(error: ProductsServiceError) -> Self {
        match error {
            ProductsServiceError::NotFound => Self::NotFound,
            ProductsServiceError::InvalidData => {
                Self::Validation(ValidationError::new("product payload rejected by the store"))
            }
            ProductsServiceError::Sql(source) => {
                error!("product storage failure: {source}");

                Self::Internal
            }
        }
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status_code());
        res.render(Json(MessageResponse::new(self.to_string())));
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        for (status_code, description) in [
            (StatusCode::BAD_REQUEST, "Invalid payload or product id"),
            (StatusCode::NOT_FOUND, "Product not found"),
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        ] {
            operation.responses.insert(
                status_code.as_str(),
                oapi::Response::new(description).add_content(
                    "application/json",
                    MessageResponse::to_schema(components),
                ),
            );
        }
    }
}
