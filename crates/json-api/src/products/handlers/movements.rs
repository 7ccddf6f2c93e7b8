//! Append Movement Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    errors::{ApiError, MessageResponse},
    extensions::*,
    products::requests::{parse_body, validate_movement},
    state::State,
};

/// Append Movement Handler
///
/// Adds one movement to the end of a product's movements. Duplicates are kept.
#[endpoint(
    tags("products"),
    summary = "Append Movement",
    responses(
        (status_code = StatusCode::CREATED, description = "Movement recorded"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = id.into_product_uuid()?;

    let body = parse_body(req).await?;
    let movement = validate_movement(body, Timestamp::now())?;

    state.products().append_movement(product, movement).await?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(MessageResponse::new("Movement created")))
}
