//! Update Product Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    errors::ApiError,
    extensions::*,
    products::{
        requests::{parse_body, validate_product},
        responses::ProductResponse,
    },
    state::State,
};

/// Update Product Handler
///
/// Replaces the product's name, value and movements and returns the result.
#[endpoint(tags("products"), summary = "Update Product")]
pub(crate) async fn handler(
    id: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = id.into_product_uuid()?;

    let body = parse_body(req).await?;
    let update = validate_product(body, Timestamp::now())?;

    let updated = state
        .products()
        .update_product(product, update.into())
        .await?;

    Ok(Json(updated.into()))
}
