//! Dashboard Data Handler

use std::sync::Arc;

use salvo::{
    oapi::{self, Components, EndpointOutRegister, Operation, ToSchema},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use stockroom_app::domain::products::summary::StockSummary;

use crate::state::State;

/// Dashboard Data Response
///
/// `labels[i]` is the name of a product and `quantidades[i]` its net stock.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DashboardDataResponse {
    /// Product names, in store order
    pub labels: Vec<String>,

    /// Net stock per product, aligned with `labels`
    pub quantidades: Vec<f64>,
}

impl From<StockSummary> for DashboardDataResponse {
    fn from(summary: StockSummary) -> Self {
        Self {
            labels: summary.labels,
            quantidades: summary.quantities,
        }
    }
}

/// Dashboard Error Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DashboardErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
#[error("Failed to load dashboard data")]
pub(crate) struct DashboardError;

impl Scribe for DashboardError {
    fn render(self, res: &mut Response) {
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        res.render(Json(DashboardErrorResponse {
            error: self.to_string(),
        }));
    }
}

impl EndpointOutRegister for DashboardError {
    fn register(components: &mut Components, operation: &mut Operation) {
        operation.responses.insert(
            StatusCode::INTERNAL_SERVER_ERROR.as_str(),
            oapi::Response::new("Failed to load dashboard data").add_content(
                "application/json",
                DashboardErrorResponse::to_schema(components),
            ),
        );
    }
}

/// Dashboard Data Handler
///
/// Returns every product's name alongside the sum of its movement quantities.
#[endpoint(tags("dashboard"), summary = "Stock Levels")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<DashboardDataResponse>, DashboardError> {
    let state = depot.obtain::<Arc<State>>().map_err(|_ignored| {
        error!("application state missing from depot");

        DashboardError
    })?;

    let products = state.products().list_products().await.map_err(|source| {
        error!("failed to load dashboard data: {source}");

        DashboardError
    })?;

    Ok(Json(StockSummary::from_products(&products).into()))
}
