//! State

use std::sync::Arc;

use stockroom_app::{context::AppContext, domain::products::ProductsService};

/// Shared request state injected into every route.
#[derive(Clone, Debug)]
pub(crate) struct State {
    app: AppContext,
}

impl State {
    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self { app })
    }

    /// Product store backing the `/produto` routes and the dashboard summary.
    pub(crate) fn products(&self) -> &dyn ProductsService {
        self.app.products.as_ref()
    }
}
