//! App Context

use std::{fmt, sync::Arc};

use sqlx::migrate::MigrateError;
use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db},
    domain::products::{PgProductsService, ProductsService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    db: Option<Db>,
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("db", &self.db)
            .finish_non_exhaustive()
    }
}

impl AppContext {
    /// Build an application context around an existing products service.
    #[must_use]
    pub fn new(products: Arc<dyn ProductsService>) -> Self {
        Self { products, db: None }
    }

    /// Build application context from a database URL, applying pending migrations.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        db.migrate().await.map_err(AppInitError::Migrations)?;

        info!("database migrations applied");

        Ok(Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            db: Some(db),
        })
    }

    /// Release the database connection pool, if this context owns one.
    pub async fn close(&self) {
        if let Some(db) = &self.db {
            db.close().await;

            info!("database connections closed");
        }
    }
}
