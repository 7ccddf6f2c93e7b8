//! List Products Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    errors::ApiError, extensions::*, products::responses::ProductResponse, state::State,
};

/// List Products Handler
///
/// Returns every product, oldest first.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state.products().list_products().await?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use stockroom_app::domain::products::{
        MockProductsService, ProductsServiceError, errors::StorageError, records::ProductUuid,
    };

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("produto").get(handler))
    }

    #[tokio::test]
    async fn test_list_returns_products_in_store_order() -> TestResult {
        let first = ProductUuid::new();
        let second = ProductUuid::new();
        let products = vec![make_product(first), make_product(second)];

        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .return_once(move || Ok(products));

        let mut res = TestClient::get("http://example.com/produto")
            .send(&make_service(repo))
            .await;

        let body: Vec<ProductResponse> = res.take_json().await?;
        let ids: Vec<_> = body.iter().map(|product| product.id).collect();

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(ids, vec![first.into_uuid(), second.into_uuid()]);

        Ok(())
    }

    #[tokio::test]
    async fn test_list_empty_store_returns_empty_array() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .return_once(|| Ok(Vec::new()));

        let mut res = TestClient::get("http://example.com/produto")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, "[]");

        Ok(())
    }

    #[tokio::test]
    async fn test_list_storage_failure_returns_500() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .return_once(|| Err(ProductsServiceError::Sql(StorageError::PoolTimedOut)));

        let mut res = TestClient::get("http://example.com/produto")
            .send(&make_service(repo))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body["message"], "Internal server error");

        Ok(())
    }
}
