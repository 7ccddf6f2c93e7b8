//! Create Product Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{http::header::LOCATION, prelude::*};

use crate::{
    errors::ApiError,
    extensions::*,
    products::{
        requests::{parse_body, validate_product},
        responses::ProductCreatedResponse,
    },
    state::State,
};

/// Create Product Handler
///
/// Accepts `{name, value, movements?}`; omitted movement dates default to now.
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductCreatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let body = parse_body(req).await?;
    let product = validate_product(body, Timestamp::now())?;

    let uuid = state.products().create_product(product).await?.uuid;

    res.add_header(LOCATION, format!("/produto/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(ProductCreatedResponse {
        message: "Product created".to_string(),
        id: uuid.into(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use stockroom_app::domain::products::{
        MockProductsService, ProductsServiceError,
        data::{NewMovement, NewProduct},
        errors::StorageError,
        records::ProductUuid,
    };

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("produto").post(handler))
    }

    #[tokio::test]
    async fn test_create_product_success() -> TestResult {
        let uuid = ProductUuid::new();
        let product = make_product(uuid);
        let date: Timestamp = "2026-02-21T12:00:00Z".parse()?;

        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .withf(move |new| {
                *new == NewProduct {
                    name: "Parafuso".to_string(),
                    value: 0.35,
                    movements: vec![NewMovement {
                        quantity: 10.0,
                        date,
                    }],
                }
            })
            .return_once(move |_| Ok(product));

        repo.expect_get_product().never();
        repo.expect_list_products().never();

        let mut res = TestClient::post("http://example.com/produto")
            .json(&json!({
                "name": "Parafuso",
                "value": 0.35,
                "movements": [{ "quantity": 10, "date": "2026-02-21T12:00:00Z" }]
            }))
            .send(&make_service(repo))
            .await;

        let body: ProductCreatedResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/produto/{uuid}").as_str()));
        assert_eq!(body.id, uuid.into_uuid());
        assert_eq!(body.message, "Product created");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_without_movements_stores_empty_list() -> TestResult {
        let uuid = ProductUuid::new();
        let product = make_product(uuid);

        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .withf(|new| new.name == "A" && new.movements.is_empty())
            .return_once(move |_| Ok(product));

        let res = TestClient::post("http://example.com/produto")
            .json(&json!({ "name": "A", "value": 1 }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_missing_name_returns_400_without_storing() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();

        let mut res = TestClient::post("http://example.com/produto")
            .json(&json!({ "value": 1 }))
            .send(&make_service(repo))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body["message"], "\"name\" is required");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_non_numeric_quantity_names_the_movement() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();

        let mut res = TestClient::post("http://example.com/produto")
            .json(&json!({
                "name": "A",
                "value": 1,
                "movements": [{ "quantity": "many" }]
            }))
            .send(&make_service(repo))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body["message"], "\"movements[0].quantity\" must be a number");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_mistyped_value_without_name_reports_name() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();

        let mut res = TestClient::post("http://example.com/produto")
            .json(&json!({ "value": "abc" }))
            .send(&make_service(repo))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body["message"], "\"name\" is required");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_non_numeric_value_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();

        let mut res = TestClient::post("http://example.com/produto")
            .json(&json!({ "name": "A", "value": "abc" }))
            .send(&make_service(repo))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body["message"], "\"value\" must be a number");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_unknown_field_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();

        let mut res = TestClient::post("http://example.com/produto")
            .json(&json!({ "name": "A", "value": 1, "foo": 2 }))
            .send(&make_service(repo))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body["message"], "\"foo\" is not allowed");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_accepts_date_only_and_epoch_millis_dates() -> TestResult {
        let uuid = ProductUuid::new();
        let product = make_product(uuid);
        let midnight: Timestamp = "2026-02-21T00:00:00Z".parse()?;
        let noon: Timestamp = "2026-02-21T12:00:00Z".parse()?;

        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .withf(move |new| {
                new.movements
                    == vec![
                        NewMovement {
                            quantity: 1.0,
                            date: midnight,
                        },
                        NewMovement {
                            quantity: 2.0,
                            date: noon,
                        },
                    ]
            })
            .return_once(move |_| Ok(product));

        let res = TestClient::post("http://example.com/produto")
            .json(&json!({
                "name": "A",
                "value": 1,
                "movements": [
                    { "quantity": 1, "date": "2026-02-21" },
                    { "quantity": 2, "date": 1_771_675_200_000_i64 }
                ]
            }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_from_urlencoded_form() -> TestResult {
        let uuid = ProductUuid::new();
        let product = make_product(uuid);

        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .withf(|new| {
                *new == NewProduct {
                    name: "Porca".to_string(),
                    value: 0.2,
                    movements: Vec::new(),
                }
            })
            .return_once(move |_| Ok(product));

        let res = TestClient::post("http://example.com/produto")
            .raw_form("name=Porca&value=0.2")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_storage_failure_returns_500() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::Sql(StorageError::PoolClosed)));

        let res = TestClient::post("http://example.com/produto")
            .json(&json!({ "name": "A", "value": 1 }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
