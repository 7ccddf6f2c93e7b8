//! App Router

use salvo::Router;

use crate::{dashboard, products};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("produto")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler)
                        .push(Router::with_path("movimento").post(products::movements::handler)),
                ),
        )
        .push(Router::with_path("api/dados").get(dashboard::data::handler))
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use serde_json::json;
    use testresult::TestResult;

    use stockroom_app::domain::products::{MockProductsService, records::ProductUuid};

    use crate::{
        products::responses::{ProductCreatedResponse, ProductResponse},
        test_helpers::{make_product, state_with_products},
    };

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(state_with_products(repo)))
                .push(app_router()),
        )
    }

    #[tokio::test]
    async fn test_created_product_is_readable_by_returned_id() -> TestResult {
        let uuid = ProductUuid::new();
        let created = make_product(uuid);
        let fetched = created.clone();

        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .return_once(move |_| Ok(created));

        repo.expect_get_product()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| Ok(fetched));

        let service = make_service(repo);

        let created: ProductCreatedResponse = TestClient::post("http://example.com/produto")
            .json(&json!({ "name": "Widget", "value": 1.5 }))
            .send(&service)
            .await
            .take_json()
            .await?;

        let product: ProductResponse =
            TestClient::get(format!("http://example.com/produto/{}", created.id))
                .send(&service)
                .await
                .take_json()
                .await?;

        assert_eq!(product.id, created.id);
        assert_eq!(product.name, "Widget");

        Ok(())
    }

    #[tokio::test]
    async fn test_movement_route_is_nested_under_product() -> TestResult {
        let uuid = ProductUuid::new();
        let product = make_product(uuid);

        let mut repo = MockProductsService::new();

        repo.expect_append_movement()
            .once()
            .withf(move |u, movement| *u == uuid && (movement.quantity - 7.0).abs() < f64::EPSILON)
            .return_once(move |_, _| Ok(product));

        let res = TestClient::post(format!("http://example.com/produto/{uuid}/movimento"))
            .json(&json!({ "quantity": 7 }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }
}
