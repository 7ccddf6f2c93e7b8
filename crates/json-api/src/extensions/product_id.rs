//! Product id path parameter parsing.

use salvo::oapi::extract::PathParam;

use stockroom_app::domain::products::records::ProductUuid;

use crate::errors::ApiError;

pub(crate) trait ProductIdExt {
    fn into_product_uuid(self) -> Result<ProductUuid, ApiError>;
}

impl ProductIdExt for PathParam<String> {
    fn into_product_uuid(self) -> Result<ProductUuid, ApiError> {
        self.into_inner()
            .parse()
            .map_err(|_ignored: uuid::Error| ApiError::InvalidId)
    }
}
