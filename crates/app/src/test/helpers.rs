//! Test Helpers

use crate::domain::products::data::NewProduct;

pub(crate) fn new_product(name: &str, value: f64) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        value,
        movements: Vec::new(),
    }
}
