//! Stock summary used to feed the dashboard chart.

use crate::domain::products::records::ProductRecord;

/// Parallel label/quantity series, one entry per product in store order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockSummary {
    pub labels: Vec<String>,
    pub quantities: Vec<f64>,
}

impl StockSummary {
    #[must_use]
    pub fn from_products(products: &[ProductRecord]) -> Self {
        let (labels, quantities) = products
            .iter()
            .map(|product| (product.name.clone(), product.stock_level()))
            .unzip();

        Self { labels, quantities }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use crate::domain::products::records::{MovementRecord, ProductUuid};

    use super::*;

    fn product(name: &str, quantities: &[f64]) -> ProductRecord {
        ProductRecord {
            uuid: ProductUuid::new(),
            name: name.to_string(),
            value: 0.0,
            movements: quantities
                .iter()
                .map(|quantity| MovementRecord {
                    quantity: *quantity,
                    date: Timestamp::UNIX_EPOCH,
                })
                .collect(),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn sums_movements_per_product_in_order() {
        let summary = StockSummary::from_products(&[product("A", &[3.0, 2.0]), product("B", &[5.0])]);

        assert_eq!(summary.labels, vec!["A", "B"]);
        assert_eq!(summary.quantities, vec![5.0, 5.0]);
    }

    #[test]
    fn empty_store_yields_empty_series() {
        assert_eq!(StockSummary::from_products(&[]), StockSummary::default());
    }

    #[test]
    fn product_without_movements_sums_to_zero() {
        let summary = StockSummary::from_products(&[product("C", &[])]);

        assert_eq!(summary.quantities, vec![0.0]);
    }
}
