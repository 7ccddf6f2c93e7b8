//! Stock level fetching.

use serde::Deserialize;
use thiserror::Error;

/// Aggregation endpoint used when no URL is baked in at build time.
const DEFAULT_API_URL: &str = "http://localhost:8080/api/dados";

/// URL of the stock aggregation endpoint.
pub(crate) fn api_url() -> &'static str {
    option_env!("STOCKROOM_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Stock levels as served by `/api/dados`: parallel name and quantity series.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct StockLevels {
    pub labels: Vec<String>,
    pub quantidades: Vec<f64>,
}

impl StockLevels {
    /// Pair each label with its quantity; unmatched trailing entries are dropped.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.quantidades.iter().copied())
    }
}

#[derive(Debug, Error)]
pub(crate) enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not decode stock levels: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Fetch the current stock levels once.
pub(crate) async fn fetch_stock_levels(url: &str) -> Result<StockLevels, FetchError> {
    let request_failed = |source| FetchError::Request {
        url: url.to_string(),
        source,
    };

    reqwest::get(url)
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(request_failed)?
        .json::<StockLevels>()
        .await
        .map_err(FetchError::Decode)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn decodes_aggregation_payload() -> TestResult {
        let levels: StockLevels =
            serde_json::from_str(r#"{"labels":["A","B"],"quantidades":[5,-2.5]}"#)?;

        assert_eq!(
            levels.entries().collect::<Vec<_>>(),
            vec![("A", 5.0), ("B", -2.5)]
        );

        Ok(())
    }

    #[test]
    fn entries_ignore_unpaired_values() {
        let levels = StockLevels {
            labels: vec!["A".to_string()],
            quantidades: vec![1.0, 2.0],
        };

        assert_eq!(levels.entries().count(), 1);
    }

    #[test]
    fn api_url_defaults_to_local_server() {
        if option_env!("STOCKROOM_API_URL").is_none() {
            assert_eq!(api_url(), DEFAULT_API_URL);
        }
    }
}
