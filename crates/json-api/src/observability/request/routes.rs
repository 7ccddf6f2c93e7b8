//! Route labels for spans and metrics.
//!
//! Labels come from a fixed set so client-chosen paths can't grow metric
//! cardinality.

/// Label for any path the router does not serve.
pub(super) const UNMATCHED_ROUTE: &str = "unmatched";

/// Map a request path to the route template that serves it.
pub(super) fn route_label(path: &str) -> &'static str {
    let segments: Vec<&str> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    match segments.as_slice() {
        [] => "/",
        ["produto"] => "/produto",
        ["produto", _] => "/produto/{id}",
        ["produto", _, "movimento"] => "/produto/{id}/movimento",
        ["api", "dados"] => "/api/dados",
        ["healthcheck"] => "/healthcheck",
        ["metrics"] => "/metrics",
        ["api-doc", "openapi.json"] => "/api-doc/openapi.json",
        ["docs", ..] => "/docs",
        _ => UNMATCHED_ROUTE,
    }
}
