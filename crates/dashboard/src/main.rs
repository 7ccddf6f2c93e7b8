//! Stockroom stock level dashboard.

use leptos::{logging::error, prelude::*};

use crate::chart::BarChart;

mod api;
mod chart;

/// Dashboard shell: fetches stock levels once and charts them.
#[component]
fn App() -> impl IntoView {
    let stock_levels = LocalResource::new(|| async {
        api::fetch_stock_levels(api::api_url())
            .await
            .inspect_err(|fetch_error| error!("failed to load stock levels: {fetch_error}"))
            .ok()
    });

    view! {
        <main class="dashboard">
            <h1>"Stock levels"</h1>
            {move || {
                stock_levels
                    .get()
                    .flatten()
                    .map_or_else(
                        || ().into_any(),
                        |levels| view! { <BarChart levels=levels /> }.into_any(),
                    )
            }}
        </main>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}
