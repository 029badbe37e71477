use crate::{
    api::{self, AnalyticsPoint},
    components::{fetch::render_fetch_state, layout::Layout},
    router::AppRoute,
    state::page_data::{use_page_data, PageData},
};
use leptos::*;

mod panel;
pub mod utils;

pub use panel::AnalyticsView;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let PageData { state, retry } = use_page_data::<Vec<AnalyticsPoint>>(api::ANALYTICS);

    view! {
        <Layout route=AppRoute::Analytics>
            {move || {
                render_fetch_state(state.get(), "Analyzing Data...", retry, |points| {
                    view! { <AnalyticsView points=points/> }
                })
            }}
        </Layout>
    }
}
