use crate::{
    api::{self, DashboardPayload},
    components::{fetch::render_fetch_state, layout::Layout},
    router::AppRoute,
    state::page_data::{use_page_data, PageData},
};
use leptos::*;

mod panel;

pub use panel::DashboardView;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let PageData { state, retry } = use_page_data::<DashboardPayload>(api::DASHBOARD);

    view! {
        <Layout route=AppRoute::Dashboard>
            {move || {
                render_fetch_state(state.get(), "Loading...", retry, |data| {
                    view! { <DashboardView data=data/> }
                })
            }}
        </Layout>
    }
}
