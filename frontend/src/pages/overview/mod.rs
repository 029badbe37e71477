use crate::{
    api::{self, OverviewStats},
    components::{fetch::render_fetch_state, layout::Layout},
    router::AppRoute,
    state::page_data::{use_page_data, PageData},
};
use leptos::*;

mod panel;
pub mod utils;

pub use panel::OverviewView;

#[component]
pub fn OverviewPage() -> impl IntoView {
    let PageData { state, retry } = use_page_data::<OverviewStats>(api::OVERVIEW);

    view! {
        <Layout route=AppRoute::Overview>
            {move || {
                render_fetch_state(state.get(), "Gathering Intelligence...", retry, |stats| {
                    view! { <OverviewView stats=stats/> }
                })
            }}
        </Layout>
    }
}
