use crate::{
    api::{self, Product},
    components::{fetch::render_fetch_state, layout::Layout},
    router::AppRoute,
    state::page_data::{use_page_data, PageData},
};
use leptos::*;

mod panel;
pub mod utils;

pub use panel::ProductsView;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let PageData { state, retry } = use_page_data::<Vec<Product>>(api::PRODUCTS);
    // Lives at page level so a retry does not empty the cart.
    let cart = create_rw_signal(utils::Cart::default());

    view! {
        <Layout route=AppRoute::Products>
            {move || {
                render_fetch_state(state.get(), "Loading Products...", retry, |products| {
                    view! { <ProductsView products=products cart=cart/> }
                })
            }}
        </Layout>
    }
}
