use crate::{
    api::{self, UserRecord},
    components::{
        fetch::render_fetch_state,
        layout::Layout,
        table::{JoinDateStyle, UsersTable},
    },
    router::AppRoute,
    state::page_data::{use_page_data, PageData},
};
use leptos::*;

#[component]
pub fn UsersView(users: Vec<UserRecord>) -> impl IntoView {
    let total = users.len();
    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl md:text-3xl font-medium text-fg">"User Details"</h1>
                <p class="text-fg-muted text-xs md:text-sm mt-1">"Manage and view all registered platform members"</p>
            </div>
            <section class="bg-surface-elevated rounded-[2rem] border border-border shadow-sm overflow-hidden">
                <div class="p-6 md:p-8 border-b border-border flex justify-between items-center gap-4">
                    <h3 class="font-bold text-lg md:text-xl text-fg">"All Users"</h3>
                    <span class="px-4 py-2 bg-surface-muted rounded-full text-xs font-medium text-fg-muted">
                        {format!("Total: {}", total)}
                    </span>
                </div>
                <div class="p-4 md:p-8">
                    <UsersTable users=users date_style=JoinDateStyle::Long/>
                </div>
            </section>
        </div>
    }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let PageData { state, retry } = use_page_data::<Vec<UserRecord>>(api::USERS);

    view! {
        <Layout route=AppRoute::Users>
            {move || {
                render_fetch_state(state.get(), "Loading User Details...", retry, |users| {
                    view! { <UsersView users=users/> }
                })
            }}
        </Layout>
    }
}
