use crate::{
    components::{sidebar::Sidebar, theme::ThemeToggle},
    router::AppRoute,
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn Header(route: AppRoute) -> impl IntoView {
    view! {
        <header class="h-16 bg-surface-muted flex items-center rounded-2xl px-6 md:px-10 justify-between">
            <div class="flex items-center gap-4">
                <h2 class="text-lg font-semibold text-fg hidden md:block">{route.title()}</h2>
                <label class="input bg-surface-elevated flex items-center gap-2 px-3 py-2 rounded-xl">
                    <svg class="h-[1em] opacity-50" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">
                        <g stroke-linejoin="round" stroke-linecap="round" stroke-width="2.5" fill="none" stroke="currentColor">
                            <circle cx="11" cy="11" r="8"></circle>
                            <path d="m21 21-4.3-4.3"></path>
                        </g>
                    </svg>
                    <input type="search" class="grow bg-transparent outline-none text-sm" placeholder="Search"/>
                </label>
            </div>
            <div class="flex items-center gap-3">
                <ThemeToggle/>
            </div>
        </header>
    }
}

/// Shell for every protected page: sidebar, header and the page body.
#[component]
pub fn Layout(route: AppRoute, children: Children) -> impl IntoView {
    view! {
        <Title text=format!("{} | Donezo", route.title())/>
        <div class="flex min-h-screen p-4 gap-4 bg-surface">
            <div class="sticky top-0 h-screen">
                <Sidebar active=route/>
            </div>
            <div class="flex-1 flex flex-col gap-4 min-w-0">
                <Header route=route/>
                <main>{children()}</main>
            </div>
        </div>
    }
}

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="flex flex-col justify-center items-center gap-3 p-10" role="status">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
            {label.map(|text| view! {
                <p class="text-action-primary-bg font-bold animate-pulse">{text}</p>
            })}
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded-lg text-sm text-center" role="alert">
            {message}
        </div>
    }
}
