use crate::{
    api::ApiError,
    components::layout::LoadingSpinner,
    router::AppRoute,
    state::page_data::FetchState,
};
use leptos::*;

#[component]
pub fn FetchErrorPanel(error: ApiError, retry: Callback<()>) -> impl IntoView {
    let code = match error.status() {
        Some(status) => format!("{} ({})", error.code(), status),
        None => error.code().to_string(),
    };
    let can_retry = error.is_retryable();
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text rounded-2xl p-8 flex flex-col items-center gap-3 text-center" role="alert">
            <p class="font-bold">{error.to_string()}</p>
            <p class="text-xs opacity-75">{format!("Code: {}", code)}</p>
            {if can_retry {
                view! {
                    <button
                        type="button"
                        class="mt-2 px-6 py-2 rounded-full bg-action-primary-bg text-action-primary-text text-sm font-medium"
                        on:click=move |_| retry.call(())
                    >
                        "Try again"
                    </button>
                }
                .into_view()
            } else {
                view! {
                    <a href=AppRoute::Login.path() class="mt-2 text-sm font-semibold underline">
                        "Go to sign in"
                    </a>
                }
                .into_view()
            }}
        </div>
    }
}

/// Exhaustive rendering of a page's fetch: spinner, error panel or content.
pub fn render_fetch_state<T, V>(
    state: FetchState<T>,
    loading_label: &'static str,
    retry: Callback<()>,
    render: impl FnOnce(T) -> V,
) -> View
where
    V: IntoView,
{
    match state {
        FetchState::Pending => view! { <LoadingSpinner label=loading_label/> }.into_view(),
        FetchState::Failure(error) => view! { <FetchErrorPanel error=error retry=retry/> }.into_view(),
        FetchState::Success(data) => render(data).into_view(),
    }
}
