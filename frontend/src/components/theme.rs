use crate::state::theme::{use_theme, Theme};
use leptos::*;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme_state = use_theme();
    let current_theme = theme_state.current();
    let is_dark = move || current_theme.get() == Theme::Dark;

    let on_click = move |_| theme_state.toggle();

    view! {
        <button
            type="button"
            class="relative inline-flex h-6 w-11 items-center rounded-full bg-surface-elevated border border-border transition-colors focus:outline-none focus:ring-2 focus:ring-action-primary-bg"
            on:click=on_click
            aria-label="Toggle theme"
            aria-pressed=move || { if is_dark() { "true" } else { "false" } }
        >
            <span class="sr-only">"Toggle theme"</span>
            <span class=move || {
                if is_dark() {
                    "inline-block h-4 w-4 transform rounded-full transition-transform shadow translate-x-6 bg-action-primary-bg"
                } else {
                    "inline-block h-4 w-4 transform rounded-full transition-transform shadow translate-x-1 bg-white"
                }
            }
            ></span>
        </button>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::theme::provide_theme;
    use crate::test_support::ssr::render_to_string;
    use crate::utils::storage::{KeyValueStore, MemoryStorage};
    use std::rc::Rc;

    #[test]
    fn toggle_reflects_stored_dark_theme() {
        let html = render_to_string(|| {
            let storage = Rc::new(MemoryStorage::default());
            storage.set("theme", "dark").unwrap();
            provide_theme(storage);
            view! { <ThemeToggle/> }
        });
        assert!(html.contains("aria-pressed=\"true\""));
        assert!(html.contains("translate-x-6"));
    }

    #[test]
    fn toggle_defaults_to_light() {
        let html = render_to_string(|| {
            provide_theme(Rc::new(MemoryStorage::default()));
            view! { <ThemeToggle/> }
        });
        assert!(html.contains("aria-pressed=\"false\""));
        assert!(html.contains("translate-x-1"));
    }
}
