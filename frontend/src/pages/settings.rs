use crate::{
    components::{layout::Layout, theme::ThemeToggle},
    router::AppRoute,
};
use leptos::*;

const TABS: &[&str] = &[
    "General Profile",
    "Security & Password",
    "Notifications",
    "Data Privacy",
];

#[component]
fn SettingTab(label: &'static str, active: bool) -> impl IntoView {
    let class = if active {
        "flex items-center justify-between p-4 rounded-2xl bg-action-primary-bg text-action-primary-text font-bold text-sm"
    } else {
        "flex items-center justify-between p-4 rounded-2xl text-fg-muted hover:bg-surface-muted text-sm"
    };
    view! {
        <li class=class aria-current={active.then_some("page")}>
            <span>{label}</span>
            <i class="fas fa-chevron-right text-xs"></i>
        </li>
    }
}

#[component]
fn InputGroup(label: &'static str, name: &'static str, placeholder: &'static str) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label for=name class="text-xs font-bold text-fg-muted uppercase tracking-wider">{label}</label>
            <input
                id=name
                name=name
                type="text"
                placeholder=placeholder
                class="w-full px-4 py-3 rounded-xl bg-surface-muted border border-border outline-none focus:ring-2 focus:ring-action-primary-bg"
            />
        </div>
    }
}

#[component]
pub fn SettingsView() -> impl IntoView {
    let tabs = TABS
        .iter()
        .enumerate()
        .map(|(i, label)| view! { <SettingTab label=*label active={i == 0}/> })
        .collect_view();

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-medium text-fg">"Settings"</h1>
                <p class="text-fg-muted text-sm">"Manage your account preferences and security"</p>
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-4 gap-8">
                <ul class="space-y-2">{tabs}</ul>
                <section class="lg:col-span-3 bg-surface-elevated p-8 rounded-[2rem] border border-border shadow-sm space-y-8">
                    <h3 class="font-bold text-xl text-fg">"Account Information"</h3>
                    <form class="grid grid-cols-1 md:grid-cols-2 gap-6" on:submit=|e: ev::SubmitEvent| e.prevent_default()>
                        <InputGroup label="Full Name" name="full_name" placeholder="John Doe"/>
                        <InputGroup label="Email Address" name="email" placeholder="john@example.com"/>
                        <div class="md:col-span-2 flex justify-end">
                            <button type="submit" class="px-8 py-3 rounded-xl bg-action-primary-bg text-action-primary-text font-bold text-sm">
                                "Save Changes"
                            </button>
                        </div>
                    </form>
                    <div class="flex items-center justify-between p-6 rounded-2xl bg-surface-muted">
                        <div>
                            <p class="font-bold text-fg">"Dark Mode"</p>
                            <p class="text-xs text-fg-muted">"Switch between light and dark themes"</p>
                        </div>
                        <ThemeToggle/>
                    </div>
                </section>
            </div>
        </div>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <Layout route=AppRoute::Settings>
            <SettingsView/>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn settings_view_has_form_and_theme_toggle() {
        let html = render_to_string(|| view! { <SettingsView/> });
        assert!(html.contains("Account Information"));
        assert!(html.contains("name=\"full_name\""));
        assert!(html.contains("Toggle theme"));
        assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
    }
}
