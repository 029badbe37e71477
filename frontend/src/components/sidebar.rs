use crate::{
    router::AppRoute,
    state::{auth, session::use_session},
};
use leptos::*;

pub struct MenuSection {
    pub title: &'static str,
    pub items: &'static [AppRoute],
}

pub const MENU: &[MenuSection] = &[
    MenuSection {
        title: "MENU",
        items: &[
            AppRoute::Dashboard,
            AppRoute::Overview,
            AppRoute::Users,
            AppRoute::Products,
            AppRoute::Analytics,
        ],
    },
    MenuSection {
        title: "GENERAL",
        items: &[AppRoute::Settings, AppRoute::Help],
    },
];

const ITEM_CLASS: &str = "flex items-center gap-3 px-3 py-2 rounded-lg transition-all duration-200 text-sm font-medium";

fn item_class(item: AppRoute, active: AppRoute) -> String {
    if item == active {
        format!("{} bg-action-primary-bg text-action-primary-text shadow", ITEM_CLASS)
    } else {
        format!(
            "{} text-fg-muted hover:bg-action-ghost-bg-hover hover:text-fg",
            ITEM_CLASS
        )
    }
}

#[component]
pub fn Sidebar(active: AppRoute) -> impl IntoView {
    let session = use_session();
    let on_logout = move |_: ev::MouseEvent| auth::logout(&session);

    view! {
        <aside class="w-64 h-screen bg-surface-muted rounded-2xl p-4 flex flex-col shadow-md">
            <div class="flex items-center gap-3 px-2 mb-8">
                <span class="text-xl font-semibold text-fg">"Donezo"</span>
            </div>
            <nav class="flex-1 space-y-6">
                {MENU.iter().map(|section| view! {
                    <div>
                        <p class="text-xs text-fg-muted font-semibold px-2 mb-2">{section.title}</p>
                        <ul class="space-y-1">
                            {section.items.iter().map(|item| view! {
                                <li>
                                    <a
                                        href=item.path()
                                        class=item_class(*item, active)
                                        aria-current={(*item == active).then_some("page")}
                                    >
                                        {item.title()}
                                    </a>
                                </li>
                            }).collect_view()}
                            {(section.title == "GENERAL").then(|| view! {
                                <li>
                                    <button type="button" class=item_class(AppRoute::Login, active) on:click=on_logout.clone()>
                                        "Logout"
                                    </button>
                                </li>
                            })}
                        </ul>
                    </div>
                }).collect_view()}
            </nav>
            <div class="mt-6 bg-action-primary-bg rounded-xl p-4 text-action-primary-text">
                <p class="text-sm font-semibold">"Download our Mobile App"</p>
                <p class="text-xs opacity-80 mt-1">"Get easy access anytime"</p>
            </div>
        </aside>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::signed_in_session;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn sidebar_renders_sections_and_logout() {
        let html = render_to_string(move || {
            signed_in_session();
            view! { <Sidebar active=AppRoute::Products/> }
        });
        assert!(html.contains("MENU"));
        assert!(html.contains("GENERAL"));
        assert!(html.contains("href=\"/analytics\""));
        assert!(html.contains("Logout"));
        assert!(html.contains("aria-current=\"page\""));
    }
}
