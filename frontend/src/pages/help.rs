use crate::{components::layout::Layout, router::AppRoute};
use leptos::*;

struct HelpTopic {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const TOPICS: &[HelpTopic] = &[
    HelpTopic {
        icon: "fa-book-open",
        title: "Guides",
        description: "Step-by-step tutorials for every tool.",
    },
    HelpTopic {
        icon: "fa-circle-question",
        title: "FAQ",
        description: "Common questions answered instantly.",
    },
    HelpTopic {
        icon: "fa-circle-play",
        title: "Videos",
        description: "Short walkthroughs of core features.",
    },
    HelpTopic {
        icon: "fa-comments",
        title: "Chat",
        description: "Live 24/7 support for Pro users.",
    },
];

const ARTICLES: &[(&str, &str)] = &[
    ("Getting started with your workspace", "4 min read"),
    ("Connecting your API to the Dashboard", "8 min read"),
    ("Managing team permissions and roles", "5 min read"),
    ("Understanding your billing and invoices", "3 min read"),
];

#[component]
pub fn HelpView() -> impl IntoView {
    let cards = TOPICS
        .iter()
        .map(|topic| {
            view! {
                <div class="bg-surface-elevated p-8 rounded-[2rem] border border-border shadow-sm">
                    <div class="w-12 h-12 rounded-2xl bg-surface-muted flex items-center justify-center mb-6">
                        <i class=format!("fas {}", topic.icon)></i>
                    </div>
                    <h4 class="font-bold text-lg text-fg mb-2">{topic.title}</h4>
                    <p class="text-fg-muted text-xs leading-relaxed font-medium">{topic.description}</p>
                </div>
            }
        })
        .collect_view();
    let articles = ARTICLES
        .iter()
        .map(|(title, time)| {
            view! {
                <li class="flex items-center justify-between p-4 rounded-xl hover:bg-surface-muted">
                    <span class="text-fg font-medium">{*title}</span>
                    <span class="text-xs text-fg-muted">{*time}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="space-y-10">
            <div class="text-center space-y-4 py-8">
                <h1 class="text-4xl md:text-5xl font-bold text-fg tracking-tight">"How can we help you today?"</h1>
                <p class="text-fg-muted text-lg max-w-lg mx-auto">
                    "Search our knowledge base for answers or reach out to our specialist team."
                </p>
                <input
                    type="text"
                    placeholder="Describe your issue (e.g. 'Reset password')"
                    class="w-full max-w-xl mx-auto block p-4 rounded-2xl bg-surface-elevated border border-border outline-none"
                />
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">{cards}</div>
            <section class="bg-surface-elevated p-8 rounded-[2rem] border border-border shadow-sm">
                <h3 class="font-bold text-xl text-fg mb-4">"Popular Articles"</h3>
                <ul class="space-y-2">{articles}</ul>
            </section>
            <p class="text-center text-fg-muted text-sm">"Couldn't find what you were looking for? Contact our support team."</p>
        </div>
    }
}

#[component]
pub fn HelpPage() -> impl IntoView {
    view! {
        <Layout route=AppRoute::Help>
            <HelpView/>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn help_view_lists_topics_and_articles() {
        let html = render_to_string(|| view! { <HelpView/> });
        for topic in TOPICS {
            assert!(html.contains(topic.title));
        }
        assert_eq!(html.matches("min read").count(), ARTICLES.len());
    }
}
