use crate::{
    api::UserRecord,
    components::cards::StatusPill,
    utils::format::{format_long_date, initial},
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinDateStyle {
    /// Value exactly as the API sent it.
    #[default]
    Raw,
    /// `Jan 5, 2024`
    Long,
}

impl JoinDateStyle {
    pub fn render(self, raw: &str) -> String {
        match self {
            JoinDateStyle::Raw => raw.to_string(),
            JoinDateStyle::Long => format_long_date(raw),
        }
    }
}

#[component]
pub fn UsersTable(
    users: Vec<UserRecord>,
    #[prop(optional)] date_style: JoinDateStyle,
) -> impl IntoView {
    if users.is_empty() {
        return view! { <p class="py-8 text-center text-sm text-fg-muted">"No users found"</p> }
            .into_view();
    }

    let rows = users
        .into_iter()
        .map(|user| {
            let joined = date_style.render(&user.join_date);
            view! {
                <tr class="hover:bg-surface-muted transition-colors" data-user-id=user.id.to_string()>
                    <td class="py-4 px-4">
                        <div class="flex items-center gap-3">
                            <div class="w-8 h-8 rounded-full bg-action-primary-bg text-action-primary-text flex items-center justify-center font-bold text-xs shrink-0">
                                {initial(&user.name)}
                            </div>
                            <span class="font-bold text-fg text-sm whitespace-nowrap">{user.name.clone()}</span>
                        </div>
                    </td>
                    <td class="py-4 px-4 text-sm text-fg-muted whitespace-nowrap">{user.email.clone()}</td>
                    <td class="py-4 px-4 text-sm text-fg-muted whitespace-nowrap">{joined}</td>
                    <td class="py-4 px-4 text-center"><StatusPill status=user.status.clone()/></td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="overflow-x-auto">
            <table class="w-full text-left border-collapse min-w-[600px]">
                <thead>
                    <tr class="text-fg-muted text-xs uppercase tracking-wider border-b border-border">
                        <th class="pb-4 font-medium px-4">"Name"</th>
                        <th class="pb-4 font-medium px-4">"Email"</th>
                        <th class="pb-4 font-medium px-4">"Join Date"</th>
                        <th class="pb-4 font-medium px-4 text-center">"Status"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">{rows}</tbody>
            </table>
        </div>
    }
    .into_view()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::user, ssr::render_to_string};

    #[test]
    fn renders_one_row_per_user_with_avatar_initial() {
        let html = render_to_string(|| {
            view! { <UsersTable users=vec![user(1, "alice", "active"), user(2, "Bob", "inactive")]/> }
        });
        assert_eq!(html.matches("data-user-id=").count(), 2);
        assert!(html.contains("alice"));
        assert!(html.contains("bob@example.com"));
        assert!(html.contains("2024-01-05"));
    }

    #[test]
    fn long_dates_are_formatted() {
        let html = render_to_string(|| {
            view! { <UsersTable users=vec![user(1, "Alice", "active")] date_style=JoinDateStyle::Long/> }
        });
        assert!(html.contains("Jan 5, 2024"));
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let html = render_to_string(|| view! { <UsersTable users=Vec::new()/> });
        assert!(html.contains("No users found"));
        assert!(!html.contains("<table"));
    }
}
