use crate::{router::AppRoute, state::session::use_session, utils::navigation};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    Render,
    RedirectToLogin,
}

/// Decides one navigation. Evaluated against the stored credential at the
/// moment of the navigation, never against a cached flag.
pub fn resolve_navigation(route: AppRoute, is_authenticated: bool) -> NavigationDecision {
    if route.is_protected() && !is_authenticated {
        NavigationDecision::RedirectToLogin
    } else {
        NavigationDecision::Render
    }
}

#[component]
pub fn RequireAuth(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let decision = create_memo(move |_| resolve_navigation(route, session.is_authenticated()));
    create_effect(move |_| {
        if decision.get() == NavigationDecision::RedirectToLogin {
            log::info!("no session token for {}; redirecting to login", route.path());
            navigation::replace_location(AppRoute::Login.path());
        }
    });
    view! {
        <Show
            when=move || decision.get() == NavigationDecision::Render
            fallback=|| ()
        >
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_routes_redirect_without_session() {
        for route in AppRoute::ALL.into_iter().filter(|r| r.is_protected()) {
            assert_eq!(
                resolve_navigation(route, false),
                NavigationDecision::RedirectToLogin,
                "{:?}",
                route
            );
            assert_eq!(resolve_navigation(route, true), NavigationDecision::Render);
        }
    }

    #[test]
    fn login_is_always_reachable() {
        assert_eq!(
            resolve_navigation(AppRoute::Login, false),
            NavigationDecision::Render
        );
        assert_eq!(
            resolve_navigation(AppRoute::Login, true),
            NavigationDecision::Render
        );
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::RequireAuth;
    use crate::router::AppRoute;
    use crate::test_support::helpers::{signed_in_session, signed_out_session};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn require_auth_renders_children_when_authenticated() {
        let html = render_to_string(move || {
            signed_in_session();
            view! {
                <RequireAuth route=AppRoute::Users>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn require_auth_hides_children_when_unauthenticated() {
        let html = render_to_string(move || {
            signed_out_session();
            view! {
                <RequireAuth route=AppRoute::Users>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_auth_hides_children_after_sign_out() {
        let html = render_to_string(move || {
            let session = signed_in_session();
            session.sign_out();
            view! {
                <RequireAuth route=AppRoute::Users>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(!html.contains("protected-content"));
    }
}
