use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    api::{provide_api_client, ApiClient},
    components::guard::RequireAuth,
    pages::{
        analytics::AnalyticsPage, dashboard::DashboardPage, help::HelpPage, login::LoginPage,
        overview::OverviewPage, products::ProductsPage, settings::SettingsPage, users::UsersPage,
    },
    state::{
        session::{provide_session, SessionStore},
        theme::provide_theme,
    },
    utils::storage,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Login,
    Dashboard,
    Overview,
    Users,
    Products,
    Analytics,
    Settings,
    Help,
}

impl AppRoute {
    pub const ALL: [AppRoute; 8] = [
        AppRoute::Login,
        AppRoute::Dashboard,
        AppRoute::Overview,
        AppRoute::Users,
        AppRoute::Products,
        AppRoute::Analytics,
        AppRoute::Settings,
        AppRoute::Help,
    ];

    /// Where a fresh login lands.
    pub const DEFAULT_PROTECTED: AppRoute = AppRoute::Dashboard;

    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Login => "/login",
            AppRoute::Dashboard => "/dashboard",
            AppRoute::Overview => "/overview",
            AppRoute::Users => "/users",
            AppRoute::Products => "/products",
            AppRoute::Analytics => "/analytics",
            AppRoute::Settings => "/settings",
            AppRoute::Help => "/help",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AppRoute::Login => "Sign in",
            AppRoute::Dashboard => "Dashboard",
            AppRoute::Overview => "Overview",
            AppRoute::Users => "Users",
            AppRoute::Products => "Products",
            AppRoute::Analytics => "Analytics",
            AppRoute::Settings => "Settings",
            AppRoute::Help => "Help",
        }
    }

    pub fn is_protected(self) -> bool {
        !matches!(self, AppRoute::Login)
    }

    pub fn from_path(path: &str) -> Option<AppRoute> {
        let trimmed = path.trim_end_matches('/');
        Self::ALL.into_iter().find(|route| route.path() == trimmed)
    }
}

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/dashboard",
    "/overview",
    "/users",
    "/products",
    "/analytics",
    "/settings",
    "/help",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/dashboard",
    "/overview",
    "/users",
    "/products",
    "/analytics",
    "/settings",
    "/help",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login"];

pub fn mount_app() {
    mount_to_body(app_root);
}

/// Builds the session, API client and theme once, then hands them down by context.
pub fn app_root() -> impl IntoView {
    provide_meta_context();
    let store = storage::default_store();
    let session = provide_session(SessionStore::new(store.clone()));
    provide_api_client(ApiClient::new(session.store.clone()));
    provide_theme(store);
    view! {
        <Router>
            <Routes>
                <Route path="/" view=RedirectToLogin/>
                <Route path="/login" view=LoginPage/>
                <Route path="/dashboard" view=ProtectedDashboard/>
                <Route path="/overview" view=ProtectedOverview/>
                <Route path="/users" view=ProtectedUsers/>
                <Route path="/products" view=ProtectedProducts/>
                <Route path="/analytics" view=ProtectedAnalytics/>
                <Route path="/settings" view=ProtectedSettings/>
                <Route path="/help" view=ProtectedHelp/>
                <Route path="/*any" view=RedirectToLogin/>
            </Routes>
        </Router>
    }
}

#[component]
fn RedirectToLogin() -> impl IntoView {
    view! {
        <Redirect
            path=AppRoute::Login.path()
            options=NavigateOptions {
                replace: true,
                ..Default::default()
            }
        />
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth route=AppRoute::Dashboard><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedOverview() -> impl IntoView {
    view! { <RequireAuth route=AppRoute::Overview><OverviewPage/></RequireAuth> }
}

#[component]
fn ProtectedUsers() -> impl IntoView {
    view! { <RequireAuth route=AppRoute::Users><UsersPage/></RequireAuth> }
}

#[component]
fn ProtectedProducts() -> impl IntoView {
    view! { <RequireAuth route=AppRoute::Products><ProductsPage/></RequireAuth> }
}

#[component]
fn ProtectedAnalytics() -> impl IntoView {
    view! { <RequireAuth route=AppRoute::Analytics><AnalyticsPage/></RequireAuth> }
}

#[component]
fn ProtectedSettings() -> impl IntoView {
    view! { <RequireAuth route=AppRoute::Settings><SettingsPage/></RequireAuth> }
}

#[component]
fn ProtectedHelp() -> impl IntoView {
    view! { <RequireAuth route=AppRoute::Help><HelpPage/></RequireAuth> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn protected_routes_are_subset_of_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for path in PROTECTED_ROUTE_PATHS {
            assert!(
                all.contains(path),
                "protected path missing from ROUTE_PATHS: {}",
                path
            );
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn route_enum_agrees_with_path_tables() {
        for route in AppRoute::ALL {
            assert!(ROUTE_PATHS.contains(&route.path()));
            assert_eq!(
                PROTECTED_ROUTE_PATHS.contains(&route.path()),
                route.is_protected(),
                "{:?}",
                route
            );
            assert_eq!(AppRoute::from_path(route.path()), Some(route));
        }
        for path in PUBLIC_ROUTE_PATHS {
            assert!(!PROTECTED_ROUTE_PATHS.contains(path));
        }
    }

    #[test]
    fn from_path_ignores_trailing_slash_and_unknowns() {
        assert_eq!(AppRoute::from_path("/users/"), Some(AppRoute::Users));
        assert_eq!(AppRoute::from_path("/logout"), None);
        assert_eq!(AppRoute::from_path("/"), None);
    }

    #[test]
    fn default_protected_route_is_dashboard() {
        assert_eq!(AppRoute::DEFAULT_PROTECTED.path(), "/dashboard");
        assert!(AppRoute::DEFAULT_PROTECTED.is_protected());
    }
}
