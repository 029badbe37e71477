#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

#[cfg(test)]
pub mod helpers {
    use crate::{
        api::{AnalyticsPoint, OverviewStats, Product, RecordId, UserRecord},
        state::session::{provide_session, SessionContext, SessionStore},
    };

    pub fn signed_in_session() -> SessionContext {
        let store = SessionStore::in_memory();
        store.set("abc123").expect("memory store accepts writes");
        provide_session(store)
    }

    pub fn signed_out_session() -> SessionContext {
        provide_session(SessionStore::in_memory())
    }

    pub fn overview() -> OverviewStats {
        OverviewStats {
            total_users: 1200,
            active_users: 300,
            revenue: 245890.0,
            growth: 12.5,
        }
    }

    pub fn user(id: i64, name: &str, status: &str) -> UserRecord {
        UserRecord {
            id: RecordId::Number(id),
            name: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            join_date: "2024-01-05".into(),
            status: status.into(),
        }
    }

    pub fn product(id: i64, name: &str, sales: u64) -> Product {
        Product {
            id: RecordId::Number(id),
            name: name.into(),
            category: "software".into(),
            price: 49.0,
            sales,
        }
    }

    pub fn point(date: &str, views: u64, clicks: u64, conversions: u64) -> AnalyticsPoint {
        AnalyticsPoint {
            date: date.into(),
            views,
            clicks,
            conversions,
        }
    }
}
