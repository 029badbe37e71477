use crate::{
    api::{AnalyticsPoint, DashboardPayload, Product},
    components::{
        cards::StatCard,
        charts::{AreaChart, ChartPoint},
        table::UsersTable,
    },
    utils::format::{format_count, format_currency, weekday_initial},
};
use leptos::*;

pub fn views_series(points: &[AnalyticsPoint]) -> Vec<ChartPoint> {
    points
        .iter()
        .map(|p| ChartPoint {
            label: weekday_initial(&p.date),
            value: p.views as f64,
        })
        .collect()
}

#[component]
pub fn DashboardView(data: DashboardPayload) -> impl IntoView {
    let overview = data.overview.unwrap_or_default();
    let series = views_series(&data.analytics);

    view! {
        <div class="space-y-6 md:space-y-8">
            <div>
                <h1 class="text-2xl md:text-3xl font-medium text-fg">"Dashboard"</h1>
                <p class="text-fg-muted text-xs md:text-sm">"Real-time data from the official API"</p>
            </div>

            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4 md:gap-6">
                <StatCard title="Total Users" value=format_count(overview.total_users) subtext="Increased from last month"/>
                <StatCard title="Active Users" value=format_count(overview.active_users) subtext="Increased from last month"/>
                <StatCard title="Revenue" value="10" subtext="Increased from last month"/>
                <StatCard title="Growth" value="2" subtext="On Discussion" no_arrow=true/>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <section class="lg:col-span-2 bg-surface-elevated p-4 md:p-8 rounded-[2rem] border border-border shadow-sm">
                    <h3 class="font-bold text-lg md:text-xl text-fg mb-6">"Analytics"</h3>
                    <AreaChart points=series/>
                </section>
                <ProductSales products=data.products/>
            </div>

            <section class="bg-surface-elevated p-4 md:p-8 rounded-[2rem] border border-border shadow-sm">
                <h3 class="font-bold text-lg md:text-xl text-fg mb-6">"Working on"</h3>
                <UsersTable users=data.users/>
            </section>
        </div>
    }
}

#[component]
fn ProductSales(products: Vec<Product>) -> impl IntoView {
    let rows = products
        .into_iter()
        .map(|product| {
            view! {
                <li class="flex items-center justify-between">
                    <div>
                        <p class="font-bold text-fg text-xs md:text-sm truncate">{product.name}</p>
                        <p class="text-[10px] md:text-xs text-fg-muted capitalize">{product.category}</p>
                    </div>
                    <div class="text-right">
                        <p class="font-bold text-status-success-text text-xs md:text-sm">{format_currency(product.price)}</p>
                        <p class="text-[10px] text-fg-muted">{format!("{} Sales", product.sales)}</p>
                    </div>
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="bg-surface-elevated p-6 md:p-8 rounded-[2rem] border border-border shadow-sm">
            <h3 class="font-bold text-lg md:text-xl text-fg mb-6">"Product Sales"</h3>
            <ul class="space-y-5">{rows}</ul>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::point;

    #[test]
    fn views_series_uses_weekday_initials() {
        let series = views_series(&[point("2024-01-01", 120, 4, 1), point("2024-01-02", 80, 2, 0)]);
        assert_eq!(series[0], ChartPoint { label: "M".into(), value: 120.0 });
        assert_eq!(series[1].label, "T");
    }
}
