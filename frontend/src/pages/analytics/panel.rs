use crate::{
    api::AnalyticsPoint,
    components::{
        cards::MiniStat,
        charts::{BarChart, DonutChart},
    },
    pages::analytics::utils::{daily_bars, totals, DAILY_SERIES},
    utils::format::format_count,
};
use leptos::*;

#[component]
pub fn AnalyticsView(points: Vec<AnalyticsPoint>) -> impl IntoView {
    let sums = totals(&points);
    let daily = daily_bars(&points);

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-medium text-fg">"Detailed Analytics"</h1>
                <p class="text-fg-muted text-sm">"Deep dive into views, engagement, and conversion metrics"</p>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <MiniStat label="Total Views" value=format_count(sums.views)/>
                <MiniStat label="Total Clicks" value=format_count(sums.clicks)/>
                <MiniStat label="Conversions" value=format_count(sums.conversions)/>
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                <section class="bg-surface-elevated p-8 rounded-[2rem] border border-border shadow-sm">
                    <h3 class="font-bold text-xl text-fg mb-6">"Daily Performance"</h3>
                    <BarChart groups=daily series=DAILY_SERIES/>
                </section>
                <section class="bg-surface-elevated p-8 rounded-[2rem] border border-border shadow-sm">
                    <h3 class="font-bold text-xl text-fg mb-6">"Metric Distribution"</h3>
                    <DonutChart segments=sums.segments()/>
                </section>
            </div>
        </div>
    }
}
