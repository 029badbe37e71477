use crate::{
    api::OverviewStats,
    pages::overview::utils::format_retention,
    utils::format::{format_count, format_currency, format_percent},
};
use leptos::*;

const REVENUE_TARGET: f64 = 500_000.0;

#[component]
fn OverviewTile(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(optional)] trend: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated p-6 md:p-8 rounded-[2rem] border border-border shadow-sm">
            <p class="text-fg-muted text-[10px] md:text-xs font-bold uppercase tracking-widest">{label}</p>
            <h2 class="text-3xl md:text-4xl font-bold text-fg mt-2">{value}</h2>
            {trend.map(|t| view! { <p class="mt-3 text-status-success-text font-bold text-xs">{t}</p> })}
        </div>
    }
}

#[component]
pub fn OverviewView(stats: OverviewStats) -> impl IntoView {
    let progress = if REVENUE_TARGET > 0.0 {
        (stats.revenue / REVENUE_TARGET * 100.0).clamp(0.0, 100.0).round()
    } else {
        0.0
    };
    let gap = stats.revenue - REVENUE_TARGET;

    view! {
        <div class="space-y-6 md:space-y-8">
            <div class="flex flex-col sm:flex-row justify-between items-start gap-4">
                <div>
                    <h1 class="text-2xl md:text-3xl font-medium text-fg">"System Overview"</h1>
                    <p class="text-fg-muted text-xs md:text-sm mt-1">"Global performance and user acquisition metrics"</p>
                </div>
                <span class="bg-action-primary-bg text-action-primary-text px-4 py-2 rounded-2xl text-xs font-bold">"LIVE UPDATES"</span>
            </div>

            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4 md:gap-6">
                <OverviewTile label="Total Users" value=format_count(stats.total_users)/>
                <OverviewTile label="Active Now" value=format_count(stats.active_users)/>
                <OverviewTile label="Total Revenue" value=format_currency(stats.revenue)/>
                <OverviewTile label="Growth Rate" value=format_percent(stats.growth) trend="+2.4% vs last week"/>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6 md:gap-8">
                <section class="lg:col-span-2 bg-surface-elevated p-6 md:p-10 rounded-[2rem] border border-border shadow-sm space-y-6">
                    <h3 class="font-bold text-lg md:text-xl text-fg">"Revenue Milestone"</h3>
                    <div>
                        <div class="flex justify-between text-xs md:text-sm font-bold mb-3">
                            <span class="text-fg-muted">"Current Progress"</span>
                            <span class="text-fg">{format!("{}%", progress)}</span>
                        </div>
                        <div class="w-full h-3 bg-surface-muted rounded-full overflow-hidden">
                            <div class="h-full bg-action-primary-bg rounded-full" style=format!("width: {}%", progress)></div>
                        </div>
                    </div>
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <div class="p-4 md:p-6 bg-surface-muted rounded-[1.5rem]">
                            <p class="text-[10px] font-bold text-fg-muted uppercase">"Target Revenue"</p>
                            <p class="text-lg md:text-xl font-bold text-fg">{format_currency(REVENUE_TARGET)}</p>
                        </div>
                        <div class="p-4 md:p-6 bg-surface-muted rounded-[1.5rem]">
                            <p class="text-[10px] font-bold text-fg-muted uppercase">"Gap to Goal"</p>
                            <p class="text-lg md:text-xl font-bold text-status-warning-text">{format_currency(gap)}</p>
                        </div>
                    </div>
                </section>

                <section class="bg-action-primary-bg text-action-primary-text p-8 md:p-10 rounded-[2rem] flex flex-col justify-between min-h-[320px] lg:min-h-0">
                    <div>
                        <h3 class="font-bold text-lg md:text-xl mb-2">"User Retention"</h3>
                        <p class="text-xs md:text-sm opacity-80">"Active users vs Total registered accounts"</p>
                    </div>
                    <h2 class="text-5xl md:text-6xl font-bold py-6" data-testid="retention">
                        {format_retention(stats.active_users, stats.total_users)}
                    </h2>
                    <p class="font-medium italic text-xs md:text-sm">"Retention Score"</p>
                </section>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::overview, ssr::render_to_string};

    #[test]
    fn renders_tiles_and_retention() {
        let html = render_to_string(|| view! { <OverviewView stats=overview()/> });
        assert!(html.contains("1,200"));
        assert!(html.contains("$245,890"));
        assert!(html.contains("12.5%"));
        assert!(html.contains("25.0%"));
        assert!(html.contains("$500,000"));
        assert!(html.contains("-$254,110"));
    }

    #[test]
    fn empty_account_base_shows_zero_retention() {
        let html = render_to_string(|| view! { <OverviewView stats=OverviewStats::default()/> });
        assert!(html.contains("0.0%"));
    }
}
