use crate::{
    api::AnalyticsPoint,
    components::charts::BarGroup,
    utils::format::format_short_date,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricTotals {
    pub views: u64,
    pub clicks: u64,
    pub conversions: u64,
}

impl MetricTotals {
    pub fn segments(&self) -> Vec<(String, u64)> {
        vec![
            ("Views".to_string(), self.views),
            ("Clicks".to_string(), self.clicks),
            ("Conversions".to_string(), self.conversions),
        ]
    }
}

pub fn totals(points: &[AnalyticsPoint]) -> MetricTotals {
    points.iter().fold(MetricTotals::default(), |acc, p| MetricTotals {
        views: acc.views.saturating_add(p.views),
        clicks: acc.clicks.saturating_add(p.clicks),
        conversions: acc.conversions.saturating_add(p.conversions),
    })
}

pub const DAILY_SERIES: &[&str] = &["Views", "Clicks", "Conversions"];

/// Views, clicks and conversions per day, in `DAILY_SERIES` order.
pub fn daily_bars(points: &[AnalyticsPoint]) -> Vec<BarGroup> {
    points
        .iter()
        .map(|p| BarGroup {
            label: format_short_date(&p.date),
            values: vec![p.views, p.clicks, p.conversions],
        })
        .collect()
}
