/// Share of registered accounts that are active, as a percentage rounded to
/// one decimal. Zero when there are no accounts.
pub fn retention_rate(active: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (active as f64 / total as f64 * 1000.0).round() / 10.0
}

pub fn format_retention(active: u64, total: u64) -> String {
    format!("{:.1}%", retention_rate(active, total))
}
