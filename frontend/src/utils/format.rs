use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `1234567` -> `1,234,567`
pub fn format_count(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Thousands separators with at most two decimals, trailing zeros dropped.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "-".into();
    }
    let rendered = format!("{:.2}", value.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((&rendered, ""));
    let frac_part = frac_part.trim_end_matches('0');
    let sign = if value < 0.0 && rendered != "0.00" { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{}{}", sign, group_digits(int_part))
    } else {
        format!("{}{}.{}", sign, group_digits(int_part), frac_part)
    }
}

/// `-254110.0` -> `-$254,110`
pub fn format_currency(value: f64) -> String {
    let amount = format_amount(value);
    match amount.strip_prefix('-') {
        Some(abs) => format!("-${}", abs),
        None => format!("${}", amount),
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", format_amount(value))
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

/// `2024-01-05` -> `Jan 5, 2024`; unparsable input is shown as-is.
pub fn format_long_date(raw: &str) -> String {
    parse_date(raw)
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// `2024-01-05` -> `Jan 5`
pub fn format_short_date(raw: &str) -> String {
    parse_date(raw)
        .map(|d| d.format("%b %-d").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// First letter of the English weekday, used for compact chart ticks.
pub fn weekday_initial(raw: &str) -> String {
    parse_date(raw)
        .map(|d| d.weekday().to_string().chars().take(1).collect())
        .unwrap_or_default()
}

/// Avatar letter for a display name.
pub fn initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".into())
}
