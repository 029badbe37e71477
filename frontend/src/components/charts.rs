//! Dependency-free SVG charts: an area chart for time series, grouped bars for
//! several metrics per day and a donut for share-of-total breakdowns.

use leptos::*;

const VIEW_WIDTH: f64 = 600.0;
const VIEW_HEIGHT: f64 = 200.0;
const DONUT_RADIUS: f64 = 60.0;
const DONUT_COLORS: &[&str] = &["#14532d", "#16a34a", "#f97316", "#64748b"];
const BAR_FILL: f64 = 0.8;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// One x-axis slot of a grouped bar chart, one value per series.
#[derive(Debug, Clone, PartialEq)]
pub struct BarGroup {
    pub label: String,
    pub values: Vec<u64>,
}

/// Polyline coordinates scaled into a `width` x `height` box, max value at the top.
pub fn scale_points(values: &[f64], width: f64, height: f64) -> Vec<(f64, f64)> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = values.iter().cloned().fold(0.0_f64, f64::max);
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let y = if max > 0.0 {
                height - (v.max(0.0) / max) * height
            } else {
                height
            };
            (i as f64 * step, y)
        })
        .collect()
}

pub fn line_path(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, (x, y))| format!("{}{:.1},{:.1}", if i == 0 { "M" } else { "L" }, x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn area_path(points: &[(f64, f64)], height: f64) -> String {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) => format!(
            "{} L{:.1},{:.1} L{:.1},{:.1} Z",
            line_path(points),
            last.0,
            height,
            first.0,
            height
        ),
        _ => String::new(),
    }
}

/// `(dash length, dash offset)` per segment for a stroke-dasharray donut.
pub fn donut_arcs(values: &[u64], circumference: f64) -> Vec<(f64, f64)> {
    let total = values.iter().copied().fold(0u64, u64::saturating_add);
    if total == 0 {
        return values.iter().map(|_| (0.0, 0.0)).collect();
    }
    let mut consumed = 0.0;
    values
        .iter()
        .map(|v| {
            let length = *v as f64 / total as f64 * circumference;
            let arc = (length, -consumed);
            consumed += length;
            arc
        })
        .collect()
}

/// Bar heights scaled against the tallest value across every group.
pub fn bar_heights(groups: &[BarGroup], height: f64) -> Vec<Vec<f64>> {
    let max = groups
        .iter()
        .flat_map(|g| g.values.iter().copied())
        .max()
        .unwrap_or(0);
    groups
        .iter()
        .map(|g| {
            g.values
                .iter()
                .map(|v| {
                    if max == 0 {
                        0.0
                    } else {
                        *v as f64 / max as f64 * height
                    }
                })
                .collect()
        })
        .collect()
}

#[component]
pub fn AreaChart(points: Vec<ChartPoint>) -> impl IntoView {
    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    let scaled = scale_points(&values, VIEW_WIDTH, VIEW_HEIGHT);
    let line = line_path(&scaled);
    let area = area_path(&scaled, VIEW_HEIGHT);
    let ticks = points
        .iter()
        .zip(scaled.iter())
        .map(|(p, (x, _))| {
            view! {
                <text x=format!("{:.1}", x) y=format!("{:.1}", VIEW_HEIGHT + 16.0) text-anchor="middle" class="fill-fg-muted text-[10px]">
                    {p.label.clone()}
                </text>
            }
        })
        .collect_view();

    view! {
        <svg viewBox=format!("0 -10 {} {}", VIEW_WIDTH, VIEW_HEIGHT + 30.0) class="w-full h-48 md:h-64" preserveAspectRatio="none" role="img">
            <path d=area fill="#14532d" fill-opacity="0.15"></path>
            <path d=line fill="none" stroke="#14532d" stroke-width="4"></path>
            {ticks}
        </svg>
    }
}

#[component]
pub fn BarChart(groups: Vec<BarGroup>, series: &'static [&'static str]) -> impl IntoView {
    let heights = bar_heights(&groups, VIEW_HEIGHT);
    let slot = if groups.is_empty() {
        0.0
    } else {
        VIEW_WIDTH / groups.len() as f64
    };
    let bar_width = slot * BAR_FILL / series.len().max(1) as f64;
    let inset = slot * (1.0 - BAR_FILL) / 2.0;

    let bars = heights
        .iter()
        .enumerate()
        .flat_map(|(g, column)| {
            column.iter().enumerate().map(move |(s, h)| {
                let x = g as f64 * slot + inset + s as f64 * bar_width;
                view! {
                    <rect
                        x=format!("{:.1}", x)
                        y=format!("{:.1}", VIEW_HEIGHT - h)
                        width=format!("{:.1}", bar_width)
                        height=format!("{:.1}", h)
                        rx="3"
                        fill={DONUT_COLORS[s % DONUT_COLORS.len()]}
                    ></rect>
                }
            })
        })
        .collect_view();
    let ticks = groups
        .iter()
        .enumerate()
        .map(|(g, group)| {
            view! {
                <text x=format!("{:.1}", g as f64 * slot + slot / 2.0) y=format!("{:.1}", VIEW_HEIGHT + 16.0) text-anchor="middle" class="fill-fg-muted text-[10px]">
                    {group.label.clone()}
                </text>
            }
        })
        .collect_view();
    let legend = series
        .iter()
        .enumerate()
        .map(|(s, name)| {
            view! {
                <li class="flex items-center gap-2 text-xs text-fg-muted">
                    <span class="w-3 h-3 rounded-sm inline-block" style=format!("background:{}", DONUT_COLORS[s % DONUT_COLORS.len()])></span>
                    {*name}
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="flex flex-col gap-4">
            <svg viewBox=format!("0 -10 {} {}", VIEW_WIDTH, VIEW_HEIGHT + 30.0) class="w-full h-48 md:h-64" preserveAspectRatio="none" role="img">
                {bars}
                {ticks}
            </svg>
            <ul class="flex gap-4 justify-center">{legend}</ul>
        </div>
    }
}

#[component]
pub fn DonutChart(segments: Vec<(String, u64)>) -> impl IntoView {
    let circumference = 2.0 * std::f64::consts::PI * DONUT_RADIUS;
    let values: Vec<u64> = segments.iter().map(|(_, v)| *v).collect();
    let arcs = donut_arcs(&values, circumference);
    let rings = arcs
        .iter()
        .enumerate()
        .map(|(i, (length, offset))| {
            view! {
                <circle
                    cx="80" cy="80" r=format!("{}", DONUT_RADIUS)
                    fill="none"
                    stroke={DONUT_COLORS[i % DONUT_COLORS.len()]}
                    stroke-width="24"
                    stroke-dasharray=format!("{:.2} {:.2}", length, circumference)
                    stroke-dashoffset=format!("{:.2}", offset)
                    transform="rotate(-90 80 80)"
                ></circle>
            }
        })
        .collect_view();
    let legend = segments
        .into_iter()
        .enumerate()
        .map(|(i, (label, _))| {
            view! {
                <li class="flex items-center gap-2 text-xs text-fg-muted">
                    <span class="w-3 h-3 rounded-full inline-block" style=format!("background:{}", DONUT_COLORS[i % DONUT_COLORS.len()])></span>
                    {label}
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="flex flex-col items-center gap-4">
            <svg viewBox="0 0 160 160" class="w-56 h-56" role="img">{rings}</svg>
            <ul class="flex gap-4">{legend}</ul>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn bar_chart_draws_one_rect_per_value() {
        let html = render_to_string(|| {
            let groups = vec![
                BarGroup { label: "Jan 1".into(), values: vec![3, 2, 1] },
                BarGroup { label: "Jan 2".into(), values: vec![6, 4, 2] },
            ];
            view! { <BarChart groups=groups series=&["Views", "Clicks", "Conversions"]/> }
        });
        assert_eq!(html.matches("<rect").count(), 6);
        assert!(html.contains("Jan 2"));
        assert!(html.contains("Clicks"));
    }
}
