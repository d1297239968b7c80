//! Chart Components
//!
//! Hand-rolled SVG charts: line, donut, horizontal bars, and the decorative
//! mini area. Geometry is computed by pure helpers; malformed or empty data
//! degrades to an empty rendering, never a fault.

use std::f64::consts::PI;

use leptos::*;

use crate::api::{FeatureUsage, SeriesPoint, TrafficSlice};

/// Palette shared by the donut slices and their legend
pub const DONUT_COLORS: [&str; 4] = ["#0ea5e9", "#14b8a6", "#f59e0b", "#ef4444"];

const LINE_W: f64 = 820.0;
const LINE_H: f64 = 220.0;
const LINE_PAD: f64 = 28.0;

const MINI_W: f64 = 320.0;
const MINI_H: f64 = 80.0;
const MINI_POINTS: usize = 40;

// ============ Geometry ============

/// SVG path for one series scaled into the chart viewport.
///
/// X is scaled by index, Y jointly by `max_y`; both denominators are floored
/// at 1 so empty or flat series never divide by zero.
pub fn line_path(values: &[f64], max_y: f64, w: f64, h: f64, pad: f64) -> String {
    let max_x = values.len().saturating_sub(1).max(1) as f64;
    let max_y = max_y.max(1.0);

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = pad + (i as f64 / max_x) * (w - pad * 2.0);
            let y = h - pad - (v / max_y) * (h - pad * 2.0);
            format!("{} {:.1} {:.1}", if i == 0 { "M" } else { "L" }, x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Joint Y maximum over both series, floored at 1
pub fn series_max(data: &[SeriesPoint]) -> f64 {
    data.iter()
        .map(|p| p.users.max(p.sessions))
        .fold(1.0, f64::max)
}

/// Stroke geometry for one donut slice
#[derive(Clone, Debug, PartialEq)]
pub struct DonutSegment {
    pub dasharray: String,
    pub rotation: f64,
    pub percent: u32,
}

/// Proportional arc geometry for a value list.
///
/// The total is floored at 1, so an all-zero or empty list yields
/// zero-length arcs rather than a division by zero.
pub fn donut_segments(values: &[f64], radius: f64) -> Vec<DonutSegment> {
    let circumference = 2.0 * PI * radius;
    let total = values.iter().sum::<f64>().max(1.0);

    let mut acc = 0.0;
    values
        .iter()
        .map(|v| {
            let len = (v / total) * circumference;
            let segment = DonutSegment {
                dasharray: format!("{:.2} {:.2}", len, circumference - len),
                rotation: (acc / total) * 360.0 - 90.0,
                percent: ((v / total) * 100.0).round() as u32,
            };
            acc += v;
            segment
        })
        .collect()
}

/// Bar width as a percentage of the largest count, floored at 1
pub fn bar_width_pct(count: f64, max: f64) -> f64 {
    (count / max.max(1.0)) * 100.0
}

/// Demo series for the mini area: a sine wave with injected noise.
///
/// The random source is a parameter so tests can pin it down.
pub fn mini_series(mut rng: impl FnMut() -> f64) -> Vec<f64> {
    (0..MINI_POINTS)
        .map(|i| 50.0 + (i as f64 / 3.0).sin() * 20.0 + rng() * 8.0)
        .collect()
}

/// Open polyline path for the mini area (no padding, full viewport)
pub fn mini_path(values: &[f64], w: f64, h: f64) -> String {
    let max_x = values.len().saturating_sub(1).max(1) as f64;
    let max_y = values.iter().copied().fold(1.0, f64::max);

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = (i as f64 / max_x) * w;
            let y = h - (v / max_y) * h;
            format!("{} {:.1} {:.1}", if i == 0 { "M" } else { "L" }, x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ============ Components ============

/// Users/sessions line chart with a baseline and legend
#[component]
pub fn LineChart(data: Vec<SeriesPoint>) -> impl IntoView {
    let max_y = series_max(&data);
    let users: Vec<f64> = data.iter().map(|p| p.users).collect();
    let sessions: Vec<f64> = data.iter().map(|p| p.sessions).collect();

    let users_path = line_path(&users, max_y, LINE_W, LINE_H, LINE_PAD);
    let sessions_path = line_path(&sessions, max_y, LINE_W, LINE_H, LINE_PAD);

    view! {
        <div class="chart-line">
            <svg viewBox="0 0 820 220" class="w-full">
                // baseline
                <line
                    x1=LINE_PAD
                    x2={LINE_W - LINE_PAD}
                    y1={LINE_H - LINE_PAD}
                    y2={LINE_H - LINE_PAD}
                    stroke="#e5e7eb"
                />
                <path d=users_path fill="none" stroke="#0ea5e9" stroke-width="2" />
                <path d=sessions_path fill="none" stroke="#14b8a6" stroke-width="2" />
            </svg>

            <div class="chart-legend">
                <span class="legend-item">
                    <span class="legend-swatch" style="background:#0ea5e9" />
                    "Users"
                </span>
                <span class="legend-item">
                    <span class="legend-swatch" style="background:#14b8a6" />
                    "Sessions"
                </span>
            </div>
        </div>
    }
}

/// Traffic-mix donut with a per-slice legend
#[component]
pub fn DonutChart(data: Vec<TrafficSlice>) -> impl IntoView {
    let values: Vec<f64> = data.iter().map(|s| s.value).collect();
    let segments = donut_segments(&values, 70.0);

    let slices: Vec<_> = data
        .into_iter()
        .zip(segments)
        .enumerate()
        .map(|(i, (slice, segment))| (DONUT_COLORS[i % DONUT_COLORS.len()], slice, segment))
        .collect();

    let legend = slices.clone();

    view! {
        <div class="chart-donut">
            <svg width="180" height="180" viewBox="0 0 200 200">
                <g transform="translate(100,100)">
                    {slices
                        .iter()
                        .map(|(color, _, segment)| {
                            view! {
                                <circle
                                    r="70"
                                    fill="transparent"
                                    stroke=*color
                                    stroke-width="18"
                                    stroke-dasharray=segment.dasharray.clone()
                                    transform=format!("rotate({:.2})", segment.rotation)
                                />
                            }
                        })
                        .collect_view()}
                    <circle r="52" class="donut-hole" />
                </g>
            </svg>

            <div class="chart-legend-col">
                {legend
                    .into_iter()
                    .map(|(color, slice, segment)| {
                        view! {
                            <div class="legend-item">
                                <span
                                    class="legend-swatch"
                                    style=format!("background:{}", color)
                                />
                                {slice.name}
                                <span class="legend-pct">
                                    {format!("• {}%", segment.percent)}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Horizontal feature-usage bars, capped to the first ten entries
#[component]
pub fn BarChart(data: Vec<FeatureUsage>) -> impl IntoView {
    let max = data.iter().map(|f| f.count).fold(1.0, f64::max);

    view! {
        <div class="chart-bars">
            {data
                .into_iter()
                .take(10)
                .map(|feature| {
                    let pct = bar_width_pct(feature.count, max);
                    view! {
                        <div class="bar-row">
                            <span class="bar-label">{feature.name}</span>
                            <div class="bar-track">
                                <div
                                    class="bar-fill"
                                    style=format!("width:{:.1}%", pct)
                                />
                            </div>
                            <span class="bar-count">{feature.count as i64}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Decorative metric-timeline sparkline
#[component]
pub fn MiniArea() -> impl IntoView {
    let values = mini_series(js_sys::Math::random);
    let path = mini_path(&values, MINI_W, MINI_H);
    let area = format!("{} L {} {} L 0 {} Z", path, MINI_W, MINI_H, MINI_H);

    view! {
        <svg viewBox="0 0 320 80" class="chart-mini w-full">
            <path d=area fill="#14b8a6" fill-opacity="0.15" />
            <path d=path fill="none" stroke="#14b8a6" stroke-width="2" />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_path_empty_series_is_empty() {
        assert_eq!(line_path(&[], 10.0, LINE_W, LINE_H, LINE_PAD), "");
    }

    #[test]
    fn line_path_single_point_starts_with_move() {
        let path = line_path(&[5.0], 10.0, LINE_W, LINE_H, LINE_PAD);
        assert!(path.starts_with("M "));
        assert!(!path.contains('L'));
    }

    #[test]
    fn line_path_scales_into_padded_viewport() {
        let path = line_path(&[0.0, 10.0], 10.0, 100.0, 50.0, 10.0);
        // first point at the baseline, last at the top of the padded area
        assert_eq!(path, "M 10.0 40.0 L 90.0 10.0");
    }

    #[test]
    fn series_max_floors_at_one() {
        assert_eq!(series_max(&[]), 1.0);
        let flat = vec![SeriesPoint { users: 0.0, sessions: 0.0 }];
        assert_eq!(series_max(&flat), 1.0);
    }

    #[test]
    fn donut_handles_all_zero_values() {
        let segments = donut_segments(&[0.0, 0.0, 0.0], 70.0);
        assert_eq!(segments.len(), 3);
        for segment in &segments {
            assert!(segment.dasharray.starts_with("0.00 "));
            assert_eq!(segment.percent, 0);
        }
    }

    #[test]
    fn donut_handles_empty_input() {
        assert!(donut_segments(&[], 70.0).is_empty());
    }

    #[test]
    fn donut_splits_proportionally() {
        let segments = donut_segments(&[3.0, 1.0], 70.0);
        assert_eq!(segments[0].percent, 75);
        assert_eq!(segments[1].percent, 25);
        // first slice starts at twelve o'clock, second after three quarters
        assert_eq!(segments[0].rotation, -90.0);
        assert_eq!(segments[1].rotation, 180.0);
    }

    #[test]
    fn bar_width_never_divides_by_zero() {
        assert_eq!(bar_width_pct(0.0, 0.0), 0.0);
        assert_eq!(bar_width_pct(5.0, 10.0), 50.0);
        assert_eq!(bar_width_pct(10.0, 10.0), 100.0);
    }

    #[test]
    fn mini_series_is_deterministic_for_fixed_source() {
        let a = mini_series(|| 0.5);
        let b = mini_series(|| 0.5);
        assert_eq!(a, b);
        assert_eq!(a.len(), 40);
    }

    #[test]
    fn mini_path_covers_full_width() {
        let values = mini_series(|| 0.0);
        let path = mini_path(&values, MINI_W, MINI_H);
        assert!(path.starts_with("M 0.0 "));
        assert!(path.contains("L 320.0 "));
    }
}
