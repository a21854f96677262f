//! Small inline-SVG chart components for the dashboard pages.
//!
//! Purely presentational: the only logic is scaling values into pixel
//! coordinates. Series data arrives ready-made from the fixtures.

use leptos::prelude::*;

/// Scale `values` into `(x, y)` pixel pairs for a polyline, y inverted
/// so larger values sit higher. Returns an empty string for fewer than
/// two points.
fn polyline_points(values: &[f64], width: f64, height: f64, pad: f64) -> String {
    if values.len() < 2 {
        return String::new();
    }
    let max = values.iter().cloned().fold(f64::MIN, f64::max);
    let min = values.iter().cloned().fold(f64::MAX, f64::min);
    let span = if (max - min).abs() < f64::EPSILON {
        1.0
    } else {
        max - min
    };
    let step = (width - 2.0 * pad) / (values.len() as f64 - 1.0);
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = pad + step * i as f64;
            let y = height - pad - (v - min) / span * (height - 2.0 * pad);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Tiny trend line for stat cards.
#[component]
pub fn Sparkline(
    values: Vec<f64>,
    #[prop(default = "var(--chart-line, #3B82F6)")] color: &'static str,
) -> impl IntoView {
    let points = polyline_points(&values, 120.0, 36.0, 2.0);
    view! {
        <svg class="sparkline" width="120" height="36" viewBox="0 0 120 36" aria-hidden="true">
            <polyline
                points=points
                fill="none"
                stroke=color
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
        </svg>
    }
}

/// Filled trend chart with x-axis labels (sales trend).
#[component]
pub fn AreaChart(
    /// `(label, value)` per point, in x order.
    points: Vec<(String, f64)>,
    #[prop(default = "#3B82F6")] color: &'static str,
) -> impl IntoView {
    const W: f64 = 640.0;
    const H: f64 = 220.0;
    const PAD: f64 = 16.0;

    let values: Vec<f64> = points.iter().map(|(_, v)| *v).collect();
    let line = polyline_points(&values, W, H, PAD);
    // Close the polygon along the bottom edge for the fill.
    let area = if line.is_empty() {
        String::new()
    } else {
        format!(
            "{} {:.1},{:.1} {:.1},{:.1}",
            line,
            W - PAD,
            H - PAD,
            PAD,
            H - PAD
        )
    };
    let labels: Vec<String> = points.iter().map(|(label, _)| label.clone()).collect();

    view! {
        <div class="chart chart--area">
            <svg
                width="100%"
                height="220"
                viewBox=format!("0 0 {W} {H}")
                aria-hidden="true"
            >
                <polygon points=area fill=color fill-opacity="0.15"/>
                <polyline
                    points=line
                    fill="none"
                    stroke=color
                    stroke-width="2.5"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                />
            </svg>
            <div class="chart__x-labels">
                {labels
                    .into_iter()
                    .map(|label| view! { <span class="chart__x-label">{label}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// One named series for [`BarChart`].
#[derive(Clone, Debug)]
pub struct BarSeries {
    pub name: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
}

/// Vertical grouped bars (user growth). All series must be as long as
/// `labels`; extra values are ignored.
#[component]
pub fn BarChart(labels: Vec<String>, series: Vec<BarSeries>) -> impl IntoView {
    const H: f64 = 180.0;

    let max = series
        .iter()
        .flat_map(|s| s.values.iter().cloned())
        .fold(0.0_f64, f64::max)
        .max(1.0);

    let legend = series
        .iter()
        .map(|s| {
            view! {
                <span class="chart-legend__item">
                    <span class="chart-legend__swatch" style=format!("background:{}", s.color)></span>
                    {s.name}
                </span>
            }
        })
        .collect_view();

    view! {
        <div class="chart chart--bars">
            <div class="chart-legend">{legend}</div>
            <div class="bar-chart" style=format!("height:{H}px")>
                {labels
                    .into_iter()
                    .enumerate()
                    .map(|(i, label)| {
                        let bars = series
                            .iter()
                            .filter_map(|s| {
                                s.values.get(i).map(|v| {
                                    let h = (v / max * (H - 24.0)).max(2.0);
                                    view! {
                                        <div
                                            class="bar-chart__bar"
                                            style=format!("height:{h:.0}px;background:{}", s.color)
                                            title=format!("{}: {}", s.name, v)
                                        ></div>
                                    }
                                })
                            })
                            .collect_view();
                        view! {
                            <div class="bar-chart__group">
                                <div class="bar-chart__bars">{bars}</div>
                                <span class="bar-chart__label">{label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Donut chart built from stroked circles; `slices` are
/// `(label, value, color)` and shares are computed from the value sum.
#[component]
pub fn DonutChart(slices: Vec<(String, f64, String)>) -> impl IntoView {
    const R: f64 = 54.0;
    const C: f64 = 2.0 * std::f64::consts::PI * R;

    let total: f64 = slices.iter().map(|(_, v, _)| v).sum();
    let total = if total <= 0.0 { 1.0 } else { total };

    let mut offset = 0.0;
    let rings = slices
        .iter()
        .map(|(label, value, color)| {
            let len = value / total * C;
            let dasharray = format!("{len:.2} {:.2}", C - len);
            let dashoffset = format!("{:.2}", -offset);
            offset += len;
            view! {
                <circle
                    cx="70"
                    cy="70"
                    r="54"
                    fill="none"
                    stroke=color.clone()
                    stroke-width="22"
                    stroke-dasharray=dasharray
                    stroke-dashoffset=dashoffset
                    transform="rotate(-90 70 70)"
                >
                    <title>{format!("{label}: {value}")}</title>
                </circle>
            }
        })
        .collect_view();

    view! {
        <svg class="donut-chart" width="140" height="140" viewBox="0 0 140 140">
            {rings}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyline_scales_endpoints_into_padding() {
        let points = polyline_points(&[0.0, 10.0], 100.0, 50.0, 5.0);
        // First point bottom-left, last point top-right.
        assert_eq!(points, "5.0,45.0 95.0,5.0");
    }

    #[test]
    fn polyline_handles_flat_and_short_series() {
        assert_eq!(polyline_points(&[3.0], 100.0, 50.0, 5.0), "");
        // A flat series stays inside the viewbox instead of dividing by zero.
        let flat = polyline_points(&[2.0, 2.0, 2.0], 100.0, 50.0, 5.0);
        assert!(flat.split(' ').count() == 3);
        assert!(!flat.contains("NaN"));
    }
}
