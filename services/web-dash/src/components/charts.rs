// services/web-dash/src/components/charts.rs
//
// Hand-built SVG charts (line for trends, bars for buckets)
//

use leptos::*;

const WIDTH: f64 = 400.0;
const HEIGHT: f64 = 150.0;
const PADDING: f64 = 5.0;

/// Line chart over a series of y-values; x is the sample index.
#[component]
pub fn LineChart(
    points: Signal<Vec<f64>>,
    #[prop(default = "#0ea5e9")] stroke: &'static str,
) -> impl IntoView {
    let max_value = move || {
        points
            .get()
            .iter()
            .fold(0.0_f64, |a, b| a.max(*b))
            .max(1.0)
    };

    view! {
        <svg class="chart-svg" viewBox="0 0 400 150" preserveAspectRatio="none">
            <line x1="0" y1="37" x2="400" y2="37" class="grid-line" />
            <line x1="0" y1="75" x2="400" y2="75" class="grid-line" />
            <line x1="0" y1="112" x2="400" y2="112" class="grid-line" />

            <path
                class="chart-line"
                d=move || generate_path(&points.get(), max_value())
                fill="none"
                stroke=stroke
                stroke-width="2"
            />
        </svg>
    }
}

/// Vertical bars over (label, value) pairs.
#[component]
pub fn BarChart(
    bars: Signal<Vec<(String, f64)>>,
    #[prop(default = "#0ea5e9")] fill: &'static str,
) -> impl IntoView {
    let max_value = move || {
        bars.get()
            .iter()
            .fold(0.0_f64, |a, (_, v)| a.max(*v))
            .max(1.0)
    };

    view! {
        <div class="bar-chart">
            <svg class="chart-svg" viewBox="0 0 400 150" preserveAspectRatio="none">
                {move || {
                    let bars = bars.get();
                    let max = max_value();
                    let slot = WIDTH / bars.len().max(1) as f64;
                    bars.iter()
                        .enumerate()
                        .map(|(i, (_, value))| {
                            let height = (value / max) * (HEIGHT - PADDING * 2.0);
                            let x = i as f64 * slot + slot * 0.15;
                            let y = HEIGHT - PADDING - height;
                            view! {
                                <rect
                                    x=format!("{:.1}", x)
                                    y=format!("{:.1}", y)
                                    width=format!("{:.1}", slot * 0.7)
                                    height=format!("{:.1}", height)
                                    fill=fill
                                />
                            }
                        })
                        .collect_view()
                }}
            </svg>
            <div class="chart-labels">
                {move || {
                    bars.get()
                        .iter()
                        .map(|(label, _)| view! { <span>{label.clone()}</span> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

/// Generate SVG path for line chart
fn generate_path(values: &[f64], max_val: f64) -> String {
    if values.is_empty() {
        return String::new();
    }

    let points: Vec<String> = values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = (i as f64 / values.len().max(1) as f64) * WIDTH;
            let y = HEIGHT - PADDING - ((value / max_val) * (HEIGHT - PADDING * 2.0));
            format!("{:.1},{:.1}", x, y)
        })
        .collect();

    format!("M {} L {}", points[0], points.join(" L "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_empty_without_data() {
        assert_eq!(generate_path(&[], 100.0), "");
    }

    #[test]
    fn path_starts_with_move_to() {
        let path = generate_path(&[10.0, 50.0, 100.0], 100.0);
        assert!(path.starts_with("M "));
        assert_eq!(path.matches("L ").count(), 3);
    }
}
