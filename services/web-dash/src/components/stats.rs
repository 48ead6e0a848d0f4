// services/web-dash/src/components/stats.rs
//
// Stat cards and number formatting
//

use leptos::*;

#[component]
pub fn StatCard(
    label: &'static str,
    value: impl Fn() -> String + 'static,
    icon: &'static str,
    class_name: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card {}", class_name)>
            <div class="stat-icon">{icon}</div>
            <div class="stat-content">
                <span class="stat-value">{value}</span>
                <span class="stat-label">{label}</span>
            </div>
        </div>
    }
}

/// Format large numbers with commas
pub fn format_number(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    if n < 0 {
        result.insert(0, '-');
    }
    result
}

/// Rupee display, two decimals, comma-grouped
pub fn format_currency(amount: f64) -> String {
    format!("₹{}.{:02}", format_number(amount.trunc() as i64), (amount.fract().abs() * 100.0).round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_comma_grouped() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(950), "950");
        assert_eq!(format_number(45_210), "45,210");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }

    #[test]
    fn currency_keeps_two_decimals() {
        assert_eq!(format_currency(45_210.5), "₹45,210.50");
        assert_eq!(format_currency(890.0), "₹890.00");
    }
}
