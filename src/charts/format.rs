//! Number formatting shared by every chart.

/// Whole-unit currency with thousands separators, e.g. `$1,234,567`.
pub fn currency(value: f64, prefix: &str) -> String {
    let rounded = value.abs().round();
    let digits = format!("{:.0}", rounded);

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && rounded > 0.0 { "-" } else { "" };
    format!("{sign}{prefix}{grouped}")
}

/// Bar annotations, one currency string per total in view order.
pub fn currency_labels(totals: impl IntoIterator<Item = f64>, prefix: &str) -> Vec<String> {
    totals.into_iter().map(|v| currency(v, prefix)).collect()
}

/// Share of `part` in `whole` with one decimal, e.g. `33.3%`.
pub fn percentage(part: f64, whole: f64) -> String {
    let pct = if whole == 0.0 { 0.0 } else { part / whole * 100.0 };
    format!("{:.1}%", pct)
}

/// Pie wedge label: `North (45.2%)`.
pub fn share_label(name: &str, part: f64, whole: f64) -> String {
    format!("{} ({})", name, percentage(part, whole))
}
