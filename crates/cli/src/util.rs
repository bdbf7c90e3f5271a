// Path: crates/cli/src/util.rs

/// Renders seconds as `1d 02h 03m`; `never` for infinity, `-` for NaN.
pub fn format_duration(seconds: f64) -> String {
    if seconds.is_nan() {
        return "-".to_string();
    }
    if seconds.is_infinite() {
        return if seconds > 0.0 { "never" } else { "-" }.to_string();
    }
    let sign = if seconds < 0.0 { "-" } else { "" };
    let total = seconds.abs().round() as u64;
    let (days, rem) = (total / 86_400, total % 86_400);
    let (hours, rem) = (rem / 3_600, rem % 3_600);
    let minutes = rem / 60;
    if days > 0 {
        format!("{}{}d {:02}h {:02}m", sign, days, hours, minutes)
    } else {
        format!("{}{}h {:02}m", sign, hours, minutes)
    }
}

/// Renders large amounts with a magnitude suffix (`1.50T`).
pub fn format_amount(amount: f64) -> String {
    const UNITS: [(f64, &str); 5] = [(1e18, "Q"), (1e15, "q"), (1e12, "T"), (1e9, "B"), (1e6, "M")];
    UNITS
        .iter()
        .find(|(scale, _)| amount.abs() >= *scale)
        .map(|(scale, unit)| format!("{:.2}{}", amount / scale, unit))
        .unwrap_or_else(|| format!("{:.0}", amount))
}
