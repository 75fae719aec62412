// crates/storewatch-cli/src/format.rs

/// Format net sales in thousands, e.g. `¥1250.4K`.
pub fn format_currency(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("¥{:.1}K", value / 1000.0),
        None => "-".to_string(),
    }
}

/// Format an already-scaled percentage, with an explicit plus sign for
/// non-negative values when requested.
pub fn format_percentage(value: Option<f64>, show_sign: bool) -> String {
    match value {
        Some(value) => {
            let sign = if show_sign && value >= 0.0 { "+" } else { "" };
            format!("{sign}{value:.2}%")
        }
        None => "-".to_string(),
    }
}

/// Format a [0,1] return-rate fraction as a percentage.
pub fn format_return_rate(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{:.2}%", value * 100.0),
        None => "-".to_string(),
    }
}
