use storewatch_ingest::RawRow;

const DASH_SENTINEL: &str = "-";

/// Cleaned per-row metrics. Every value is either a finite number or
/// explicitly absent; unparsed text never leaves this module.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CleanedMetrics {
    pub sales_2025: Option<f64>,
    pub sales_2024: Option<f64>,
    pub return_rate_2025: Option<f64>,
    pub return_rate_2024: Option<f64>,
}

impl CleanedMetrics {
    pub fn from_row(row: &RawRow) -> Self {
        Self {
            sales_2025: clean_number(row.sales_2025.as_deref()),
            sales_2024: clean_number(row.sales_2024.as_deref()),
            return_rate_2025: clean_percentage(row.return_rate_2025.as_deref()),
            return_rate_2024: clean_percentage(row.return_rate_2024.as_deref()),
        }
    }
}

/// Parse a net-sales cell. Thousands separators and embedded spaces are
/// stripped; blanks and the dash sentinel mean "no figure reported".
pub fn clean_number(raw: Option<&str>) -> Option<f64> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() || trimmed == DASH_SENTINEL {
        return None;
    }
    let stripped: String = trimmed
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    stripped
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parse a return-rate cell such as `5.2%` into a [0,1] fraction.
pub fn clean_percentage(raw: Option<&str>) -> Option<f64> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() || trimmed == DASH_SENTINEL {
        return None;
    }
    let numeric = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    let percent = numeric
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())?;
    Some(percent / 100.0)
}
