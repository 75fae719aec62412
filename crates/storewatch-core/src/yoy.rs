use crate::clean::CleanedMetrics;

/// Year-over-year comparison for one store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YoyOutcome {
    pub is_new_store: bool,
    pub sales_amount: Option<f64>,
    pub sales_pct: Option<f64>,
    pub return_rate: Option<f64>,
}

impl YoyOutcome {
    fn new_store() -> Self {
        Self {
            is_new_store: true,
            sales_amount: None,
            sales_pct: None,
            return_rate: None,
        }
    }
}

/// Derive new-store status and the three YOY deltas from cleaned metrics.
///
/// A store without a prior-year baseline (missing or zero 2024 sales) has no
/// meaningful comparison: every delta stays absent even when 2025 figures
/// are present.
pub fn compute_yoy(metrics: &CleanedMetrics) -> YoyOutcome {
    let is_new_store = metrics.sales_2024.map_or(true, |sales| sales == 0.0);
    if is_new_store {
        return YoyOutcome::new_store();
    }

    let sales_amount = match (metrics.sales_2025, metrics.sales_2024) {
        (Some(current), Some(prior)) => Some(current - prior),
        _ => None,
    };
    let sales_pct = match (sales_amount, metrics.sales_2024) {
        (Some(amount), Some(prior)) if prior != 0.0 => Some(amount / prior * 100.0),
        _ => None,
    };
    // Fraction difference scaled by 100: percentage points, on the same
    // numeric scale the risk rules compare against relative sales growth.
    let return_rate = match (metrics.return_rate_2025, metrics.return_rate_2024) {
        (Some(current), Some(prior)) => Some((current - prior) * 100.0),
        _ => None,
    };

    YoyOutcome {
        is_new_store: false,
        sales_amount,
        sales_pct,
        return_rate,
    }
}
