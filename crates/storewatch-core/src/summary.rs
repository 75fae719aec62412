use crate::types::{Brand, ProcessedRecord, RiskLevel};

/// Channel-level rollup for operator reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSummary {
    pub channel: String,
    pub total_sales_2025: f64,
    pub total_sales_2024: f64,
    pub avg_return_rate_2025: f64,
    pub avg_return_rate_2024: f64,
    pub sales_yoy_amount: f64,
    pub sales_yoy_pct: f64,
    pub return_rate_yoy: f64,
    pub shop_count: usize,
    pub high_risk_count: usize,
    pub watch_count: usize,
    pub new_store_count: usize,
}

/// Brand-level rollup for operator reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct BrandSummary {
    pub brand: Brand,
    pub total_sales_2025: f64,
    pub total_sales_2024: f64,
    pub sales_yoy_pct: f64,
    pub avg_return_rate_2025: f64,
    pub return_rate_yoy: f64,
    pub shop_count: usize,
    pub high_risk_count: usize,
}

/// Summarize records per channel: 2025 totals over every store, 2024 totals
/// and YOY over comparable stores only, return rates weighted by sales.
/// Sorted by 2025 sales, largest channel first.
pub fn channel_summaries(records: &[ProcessedRecord]) -> Vec<ChannelSummary> {
    let mut order: Vec<&str> = Vec::new();
    for record in records {
        if !order.contains(&record.channel.as_str()) {
            order.push(&record.channel);
        }
    }

    let mut summaries: Vec<ChannelSummary> = order
        .into_iter()
        .map(|channel| {
            let shops: Vec<&ProcessedRecord> =
                records.iter().filter(|r| r.channel == channel).collect();
            summarize_channel(channel, &shops)
        })
        .collect();

    summaries.sort_by(|a, b| b.total_sales_2025.total_cmp(&a.total_sales_2025));
    summaries
}

// Comparable stores carry a positive prior-year baseline; new stores stay in
// the 2025 totals but are excluded from every YOY figure.
fn is_comparable(record: &ProcessedRecord) -> bool {
    !record.is_new_store && record.year_2024.net_sales.is_some_and(|sales| sales > 0.0)
}

fn summarize_channel(channel: &str, shops: &[&ProcessedRecord]) -> ChannelSummary {
    let comparable: Vec<&&ProcessedRecord> =
        shops.iter().filter(|shop| is_comparable(shop)).collect();

    let total_sales_2025: f64 = shops
        .iter()
        .map(|shop| shop.year_2025.net_sales.unwrap_or(0.0))
        .sum();
    let total_sales_2024: f64 = comparable
        .iter()
        .map(|shop| shop.year_2024.net_sales.unwrap_or(0.0))
        .sum();

    let avg_return_rate_2025 = if !comparable.is_empty() && total_sales_2025 > 0.0 {
        comparable
            .iter()
            .map(|shop| {
                shop.year_2025.return_rate.unwrap_or(0.0) * shop.year_2025.net_sales.unwrap_or(0.0)
            })
            .sum::<f64>()
            / total_sales_2025
    } else {
        0.0
    };
    let avg_return_rate_2024 = if !comparable.is_empty() && total_sales_2024 > 0.0 {
        comparable
            .iter()
            .map(|shop| {
                shop.year_2024.return_rate.unwrap_or(0.0) * shop.year_2024.net_sales.unwrap_or(0.0)
            })
            .sum::<f64>()
            / total_sales_2024
    } else {
        0.0
    };

    let sales_yoy_amount = total_sales_2025 - total_sales_2024;
    let sales_yoy_pct = if total_sales_2024 > 0.0 {
        sales_yoy_amount / total_sales_2024 * 100.0
    } else {
        0.0
    };

    ChannelSummary {
        channel: channel.to_string(),
        total_sales_2025,
        total_sales_2024,
        avg_return_rate_2025,
        avg_return_rate_2024,
        sales_yoy_amount,
        sales_yoy_pct,
        return_rate_yoy: (avg_return_rate_2025 - avg_return_rate_2024) * 100.0,
        shop_count: shops.len(),
        high_risk_count: count_level(shops, RiskLevel::HighRisk),
        watch_count: count_level(shops, RiskLevel::Watch),
        new_store_count: shops.iter().filter(|shop| shop.is_new_store).count(),
    }
}

fn count_level(shops: &[&ProcessedRecord], level: RiskLevel) -> usize {
    shops.iter().filter(|shop| shop.risk_level == level).count()
}

/// Summarize records per brand. Return rates here are plain means (2025
/// over every store, 2024 over comparable stores), not sales-weighted.
/// Sorted by 2025 sales, largest brand first.
pub fn brand_summaries(records: &[ProcessedRecord]) -> Vec<BrandSummary> {
    let mut order: Vec<Brand> = Vec::new();
    for record in records {
        if !order.contains(&record.brand) {
            order.push(record.brand);
        }
    }

    let mut summaries: Vec<BrandSummary> = order
        .into_iter()
        .map(|brand| {
            let shops: Vec<&ProcessedRecord> =
                records.iter().filter(|r| r.brand == brand).collect();
            let comparable: Vec<&&ProcessedRecord> = shops
                .iter()
                .filter(|shop| {
                    !shop.is_new_store
                        && shop.year_2024.net_sales.is_some_and(|sales| sales != 0.0)
                })
                .collect();

            let total_sales_2025: f64 = shops
                .iter()
                .map(|shop| shop.year_2025.net_sales.unwrap_or(0.0))
                .sum();
            let total_sales_2024: f64 = comparable
                .iter()
                .map(|shop| shop.year_2024.net_sales.unwrap_or(0.0))
                .sum();
            let sales_yoy_pct = if total_sales_2024 > 0.0 {
                (total_sales_2025 - total_sales_2024) / total_sales_2024 * 100.0
            } else {
                0.0
            };

            let avg_return_rate_2025 = if shops.is_empty() {
                0.0
            } else {
                shops
                    .iter()
                    .map(|shop| shop.year_2025.return_rate.unwrap_or(0.0))
                    .sum::<f64>()
                    / shops.len() as f64
            };
            let avg_return_rate_2024 = if comparable.is_empty() {
                0.0
            } else {
                comparable
                    .iter()
                    .map(|shop| shop.year_2024.return_rate.unwrap_or(0.0))
                    .sum::<f64>()
                    / comparable.len() as f64
            };

            BrandSummary {
                brand,
                total_sales_2025,
                total_sales_2024,
                sales_yoy_pct,
                avg_return_rate_2025,
                return_rate_yoy: (avg_return_rate_2025 - avg_return_rate_2024) * 100.0,
                shop_count: shops.len(),
                high_risk_count: count_level(&shops, RiskLevel::HighRisk),
            }
        })
        .collect();

    summaries.sort_by(|a, b| b.total_sales_2025.total_cmp(&a.total_sales_2025));
    summaries
}

/// Order records most urgent first for operator listings. Stable, so ties
/// keep input order.
pub fn sort_by_risk(records: &mut [ProcessedRecord]) {
    records.sort_by_key(|record| record.risk_level.severity_rank());
}
