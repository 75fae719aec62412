use storewatch_ingest::RawRow;

use crate::brand::map_brand;
use crate::clean::CleanedMetrics;
use crate::error::Result;
use crate::risk::assess_risk;
use crate::types::{Brand, ProcessedRecord, RiskLevel, YearMetrics, YoyMetrics};
use crate::yoy::compute_yoy;

/// Everything one run produces: the ordered record sequence plus the count
/// of rows dropped by brand resolution.
#[derive(Debug, Clone, Default)]
pub struct ProcessedBatch {
    pub records: Vec<ProcessedRecord>,
    pub excluded: usize,
}

impl ProcessedBatch {
    /// Distribution counts are derived on demand, never stored.
    pub fn stats(&self) -> AggregateStats {
        AggregateStats::from_records(&self.records)
    }
}

/// Brand and risk-tier counts over an emitted batch, iterated in
/// first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateStats {
    pub brands: Vec<(Brand, usize)>,
    pub risk_levels: Vec<(RiskLevel, usize)>,
}

impl AggregateStats {
    fn from_records(records: &[ProcessedRecord]) -> Self {
        let mut stats = AggregateStats::default();
        for record in records {
            bump(&mut stats.brands, record.brand);
            bump(&mut stats.risk_levels, record.risk_level);
        }
        stats
    }
}

fn bump<K: PartialEq>(counts: &mut Vec<(K, usize)>, key: K) {
    match counts.iter_mut().find(|(existing, _)| *existing == key) {
        Some((_, count)) => *count += 1,
        None => counts.push((key, 1)),
    }
}

/// Run the classification pipeline over raw rows. Output order is input
/// order; a row either becomes a full record or is dropped whole.
pub fn process_rows<I>(rows: I) -> ProcessedBatch
where
    I: IntoIterator<Item = RawRow>,
{
    let mut records = Vec::new();
    let mut excluded = 0usize;

    for row in rows {
        // Blank channel marks filler/separator rows in the export; skipped
        // without counting as an exclusion.
        let channel = match row.channel.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => continue,
        };

        let shop_name = row.shop_name.as_deref().map(str::trim);
        let brand = match map_brand(shop_name) {
            Some(brand) => brand,
            None => {
                excluded += 1;
                continue;
            }
        };
        let shop_name = shop_name.unwrap_or_default().to_string();

        let cleaned = CleanedMetrics::from_row(&row);
        let yoy = compute_yoy(&cleaned);
        let (risk_level, suggestion) = assess_risk(&yoy);

        records.push(ProcessedRecord {
            channel,
            shop_name,
            brand,
            year_2025: YearMetrics {
                net_sales: cleaned.sales_2025,
                return_rate: cleaned.return_rate_2025,
            },
            year_2024: YearMetrics {
                net_sales: cleaned.sales_2024,
                return_rate: cleaned.return_rate_2024,
            },
            yoy: YoyMetrics {
                sales_amount: yoy.sales_amount,
                sales_pct: yoy.sales_pct,
                return_rate: yoy.return_rate,
            },
            risk_level,
            suggestion: suggestion.to_string(),
            is_new_store: yoy.is_new_store,
        });
    }

    tracing::debug!(
        records = records.len(),
        excluded,
        "classified store metrics batch"
    );

    ProcessedBatch { records, excluded }
}

/// Parse CSV text and run the pipeline over it. Ingestion problems are the
/// only failure mode; classification itself is total.
pub fn process_csv(content: &str) -> Result<ProcessedBatch> {
    let rows = storewatch_ingest::read_rows(content)?;
    Ok(process_rows(rows))
}
