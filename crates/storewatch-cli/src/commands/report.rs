// crates/storewatch-cli/src/commands/report.rs

use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use storewatch_core::outputs::read_records;
use storewatch_core::summary::{brand_summaries, channel_summaries, sort_by_risk};

use crate::format::{format_currency, format_percentage, format_return_rate};

/// The main handler for `storewatch report`.
pub fn handle_report_command(data: &Path) -> Result<()> {
    let mut records = read_records(data)
        .with_context(|| format!("failed to load processed data from {}", data.display()))?;

    println!("Report over {} classified stores\n", records.len());

    let mut channel_table = Table::new();
    channel_table.load_preset(UTF8_FULL).set_header(vec![
        "Channel",
        "Sales 2025",
        "Sales 2024",
        "Sales YOY",
        "Return 2025",
        "Return YOY (pts)",
        "Stores",
        "High risk",
        "Watch",
        "New",
    ]);
    for summary in channel_summaries(&records) {
        channel_table.add_row(vec![
            summary.channel.clone(),
            format_currency(Some(summary.total_sales_2025)),
            format_currency(Some(summary.total_sales_2024)),
            format_percentage(Some(summary.sales_yoy_pct), true),
            format_return_rate(Some(summary.avg_return_rate_2025)),
            format_percentage(Some(summary.return_rate_yoy), true),
            summary.shop_count.to_string(),
            summary.high_risk_count.to_string(),
            summary.watch_count.to_string(),
            summary.new_store_count.to_string(),
        ]);
    }
    println!("{channel_table}\n");

    let mut brand_table = Table::new();
    brand_table.load_preset(UTF8_FULL).set_header(vec![
        "Brand",
        "Sales 2025",
        "Sales YOY",
        "Avg return 2025",
        "Return YOY (pts)",
        "Stores",
        "High risk",
    ]);
    for summary in brand_summaries(&records) {
        brand_table.add_row(vec![
            summary.brand.to_string(),
            format_currency(Some(summary.total_sales_2025)),
            format_percentage(Some(summary.sales_yoy_pct), true),
            format_return_rate(Some(summary.avg_return_rate_2025)),
            format_percentage(Some(summary.return_rate_yoy), true),
            summary.shop_count.to_string(),
            summary.high_risk_count.to_string(),
        ]);
    }
    println!("{brand_table}\n");

    sort_by_risk(&mut records);
    println!("Most urgent stores:");
    for record in records.iter().take(10) {
        println!(
            "  [{}] {} / {}: {}",
            record.risk_level, record.channel, record.shop_name, record.suggestion
        );
    }

    Ok(())
}
