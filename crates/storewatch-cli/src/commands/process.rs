// crates/storewatch-cli/src/commands/process.rs

use std::path::Path;

use anyhow::{Context, Result};
use storewatch_core::outputs::write_records;
use storewatch_core::pipeline::process_csv;
use tracing::info;

/// The main handler for `storewatch process`.
pub fn handle_process_command(input: &Path, output: &Path) -> Result<()> {
    println!("Processing store metrics export: {}", input.display());

    let content = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read input file {}", input.display()))?;

    let batch = process_csv(&content)
        .with_context(|| format!("failed to ingest {}", input.display()))?;
    info!(
        records = batch.records.len(),
        excluded = batch.excluded,
        "pipeline finished"
    );

    write_records(output, &batch.records)
        .with_context(|| format!("failed to write output file {}", output.display()))?;

    let stats = batch.stats();

    println!("\n--- Processing Summary ---");
    println!("  ✅ Stores classified: {}", batch.records.len());
    println!("  ⚠️  Excluded (no brand rule matched): {}", batch.excluded);

    println!("\nBrand distribution:");
    for (brand, count) in &stats.brands {
        println!("  - {}: {} stores", brand, count);
    }

    println!("\nRisk distribution:");
    for (level, count) in &stats.risk_levels {
        println!("  - {}: {} stores", level, count);
    }

    println!("\n💾 Processed data written to: {}", output.display());
    Ok(())
}
