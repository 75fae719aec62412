use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::types::ProcessedRecord;

/// Write the processed sequence as a pretty-printed JSON array, creating
/// parent directories as needed. Wide characters are written verbatim.
pub fn write_records(path: &Path, records: &[ProcessedRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;

    info!(records = records.len(), path = %path.display(), "wrote processed data");
    Ok(())
}

/// Read a previously written processed-data artifact back into memory.
pub fn read_records(path: &Path) -> Result<Vec<ProcessedRecord>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
