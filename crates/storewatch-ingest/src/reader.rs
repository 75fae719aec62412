use csv::StringRecord;

use crate::errors::IngestError;

pub const CHANNEL_COLUMN: &str = "渠道";
pub const SHOP_COLUMN: &str = "店铺";
pub const SALES_2025_COLUMN: &str = "2025年净销售";
pub const SALES_2024_COLUMN: &str = "2024年净销售";
pub const RETURN_RATE_2025_COLUMN: &str = "2025年YTD-退货率";
pub const RETURN_RATE_2024_COLUMN: &str = "2024年YTD-退货率";

/// One raw record from the store metrics export. Cells are carried verbatim;
/// interpreting their contents is the pipeline's job, not the reader's.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    pub channel: Option<String>,
    pub shop_name: Option<String>,
    pub sales_2025: Option<String>,
    pub sales_2024: Option<String>,
    pub return_rate_2025: Option<String>,
    pub return_rate_2024: Option<String>,
}

#[derive(Debug, Clone, Copy)]
struct ColumnIndices {
    channel: usize,
    shop_name: usize,
    sales_2025: usize,
    sales_2024: usize,
    return_rate_2025: usize,
    return_rate_2024: usize,
}

impl ColumnIndices {
    fn resolve(header: &StringRecord) -> Result<Self, IngestError> {
        Ok(Self {
            channel: find_column(header, CHANNEL_COLUMN)?,
            shop_name: find_column(header, SHOP_COLUMN)?,
            sales_2025: find_column(header, SALES_2025_COLUMN)?,
            sales_2024: find_column(header, SALES_2024_COLUMN)?,
            return_rate_2025: find_column(header, RETURN_RATE_2025_COLUMN)?,
            return_rate_2024: find_column(header, RETURN_RATE_2024_COLUMN)?,
        })
    }
}

// Header cells in the export often carry incidental padding.
fn find_column(header: &StringRecord, column: &'static str) -> Result<usize, IngestError> {
    header
        .iter()
        .position(|cell| cell.trim() == column)
        .ok_or(IngestError::MissingColumn { column })
}

fn cell(record: &StringRecord, index: usize) -> Option<String> {
    record.get(index).map(|value| value.to_string())
}

/// Parse CSV text into raw rows. Only file-level problems are errors; a
/// short data row simply yields missing cells.
pub fn read_rows(content: &str) -> Result<Vec<RawRow>, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut records = reader.records();

    let header = match records.next() {
        Some(record) => record?,
        None => return Err(IngestError::MissingHeader),
    };
    let columns = ColumnIndices::resolve(&header)?;

    let mut rows = Vec::new();
    for record in records {
        let record = record?;
        rows.push(RawRow {
            channel: cell(&record, columns.channel),
            shop_name: cell(&record, columns.shop_name),
            sales_2025: cell(&record, columns.sales_2025),
            sales_2024: cell(&record, columns.sales_2024),
            return_rate_2025: cell(&record, columns.return_rate_2025),
            return_rate_2024: cell(&record, columns.return_rate_2024),
        });
    }

    if rows.is_empty() {
        return Err(IngestError::EmptyData);
    }

    Ok(rows)
}
