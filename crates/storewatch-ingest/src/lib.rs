pub mod errors;
mod reader;

pub use errors::IngestError;
pub use reader::{
    read_rows, RawRow, CHANNEL_COLUMN, RETURN_RATE_2024_COLUMN, RETURN_RATE_2025_COLUMN,
    SALES_2024_COLUMN, SALES_2025_COLUMN, SHOP_COLUMN,
};

#[cfg(test)]
mod tests;
