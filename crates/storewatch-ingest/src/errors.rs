use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("CSV error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    #[error("file missing header row")]
    MissingHeader,

    #[error("required column '{column}' not found in header")]
    MissingColumn { column: &'static str },

    #[error("file did not contain any data rows")]
    EmptyData,
}
