// crates/storewatch-core/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Ingestion failed: {0}")]
    Ingest(#[from] storewatch_ingest::IngestError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
