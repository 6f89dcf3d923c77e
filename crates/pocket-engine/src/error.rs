use pocket_domain::{RecordId, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("Record #{index} (id {id}) rejected: {source}")]
    InvalidRecord {
        index: usize,
        id: RecordId,
        #[source]
        source: ValidationError,
    },
    #[error("Amount overflow while summing {context}")]
    Overflow { context: String },
    #[error("Malformed transaction document: {0}")]
    Json(String),
}
