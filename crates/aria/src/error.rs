//! Error types for table loading
//!
//! Lookups never fail: a miss is `None`. Only decoding the embedded
//! payloads and exporting tables can go wrong.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AriaError>;

#[derive(Debug, Error)]
pub enum AriaError {
    #[error("Malformed {table} payload: {source}")]
    Payload {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate key in {table}: entry {second} matches entry {first}")]
    DuplicateKey {
        table: &'static str,
        first: usize,
        second: usize,
    },

    #[error("Export error: {0}")]
    Export(#[from] serde_json::Error),
}
