// File: crates/scatter-core/src/error.rs
// Summary: Error types for loading, validating and rendering the dataset.

use thiserror::Error;

/// Retrieval failed before any record could be validated.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("malformed JSON payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordErrorKind {
    MissingField(&'static str),
    BadTime(String),
}

/// A single record failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("record {index}: {}", describe(.kind))]
pub struct RecordError {
    pub index: usize,
    pub kind: RecordErrorKind,
}

fn describe(kind: &RecordErrorKind) -> String {
    match kind {
        RecordErrorKind::MissingField(field) => format!("missing field `{field}`"),
        RecordErrorKind::BadTime(raw) => format!("time `{raw}` is not MM:SS"),
    }
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error("dataset contains no records")]
    EmptyDataset,
}

pub type Result<T> = std::result::Result<T, ChartError>;
