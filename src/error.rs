//! Error types shared by the downloader, checkpoint reader and exporter.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Protobuf error: {0}")]
    Protobuf(#[from] protobuf::Error),

    #[error("Progress bar template error: {0}")]
    ProgressTemplate(#[from] indicatif::style::TemplateError),

    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("Unknown model size {0:?}, expected one of 124M, 355M, 774M, 1558M")]
    UnknownModelSize(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to download {file}: {reason}")]
    Download { file: String, reason: String },

    #[error("Invalid checkpoint state file: {0}")]
    CheckpointState(String),

    #[error("Corrupt table: {0}")]
    Table(String),

    #[error("Invalid parameter layout: {0}")]
    ParamLayout(String),

    #[error("Checksum mismatch in {what}: expected {expected:#010x}, got {actual:#010x}")]
    ChecksumMismatch {
        what: String,
        expected: u32,
        actual: u32,
    },

    #[error("Tensor {name} has unsupported dtype {dtype}")]
    UnsupportedDtype { name: String, dtype: String },

    #[error("Big-endian checkpoints are not supported")]
    BigEndianBundle,

    #[error("Missing tensor: {0}")]
    MissingTensor(String),

    #[error("Parameter {0} is not a numeric array")]
    NotAnArray(String),

    #[error("Cannot split axis of length {len} into {sections} equal sections")]
    InvalidSplit { len: usize, sections: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
