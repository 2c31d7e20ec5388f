use std::path::PathBuf;

use thiserror::Error;

use pgnmerge_model::ModelError;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("{}: required column {column:?} is missing", path.display())]
    MissingColumn { path: PathBuf, column: String },
    #[error("{}: row {row}: cannot parse {value:?} as a timestamp", path.display())]
    BadTimestamp {
        path: PathBuf,
        row: usize,
        value: String,
    },
    #[error("{}: {source}", path.display())]
    BadHeader {
        path: PathBuf,
        #[source]
        source: ModelError,
    },
}
