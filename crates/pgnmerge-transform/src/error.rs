use thiserror::Error;

use pgnmerge_metadata::MetadataError;
use pgnmerge_model::ParameterKey;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("no input datasets to merge")]
    NoInputs,
    /// A continuous column holds a non-numeric present value; interpolating
    /// across state text is exactly what classification exists to prevent.
    #[error("column {column}: row {row} holds non-numeric value {value:?} but the column is classified continuous")]
    NonNumeric {
        column: ParameterKey,
        row: usize,
        value: String,
    },
    #[error(transparent)]
    Metadata(#[from] MetadataError),
    #[error("classification log: {0}")]
    Log(#[from] std::io::Error),
}
