use thiserror::Error;

use pgnmerge_model::Spn;

#[derive(Debug, Error)]
pub enum MetadataError {
    /// The store has no entry for this SPN. Never defaulted: guessing a
    /// classification risks interpolating across discrete states.
    #[error("no metadata entry for SPN {0}")]
    NotFound(Spn),
    #[error("metadata store: {0}")]
    Store(#[from] rusqlite::Error),
}
