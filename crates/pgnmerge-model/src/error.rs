use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid parameter column header {0:?}: expected PGN:SPN")]
    InvalidParameterKey(String),
}
