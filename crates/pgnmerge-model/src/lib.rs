pub mod classification;
pub mod error;
pub mod ids;
pub mod table;

pub use classification::Classification;
pub use error::ModelError;
pub use ids::{ParameterKey, Pgn, Spn};
pub use table::{
    CellValue, Column, Dataset, MergedTable, NA_MARKER, TIME_COLUMN_NAME, Timestamp,
    format_number,
};
