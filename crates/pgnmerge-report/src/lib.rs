pub mod classification_log;
pub mod error;
pub mod writer;

pub use classification_log::ClassificationLog;
pub use error::ReportError;
pub use writer::{write_merged_csv, write_merged_csv_to};
