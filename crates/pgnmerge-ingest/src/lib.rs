pub mod error;
pub mod reader;

pub use error::IngestError;
pub use reader::{BOOKKEEPING_COLUMNS, read_dataset};
