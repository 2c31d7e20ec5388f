pub mod align;
pub mod error;
pub mod fill;

pub use align::merge_datasets;
pub use error::TransformError;
pub use fill::{ClassificationSink, fill_gaps};
