pub mod classifier;
pub mod error;
pub mod store;

pub use classifier::{DISCRETE_MARKER, classify};
pub use error::MetadataError;
pub use store::{DescriptionStore, MemoryStore, SqliteStore};
