//! Error taxonomy for the rapport engine.

mod rapport_error;
mod storage_error;

pub use rapport_error::{RapportError, RapportResult};
pub use storage_error::StorageError;
