// Service exports
pub mod datasets;

pub use datasets::{load_reference_data, DatasetError};
