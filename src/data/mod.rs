//! Data module - embedded index table and record formatting

mod dataset;
mod record;

pub use dataset::{DatasetError, IndexDataset};
pub use record::{format_thousands, IndexRecord};
