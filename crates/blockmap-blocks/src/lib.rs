//! Block records, material categories, and the block-to-category mapping table.
#![forbid(unsafe_code)]

pub mod analyze;
pub mod config;
pub mod registry;
pub mod rules;
pub mod types;

pub use analyze::{ShapeClass, ShapeReport};
pub use config::BlockRecord;
pub use registry::MappingTable;
pub use rules::{classify, classify_name};
pub use types::Category;
