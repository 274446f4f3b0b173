//! Loading block records and writing mapping tables.
#![forbid(unsafe_code)]

pub mod error;
pub mod mappings;
pub mod records;

pub use error::{IoError, Result};
pub use mappings::{mapping_json, write_mapping};
pub use records::{load_records, parse_records};
