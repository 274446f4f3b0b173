use std::fs;
use std::path::Path;

use blockmap_blocks::BlockRecord;

use crate::error::{IoError, Result};

/// Read a minecraft-data style `blocks.json` (a JSON array of block objects).
pub fn load_records(path: &Path) -> Result<Vec<BlockRecord>> {
    let text = fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(&text).map_err(|source| IoError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} block record(s) from {:?}", records.len(), path);
    Ok(records)
}

pub fn parse_records(text: &str) -> serde_json::Result<Vec<BlockRecord>> {
    serde_json::from_str(text)
}
