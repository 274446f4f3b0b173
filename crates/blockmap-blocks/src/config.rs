use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Bounding box value that marks a block occupying the full unit cube.
pub const FULL_BLOCK_BOX: &str = "block";

// One entry of a minecraft-data `blocks.json` array. Every other key on the
// object (id, hardness, states, drops, ...) is ignored.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockRecord {
    #[serde(default)]
    pub name: Option<String>,
    // Only a string can be "block"; any other JSON value reads as a non-full shape.
    #[serde(default, rename = "boundingBox", deserialize_with = "string_or_none")]
    pub bounding_box: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Str(String),
        #[allow(dead_code)]
        Other(IgnoredAny),
    }
    Ok(match Loose::deserialize(deserializer)? {
        Loose::Str(s) => Some(s),
        Loose::Other(_) => None,
    })
}

impl BlockRecord {
    pub fn new(name: impl Into<String>, bounding_box: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            bounding_box: Some(bounding_box.into()),
        }
    }

    /// Name of the record, or `None` when it is missing or empty.
    #[inline]
    pub fn key(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    #[inline]
    pub fn is_full_block(&self) -> bool {
        self.bounding_box.as_deref() == Some(FULL_BLOCK_BOX)
    }
}
