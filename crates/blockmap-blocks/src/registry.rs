use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::config::BlockRecord;
use super::rules::classify_name;
use super::types::Category;

/// Block name to category lookup, kept in insertion order.
///
/// Serializes as a flat JSON object with `null` for blocks that have no
/// category.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct MappingTable {
    entries: Vec<(String, Option<Category>)>,
    by_name: HashMap<String, usize>,
}

impl MappingTable {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Classify every named record. Records with a missing or empty name are
    /// left out of the table.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a BlockRecord>,
    {
        let mut table = MappingTable::new();
        let mut skipped = 0usize;
        for rec in records {
            let Some(name) = rec.key() else {
                skipped += 1;
                continue;
            };
            let category = classify_name(name, rec.is_full_block());
            log::trace!(
                "{} -> {}",
                name,
                category.map(Category::as_str).unwrap_or("null")
            );
            table.insert(name, category);
        }
        if skipped > 0 {
            log::debug!("skipped {} record(s) without a name", skipped);
        }
        table
    }

    /// Insert or replace. A replaced key keeps its original position.
    pub fn insert(&mut self, name: &str, category: Option<Category>) {
        if let Some(&idx) = self.by_name.get(name) {
            self.entries[idx].1 = category;
            return;
        }
        self.by_name.insert(name.to_string(), self.entries.len());
        self.entries.push((name.to_string(), category));
    }

    /// `None` when the block is unknown, `Some(None)` when it maps to nothing.
    pub fn get(&self, name: &str) -> Option<Option<Category>> {
        self.by_name.get(name).map(|&idx| self.entries[idx].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of blocks that received a category.
    pub fn categorized_count(&self) -> usize {
        self.entries.iter().filter(|(_, c)| c.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<Category>)> + '_ {
        self.entries.iter().map(|(n, c)| (n.as_str(), *c))
    }
}

impl Serialize for MappingTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, category) in &self.entries {
            map.serialize_entry(name, category)?;
        }
        map.end()
    }
}
