use std::fmt;

use super::config::BlockRecord;

/// Coarse shape bucket guessed from a block name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeClass {
    Full,
    Partial,
    Special,
    NonStandard,
}

const FULL_KEYWORDS: [&str; 5] = ["stone", "dirt", "wood", "log", "planks"];
const PARTIAL_KEYWORDS: [&str; 4] = ["slab", "stairs", "wall", "fence"];
const SPECIAL_KEYWORDS: [&str; 4] = ["door", "bed", "chest", "furnace"];

/// Examples listed per bucket in the report.
pub const EXAMPLES_PER_CLASS: usize = 3;

impl ShapeClass {
    /// Order the report prints buckets in. Matching order is [`ShapeClass::of`].
    pub const REPORT_ORDER: [ShapeClass; 4] = [
        ShapeClass::Full,
        ShapeClass::Partial,
        ShapeClass::NonStandard,
        ShapeClass::Special,
    ];

    pub fn of(name: &str) -> ShapeClass {
        let has_any = |words: &[&str]| words.iter().any(|w| name.contains(w));
        if has_any(&FULL_KEYWORDS[..]) {
            ShapeClass::Full
        } else if has_any(&PARTIAL_KEYWORDS[..]) {
            ShapeClass::Partial
        } else if has_any(&SPECIAL_KEYWORDS[..]) {
            ShapeClass::Special
        } else {
            ShapeClass::NonStandard
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShapeClass::Full => "fullBlocks",
            ShapeClass::Partial => "partialBlocks",
            ShapeClass::Special => "specialBlocks",
            ShapeClass::NonStandard => "nonStandardShapes",
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Block names grouped by [`ShapeClass`], in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShapeReport {
    buckets: [Vec<String>; 4],
}

impl ShapeReport {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a BlockRecord>,
    {
        let mut report = ShapeReport::default();
        for name in records.into_iter().filter_map(BlockRecord::key) {
            report.buckets[ShapeClass::of(name).index()].push(name.to_string());
        }
        report
    }

    pub fn names(&self, class: ShapeClass) -> &[String] {
        &self.buckets[class.index()]
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}

impl fmt::Display for ShapeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Block Analysis Results:")?;
        write!(f, "----------------------")?;
        for class in ShapeClass::REPORT_ORDER {
            let names = self.names(class);
            let examples: Vec<&str> = names
                .iter()
                .take(EXAMPLES_PER_CLASS)
                .map(String::as_str)
                .collect();
            writeln!(f)?;
            writeln!(f)?;
            writeln!(f, "{}:", class.label())?;
            writeln!(f, "Total: {} blocks", names.len())?;
            write!(f, "Examples: {}", examples.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_precedence() {
        assert_eq!(ShapeClass::of("stone_slab"), ShapeClass::Full);
        assert_eq!(ShapeClass::of("oak_fence"), ShapeClass::Partial);
        assert_eq!(ShapeClass::of("cobblestone_wall"), ShapeClass::Full);
        assert_eq!(ShapeClass::of("oak_door"), ShapeClass::Special);
        assert_eq!(ShapeClass::of("red_bed"), ShapeClass::Special);
        assert_eq!(ShapeClass::of("torch"), ShapeClass::NonStandard);
    }

    #[test]
    fn report_text() {
        let records = vec![
            BlockRecord::new("stone", "block"),
            BlockRecord::new("granite_slab", "empty"),
            BlockRecord::default(),
            BlockRecord::new("dirt", "block"),
            BlockRecord::new("oak_log", "block"),
            BlockRecord::new("oak_planks", "block"),
            BlockRecord::new("chest", "block"),
        ];
        let report = ShapeReport::from_records(&records);
        assert_eq!(report.total(), 6);
        let expected = "Block Analysis Results:\n\
                        ----------------------\n\
                        \n\
                        fullBlocks:\n\
                        Total: 4 blocks\n\
                        Examples: stone, dirt, oak_log\n\
                        \n\
                        partialBlocks:\n\
                        Total: 1 blocks\n\
                        Examples: granite_slab\n\
                        \n\
                        nonStandardShapes:\n\
                        Total: 0 blocks\n\
                        Examples: \n\
                        \n\
                        specialBlocks:\n\
                        Total: 1 blocks\n\
                        Examples: chest";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn non_standard_printed_before_special() {
        let records = vec![
            BlockRecord::new("chest", "block"),
            BlockRecord::new("torch", "empty"),
        ];
        let text = ShapeReport::from_records(&records).to_string();
        let non_standard = text.find("nonStandardShapes:").unwrap();
        let special = text.find("specialBlocks:").unwrap();
        assert!(non_standard < special);
        assert!(text[non_standard..special].contains("Examples: torch"));
        assert!(text[special..].contains("Examples: chest"));
    }
}
