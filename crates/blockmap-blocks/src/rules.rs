use super::config::BlockRecord;
use super::types::Category;

/// Name fragments that exclude a full block from every category.
pub const EXCLUDED_FRAGMENTS: [&str; 2] = ["hard_", "technical"];

// Predicate over a raw block name. All tests are case-sensitive.
#[derive(Copy, Clone, Debug)]
pub enum Matcher {
    ContainsAny(&'static [&'static str]),
    ContainsAll(&'static [&'static str]),
    Exact(&'static [&'static str]),
    Either(&'static Matcher, &'static Matcher),
}

impl Matcher {
    pub fn matches(&self, name: &str) -> bool {
        match *self {
            Matcher::ContainsAny(frags) => frags.iter().any(|f| name.contains(f)),
            Matcher::ContainsAll(frags) => frags.iter().all(|f| name.contains(f)),
            Matcher::Exact(names) => names.contains(&name),
            Matcher::Either(a, b) => a.matches(name) || b.matches(name),
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Rule {
    pub matcher: Matcher,
    pub category: Category,
}

const fn rule(matcher: Matcher, category: Category) -> Rule {
    Rule { matcher, category }
}

/// Category rules in priority order; the first match wins.
///
/// Some later rules are unreachable for the names they list (`soul_sand` is
/// taken by the `sand` rule, `end_stone` by `stone`). The order is kept as is
/// so that new block names classify the same way the reference table does.
pub static RULES: [Rule; 15] = [
    rule(
        Matcher::ContainsAny(&[
            "stone",
            "granite",
            "diorite",
            "andesite",
            "deepslate",
            "tuff",
            "calcite",
        ]),
        Category::Stone,
    ),
    rule(Matcher::ContainsAny(&["dirt", "podzol", "mud"]), Category::Dirt),
    rule(Matcher::ContainsAny(&["_planks"]), Category::OakPlanks),
    rule(Matcher::ContainsAny(&["_log"]), Category::Log),
    rule(Matcher::ContainsAny(&["_leaves"]), Category::OakLeaves),
    rule(Matcher::ContainsAny(&["glass"]), Category::Glass),
    rule(Matcher::ContainsAll(&["sand", "red"]), Category::SandLight),
    rule(Matcher::ContainsAny(&["sand"]), Category::Sand),
    rule(
        Matcher::Exact(&["netherrack", "basalt", "polished_basalt"]),
        Category::Shadowrock,
    ),
    rule(Matcher::Exact(&["soul_sand", "soul_soil"]), Category::GhostDirt),
    rule(
        Matcher::Exact(&["end_stone", "end_stone_bricks"]),
        Category::VoidSand,
    ),
    rule(
        Matcher::Either(
            &Matcher::ContainsAny(&["sculk"]),
            &Matcher::Exact(&["moss_block"]),
        ),
        Category::Creep,
    ),
    rule(Matcher::ContainsAny(&["ice"]), Category::Ice),
    rule(Matcher::Exact(&["snow_block"]), Category::Snow),
    rule(Matcher::ContainsAny(&["amethyst"]), Category::Nuit),
];

/// Category for a block name. Non-full shapes and excluded names never map.
pub fn classify_name(name: &str, full_block: bool) -> Option<Category> {
    if !full_block || EXCLUDED_FRAGMENTS.iter().any(|f| name.contains(f)) {
        return None;
    }
    RULES
        .iter()
        .find(|r| r.matcher.matches(name))
        .map(|r| r.category)
}

/// Category for a record. Records without a name yield `None` as well; callers
/// that build a table must skip them via [`BlockRecord::key`].
pub fn classify(record: &BlockRecord) -> Option<Category> {
    let name = record.key()?;
    classify_name(name, record.is_full_block())
}
