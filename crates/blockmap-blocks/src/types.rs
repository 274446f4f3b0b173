use serde::{Deserialize, Serialize};
use std::fmt;

// Coarse material category consumed by the downstream block converter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Stone,
    Dirt,
    OakPlanks,
    Log,
    OakLeaves,
    Glass,
    SandLight,
    Sand,
    Shadowrock,
    GhostDirt,
    VoidSand,
    Creep,
    Ice,
    Snow,
    Nuit,
}

impl Category {
    pub const ALL: [Category; 15] = [
        Category::Stone,
        Category::Dirt,
        Category::OakPlanks,
        Category::Log,
        Category::OakLeaves,
        Category::Glass,
        Category::SandLight,
        Category::Sand,
        Category::Shadowrock,
        Category::GhostDirt,
        Category::VoidSand,
        Category::Creep,
        Category::Ice,
        Category::Snow,
        Category::Nuit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Stone => "stone",
            Category::Dirt => "dirt",
            Category::OakPlanks => "oak-planks",
            Category::Log => "log",
            Category::OakLeaves => "oak-leaves",
            Category::Glass => "glass",
            Category::SandLight => "sand-light",
            Category::Sand => "sand",
            Category::Shadowrock => "shadowrock",
            Category::GhostDirt => "ghost-dirt",
            Category::VoidSand => "void-sand",
            Category::Creep => "creep",
            Category::Ice => "ice",
            Category::Snow => "snow",
            Category::Nuit => "nuit",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
