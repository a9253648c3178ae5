use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of item categories.
///
/// Declaration order is the display order: category sort and grouping both
/// follow it. Grocery categories come first, home-improvement categories
/// after; each block ends with its catch-all (`Other`, `Misc`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "String")]
pub enum Category {
    Produce,
    Dairy,
    Meat,
    Bakery,
    Pantry,
    Frozen,
    Beverages,
    Snacks,
    Other,
    Tools,
    Hardware,
    Paint,
    Electrical,
    Plumbing,
    Garden,
    Misc,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 16] = [
        Category::Produce,
        Category::Dairy,
        Category::Meat,
        Category::Bakery,
        Category::Pantry,
        Category::Frozen,
        Category::Beverages,
        Category::Snacks,
        Category::Other,
        Category::Tools,
        Category::Hardware,
        Category::Paint,
        Category::Electrical,
        Category::Plumbing,
        Category::Garden,
        Category::Misc,
    ];

    /// Parse a category name. Matching is case-insensitive.
    pub fn parse(name: &str) -> Option<Category> {
        let name = name.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Produce => "Produce",
            Category::Dairy => "Dairy",
            Category::Meat => "Meat",
            Category::Bakery => "Bakery",
            Category::Pantry => "Pantry",
            Category::Frozen => "Frozen",
            Category::Beverages => "Beverages",
            Category::Snacks => "Snacks",
            Category::Other => "Other",
            Category::Tools => "Tools",
            Category::Hardware => "Hardware",
            Category::Paint => "Paint",
            Category::Electrical => "Electrical",
            Category::Plumbing => "Plumbing",
            Category::Garden => "Garden",
            Category::Misc => "Misc",
        }
    }

    /// Display icon for the category.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Produce => "🥬",
            Category::Dairy => "🥛",
            Category::Meat => "🥩",
            Category::Bakery => "🍞",
            Category::Pantry => "🥫",
            Category::Frozen => "🧊",
            Category::Beverages => "🥤",
            Category::Snacks => "🍿",
            Category::Other => "📦",
            Category::Tools => "🔧",
            Category::Hardware => "🔩",
            Category::Paint => "🎨",
            Category::Electrical => "💡",
            Category::Plumbing => "🚰",
            Category::Garden => "🌱",
            Category::Misc => "🧰",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lenient conversion used when deserializing snapshots: an unrecognized
/// category name degrades to `Other` instead of failing the whole load.
impl From<String> for Category {
    fn from(name: String) -> Self {
        Category::parse(&name).unwrap_or(Category::Other)
    }
}
