use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Category;

/// A list mode: a named, disjoint slice of the category set.
///
/// The grocery and home-improvement lists share one persisted collection and
/// are told apart purely by category membership, so the two category sets
/// must not overlap. Each mode carries its own catch-all category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Grocery,
    Home,
}

const GROCERY_CATEGORIES: [Category; 9] = [
    Category::Produce,
    Category::Dairy,
    Category::Meat,
    Category::Bakery,
    Category::Pantry,
    Category::Frozen,
    Category::Beverages,
    Category::Snacks,
    Category::Other,
];

const HOME_CATEGORIES: [Category; 7] = [
    Category::Tools,
    Category::Hardware,
    Category::Paint,
    Category::Electrical,
    Category::Plumbing,
    Category::Garden,
    Category::Misc,
];

impl Mode {
    /// Categories belonging to this mode, in display order.
    pub fn categories(self) -> &'static [Category] {
        match self {
            Mode::Grocery => &GROCERY_CATEGORIES,
            Mode::Home => &HOME_CATEGORIES,
        }
    }

    /// The catch-all category items land in when none is given.
    pub fn fallback(self) -> Category {
        match self {
            Mode::Grocery => Category::Other,
            Mode::Home => Category::Misc,
        }
    }

    pub fn contains(self, category: Category) -> bool {
        self.categories().contains(&category)
    }

    /// The mode a category belongs to. Total: the mode category sets
    /// partition `Category::ALL`.
    pub fn of(category: Category) -> Mode {
        if Mode::Grocery.contains(category) {
            Mode::Grocery
        } else {
            Mode::Home
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Grocery => f.write_str("grocery"),
            Mode::Home => f.write_str("home"),
        }
    }
}
