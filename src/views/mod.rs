//! Read-only projections over the item collection.
//!
//! Everything here is a pure function of the current items: filtering,
//! counting, sorting, and grouping never mutate state and never persist.
//! Each projection takes an optional [`Mode`] scope; the scope restriction
//! is applied first, inside the projection, so counts and orderings are
//! always computed over the active mode's items only.

use serde::Deserialize;

use crate::domain::{Category, Item, Mode};

/// Which purchase states a view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Needed,
    Purchased,
}

/// List orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    Alphabetical,
    #[default]
    Category,
}

/// Record counts plus the multi-unit quantity total.
///
/// `total_quantity` sums item quantities and is distinct from `total`,
/// which counts records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub total: usize,
    pub needed: usize,
    pub purchased: usize,
    pub total_quantity: u64,
}

fn in_scope(item: &Item, scope: Option<Mode>) -> bool {
    scope.map_or(true, |mode| mode.contains(item.category))
}

/// Items matching the scope and filter, in collection order.
pub fn filtered<'a>(items: &'a [Item], scope: Option<Mode>, filter: Filter) -> Vec<&'a Item> {
    items
        .iter()
        .filter(|item| in_scope(item, scope))
        .filter(|item| match filter {
            Filter::All => true,
            Filter::Needed => !item.purchased,
            Filter::Purchased => item.purchased,
        })
        .collect()
}

pub fn counts(items: &[Item], scope: Option<Mode>) -> Counts {
    let mut counts = Counts {
        total: 0,
        needed: 0,
        purchased: 0,
        total_quantity: 0,
    };
    for item in items.iter().filter(|item| in_scope(item, scope)) {
        counts.total += 1;
        if item.purchased {
            counts.purchased += 1;
        } else {
            counts.needed += 1;
        }
        counts.total_quantity += u64::from(item.quantity);
    }
    counts
}

/// Items in the requested order.
///
/// Alphabetical comparison is case-insensitive; the sort is stable, so ties
/// keep collection order. Category order is the fixed enumeration order,
/// with alphabetical text as the secondary key.
pub fn sorted<'a>(items: &'a [Item], scope: Option<Mode>, sort: SortMode) -> Vec<&'a Item> {
    let mut items: Vec<&Item> = items.iter().filter(|item| in_scope(item, scope)).collect();
    match sort {
        SortMode::Alphabetical => items.sort_by(|a, b| compare_text(a, b)),
        SortMode::Category => {
            items.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| compare_text(a, b)))
        }
    }
    items
}

/// Non-empty categories in enumeration order, each with its items in
/// alphabetical order.
pub fn grouped<'a>(items: &'a [Item], scope: Option<Mode>) -> Vec<(Category, Vec<&'a Item>)> {
    let sorted = sorted(items, scope, SortMode::Category);
    let mut groups: Vec<(Category, Vec<&Item>)> = Vec::new();
    for item in sorted {
        match groups.last_mut() {
            Some((category, members)) if *category == item.category => members.push(item),
            _ => groups.push((item.category, vec![item])),
        }
    }
    groups
}

fn compare_text(a: &Item, b: &Item) -> std::cmp::Ordering {
    a.text.to_lowercase().cmp(&b.text.to_lowercase())
}
