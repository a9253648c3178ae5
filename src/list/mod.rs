//! The checklist state and its mutations.
//!
//! [`ListState`] owns the authoritative item collection. Every mutation is a
//! [`Command`] applied through [`ListState::apply`], a total function from
//! (state, command) to a new state: the collection is replaced wholesale,
//! never edited in place. Commands referencing a missing id are silent
//! no-ops so a stale id from the presentation layer can never crash the
//! process or corrupt the list.

use crate::domain::{Category, Item, Mode};

/// A single user-triggered mutation.
#[derive(Debug, Clone)]
pub enum Command {
    Add {
        text: String,
        category: Option<Category>,
        quantity: Option<i64>,
    },
    Toggle {
        id: u64,
    },
    Delete {
        id: u64,
    },
    Edit {
        id: u64,
        text: String,
        category: Category,
    },
    SetQuantity {
        id: u64,
        quantity: i64,
    },
    ClearPurchased,
    ClearAll {
        scope: Option<Mode>,
    },
}

/// The authoritative item collection plus the id counter.
///
/// Ids are assigned from a per-process counter that only moves forward;
/// deleting an item never frees its id for reuse.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    items: Vec<Item>,
    next_id: u64,
}

impl ListState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuild state from a loaded snapshot, seeding the id counter past the
    /// largest stored id.
    pub fn from_items(items: Vec<Item>) -> Self {
        let next_id = items.iter().map(|i| i.id).max().map_or(1, |max| max + 1);
        Self { items, next_id }
    }

    /// Items in collection order, newest first.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Apply one command, producing the next state.
    pub fn apply(&self, command: &Command) -> ListState {
        match command {
            Command::Add {
                text,
                category,
                quantity,
            } => self.add(text, *category, *quantity),
            Command::Toggle { id } => self.toggle(*id),
            Command::Delete { id } => self.delete(*id),
            Command::Edit { id, text, category } => self.edit(*id, text, *category),
            Command::SetQuantity { id, quantity } => self.set_quantity(*id, *quantity),
            Command::ClearPurchased => self.clear_purchased(),
            Command::ClearAll { scope } => self.clear_all(*scope),
        }
    }

    fn add(&self, text: &str, category: Option<Category>, quantity: Option<i64>) -> ListState {
        let text = text.trim();
        if text.is_empty() {
            return self.clone();
        }

        let item = Item::new(
            self.next_id,
            text,
            category.unwrap_or(Category::Other),
            clamp_quantity(quantity.unwrap_or(1)),
        );

        // New items go to the front of the list.
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.push(item);
        items.extend(self.items.iter().cloned());

        ListState {
            items,
            next_id: self.next_id + 1,
        }
    }

    fn toggle(&self, id: u64) -> ListState {
        self.replace(id, |item| Item {
            purchased: !item.purchased,
            ..item.clone()
        })
    }

    fn delete(&self, id: u64) -> ListState {
        ListState {
            items: self
                .items
                .iter()
                .filter(|item| item.id != id)
                .cloned()
                .collect(),
            next_id: self.next_id,
        }
    }

    fn edit(&self, id: u64, text: &str, category: Category) -> ListState {
        let text = text.trim();
        if text.is_empty() {
            return self.clone();
        }
        self.replace(id, |item| Item {
            text: text.to_string(),
            category,
            ..item.clone()
        })
    }

    fn set_quantity(&self, id: u64, quantity: i64) -> ListState {
        self.replace(id, |item| Item {
            quantity: clamp_quantity(quantity),
            ..item.clone()
        })
    }

    fn clear_purchased(&self) -> ListState {
        ListState {
            items: self
                .items
                .iter()
                .filter(|item| !item.purchased)
                .cloned()
                .collect(),
            next_id: self.next_id,
        }
    }

    fn clear_all(&self, scope: Option<Mode>) -> ListState {
        let items = match scope {
            None => Vec::new(),
            Some(mode) => self
                .items
                .iter()
                .filter(|item| !mode.contains(item.category))
                .cloned()
                .collect(),
        };
        ListState {
            items,
            next_id: self.next_id,
        }
    }

    /// Rebuild the collection with the matching item replaced. No-op when
    /// the id is not present.
    fn replace(&self, id: u64, f: impl Fn(&Item) -> Item) -> ListState {
        ListState {
            items: self
                .items
                .iter()
                .map(|item| if item.id == id { f(item) } else { item.clone() })
                .collect(),
            next_id: self.next_id,
        }
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Quantities are at least 1, never zero or negative.
fn clamp_quantity(quantity: i64) -> u32 {
    quantity.clamp(1, u32::MAX as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(state: &ListState, text: &str, category: Category, quantity: i64) -> ListState {
        state.apply(&Command::Add {
            text: text.into(),
            category: Some(category),
            quantity: Some(quantity),
        })
    }

    #[test]
    fn test_add_prepends_newest_first() {
        let state = ListState::new();
        let state = add(&state, "Milk", Category::Dairy, 1);
        let state = add(&state, "Apples", Category::Produce, 1);

        assert_eq!(state.len(), 2);
        assert_eq!(state.items()[0].text, "Apples");
        assert_eq!(state.items()[1].text, "Milk");
    }

    #[test]
    fn test_add_trims_text() {
        let state = add(&ListState::new(), "  Milk  ", Category::Dairy, 1);
        assert_eq!(state.items()[0].text, "Milk");
    }

    #[test]
    fn test_add_blank_text_is_rejected() {
        let state = ListState::new();
        for text in ["", "   ", "\t\n"] {
            let next = state.apply(&Command::Add {
                text: text.into(),
                category: None,
                quantity: None,
            });
            assert_eq!(next.len(), 0);
        }
    }

    #[test]
    fn test_add_defaults() {
        let state = ListState::new().apply(&Command::Add {
            text: "Bread".into(),
            category: None,
            quantity: None,
        });
        let item = &state.items()[0];
        assert_eq!(item.category, Category::Other);
        assert_eq!(item.quantity, 1);
        assert!(!item.purchased);
    }

    #[test]
    fn test_add_clamps_quantity() {
        let state = add(&ListState::new(), "Milk", Category::Dairy, 0);
        assert_eq!(state.items()[0].quantity, 1);
        let state = add(&ListState::new(), "Milk", Category::Dairy, -4);
        assert_eq!(state.items()[0].quantity, 1);
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let state = ListState::new();
        let state = add(&state, "Milk", Category::Dairy, 1);
        let state = add(&state, "Eggs", Category::Dairy, 1);
        let state = state.apply(&Command::Delete {
            id: state.items()[0].id,
        });
        let state = add(&state, "Butter", Category::Dairy, 1);

        // Deleting never frees an id.
        assert_eq!(state.items()[0].id, 3);
        assert_eq!(state.items()[1].id, 1);
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let state = add(&ListState::new(), "Milk", Category::Dairy, 1);
        let id = state.items()[0].id;

        let once = state.apply(&Command::Toggle { id });
        assert!(once.items()[0].purchased);

        let twice = once.apply(&Command::Toggle { id });
        assert!(!twice.items()[0].purchased);
    }

    #[test]
    fn test_toggle_missing_id_is_a_no_op() {
        let state = add(&ListState::new(), "Milk", Category::Dairy, 1);
        let next = state.apply(&Command::Toggle { id: 999 });
        assert_eq!(next, state);
    }

    #[test]
    fn test_delete_removes_only_the_match() {
        let state = add(&ListState::new(), "Milk", Category::Dairy, 1);
        let state = add(&state, "Apples", Category::Produce, 1);
        let milk_id = state.items()[1].id;

        let next = state.apply(&Command::Delete { id: milk_id });
        assert_eq!(next.len(), 1);
        assert_eq!(next.items()[0].text, "Apples");
    }

    #[test]
    fn test_mutations_after_delete_are_no_ops() {
        let state = add(&ListState::new(), "Milk", Category::Dairy, 1);
        let id = state.items()[0].id;
        let state = state.apply(&Command::Delete { id });
        assert_eq!(state.len(), 0);

        let commands = [
            Command::Toggle { id },
            Command::Delete { id },
            Command::Edit {
                id,
                text: "Cream".into(),
                category: Category::Dairy,
            },
            Command::SetQuantity { id, quantity: 5 },
        ];
        for command in &commands {
            let next = state.apply(command);
            assert_eq!(next.len(), 0);
        }
    }

    #[test]
    fn test_edit_replaces_text_and_category() {
        let state = add(&ListState::new(), "Milk", Category::Other, 1);
        let id = state.items()[0].id;

        let next = state.apply(&Command::Edit {
            id,
            text: "  Whole milk ".into(),
            category: Category::Dairy,
        });
        let item = &next.items()[0];
        assert_eq!(item.text, "Whole milk");
        assert_eq!(item.category, Category::Dairy);
        // Everything else is untouched.
        assert_eq!(item.id, id);
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn test_edit_blank_text_is_a_no_op() {
        let state = add(&ListState::new(), "Milk", Category::Dairy, 1);
        let id = state.items()[0].id;
        let next = state.apply(&Command::Edit {
            id,
            text: "   ".into(),
            category: Category::Produce,
        });
        assert_eq!(next, state);
    }

    #[test]
    fn test_set_quantity_clamps_to_one() {
        let state = add(&ListState::new(), "Milk", Category::Dairy, 2);
        let id = state.items()[0].id;

        for (given, stored) in [(0, 1), (-7, 1), (1, 1), (12, 12)] {
            let next = state.apply(&Command::SetQuantity { id, quantity: given });
            assert_eq!(next.items()[0].quantity, stored);
        }
    }

    #[test]
    fn test_clear_purchased_keeps_needed_items() {
        let state = add(&ListState::new(), "Milk", Category::Dairy, 1);
        let state = add(&state, "Apples", Category::Produce, 1);
        let milk_id = state.items()[1].id;
        let state = state.apply(&Command::Toggle { id: milk_id });

        let next = state.apply(&Command::ClearPurchased);
        assert_eq!(next.len(), 1);
        assert_eq!(next.items()[0].text, "Apples");
    }

    #[test]
    fn test_clear_all_empties_the_collection() {
        let state = add(&ListState::new(), "Milk", Category::Dairy, 1);
        let next = state.apply(&Command::ClearAll { scope: None });
        assert!(next.is_empty());
        // The id counter survives so ids are never reused.
        let readd = add(&next, "Milk", Category::Dairy, 1);
        assert_eq!(readd.items()[0].id, 2);
    }

    #[test]
    fn test_clear_all_scoped_leaves_other_mode_untouched() {
        let state = add(&ListState::new(), "Milk", Category::Dairy, 1);
        let state = add(&state, "Screws", Category::Hardware, 1);
        let state = add(&state, "Paint roller", Category::Paint, 1);

        let next = state.apply(&Command::ClearAll {
            scope: Some(Mode::Home),
        });
        assert_eq!(next.len(), 1);
        assert_eq!(next.items()[0].text, "Milk");
    }

    #[test]
    fn test_from_items_seeds_next_id_past_max() {
        let state = add(&ListState::new(), "Milk", Category::Dairy, 1);
        let state = add(&state, "Eggs", Category::Dairy, 1);
        let restored = ListState::from_items(state.items().to_vec());

        let next = add(&restored, "Butter", Category::Dairy, 1);
        assert_eq!(next.items()[0].id, 3);
    }

    #[test]
    fn test_from_items_empty_starts_at_one() {
        let state = ListState::from_items(Vec::new());
        let next = add(&state, "Milk", Category::Dairy, 1);
        assert_eq!(next.items()[0].id, 1);
    }
}
