//! Mutations over the item sequence.
//!
//! Every operation takes the current full sequence and returns a new full
//! sequence; nothing mutates in place. Operations referencing a key that is
//! not present return the input unchanged, since callbacks may fire against
//! an item that was just removed. The CLI layer checks key existence itself
//! when it wants to report a typo.

use crate::model::filter::{Filter, filter_items};
use crate::model::item::{Item, ItemKey};

/// Error type for item lookups at the command boundary.
#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("no item with key {0}")]
    NotFound(ItemKey),
}

/// Next free key: one past the largest key in use.
/// Monotonic for a given list since keys are never reassigned.
pub fn next_key(items: &[Item]) -> ItemKey {
    let max = items.iter().map(|item| item.key.0).max().unwrap_or(0);
    ItemKey(max + 1)
}

/// Append a new incomplete item. Whitespace-only text is a no-op.
pub fn add_item(items: &[Item], text: &str) -> Vec<Item> {
    let text = text.trim();
    if text.is_empty() {
        return items.to_vec();
    }
    let mut out = items.to_vec();
    out.push(Item::new(next_key(items), text.to_string()));
    out
}

/// Replace the text of the item with `key`; everything else untouched.
pub fn update_text(items: &[Item], key: ItemKey, text: &str) -> Vec<Item> {
    replace_by_key(items, key, |item| item.text = text.to_string())
}

/// Set the transient editing flag on the item with `key`.
pub fn toggle_editing(items: &[Item], key: ItemKey, editing: bool) -> Vec<Item> {
    replace_by_key(items, key, |item| item.editing = editing)
}

/// Set the completion flag on the item with `key`.
pub fn toggle_complete(items: &[Item], key: ItemKey, complete: bool) -> Vec<Item> {
    replace_by_key(items, key, |item| item.complete = complete)
}

/// Set the completion flag on every item.
pub fn toggle_all_complete(items: &[Item], target: bool) -> Vec<Item> {
    items
        .iter()
        .map(|item| {
            let mut item = item.clone();
            item.complete = target;
            item
        })
        .collect()
}

/// Drop the item with `key`, if present.
pub fn remove_item(items: &[Item], key: ItemKey) -> Vec<Item> {
    items
        .iter()
        .filter(|item| item.key != key)
        .cloned()
        .collect()
}

/// Keep only the items still to do (the subset the Active filter shows).
pub fn clear_completed(items: &[Item]) -> Vec<Item> {
    filter_items(Filter::Active, items)
        .into_iter()
        .cloned()
        .collect()
}

/// Does the sequence contain an item with `key`?
pub fn contains_key(items: &[Item], key: ItemKey) -> bool {
    items.iter().any(|item| item.key == key)
}

fn replace_by_key(items: &[Item], key: ItemKey, edit: impl Fn(&mut Item)) -> Vec<Item> {
    items
        .iter()
        .map(|item| {
            if item.key != key {
                return item.clone();
            }
            let mut item = item.clone();
            edit(&mut item);
            item
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Item> {
        let items = add_item(&[], "buy milk");
        let items = add_item(&items, "call mom");
        add_item(&items, "water plants")
    }

    #[test]
    fn add_assigns_fresh_keys_and_incomplete_state() {
        let items = sample();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].key, ItemKey(1));
        assert_eq!(items[2].key, ItemKey(3));
        assert!(items.iter().all(|i| !i.complete));
    }

    #[test]
    fn add_empty_text_is_a_no_op() {
        let items = sample();
        assert_eq!(add_item(&items, ""), items);
        assert_eq!(add_item(&items, "   \t "), items);
    }

    #[test]
    fn add_trims_surrounding_whitespace() {
        let items = add_item(&[], "  buy milk  ");
        assert_eq!(items[0].text, "buy milk");
    }

    #[test]
    fn keys_stay_unique_after_removal() {
        // Removing the max-key item and adding again may reuse its key;
        // uniqueness within the live list is what matters.
        let items = sample();
        let items = remove_item(&items, ItemKey(2));
        let items = add_item(&items, "new");
        let mut keys: Vec<u64> = items.iter().map(|i| i.key.0).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), items.len());
    }

    #[test]
    fn update_text_touches_only_the_target() {
        let items = sample();
        let updated = update_text(&items, ItemKey(2), "call dad");

        assert_eq!(updated[1].text, "call dad");
        assert_eq!(updated[1].key, ItemKey(2));
        assert_eq!(updated[0], items[0]);
        assert_eq!(updated[2], items[2]);
    }

    #[test]
    fn toggle_complete_touches_only_the_target() {
        let items = sample();
        let updated = toggle_complete(&items, ItemKey(1), true);

        assert!(updated[0].complete);
        assert_eq!(updated[0].text, items[0].text);
        assert_eq!(&updated[1..], &items[1..]);
    }

    #[test]
    fn toggle_editing_touches_only_the_flag() {
        let items = sample();
        let updated = toggle_editing(&items, ItemKey(3), true);

        assert!(updated[2].editing);
        assert_eq!(updated[2].text, items[2].text);
        assert!(!updated[0].editing);
        assert!(!updated[1].editing);

        let reverted = toggle_editing(&updated, ItemKey(3), false);
        assert_eq!(reverted, items);
    }

    #[test]
    fn mutations_on_unknown_keys_are_no_ops() {
        let items = sample();
        assert_eq!(update_text(&items, ItemKey(99), "x"), items);
        assert_eq!(toggle_complete(&items, ItemKey(99), true), items);
        assert_eq!(toggle_editing(&items, ItemKey(99), true), items);
        assert_eq!(remove_item(&items, ItemKey(99)), items);
    }

    #[test]
    fn remove_drops_exactly_one() {
        let items = sample();
        let removed = remove_item(&items, ItemKey(2));
        assert_eq!(removed.len(), 2);
        assert!(!contains_key(&removed, ItemKey(2)));
        assert_eq!(removed[0].key, ItemKey(1));
        assert_eq!(removed[1].key, ItemKey(3));
    }

    #[test]
    fn toggle_all_and_clear_completed() {
        let items = sample();
        let items = toggle_complete(&items, ItemKey(2), true);

        let all_done = toggle_all_complete(&items, true);
        assert!(all_done.iter().all(|i| i.complete));

        let cleared = clear_completed(&items);
        assert_eq!(cleared.len(), 2);
        assert!(cleared.iter().all(|i| !i.complete));
        assert_eq!(cleared[0].key, ItemKey(1));
        assert_eq!(cleared[1].key, ItemKey(3));
    }

    #[test]
    fn add_then_complete_scenario() {
        use crate::model::filter::{Filter, filter_items};

        let items = add_item(&[], "buy milk");
        assert_eq!(items.len(), 1);
        let key = items[0].key;
        assert!(!items[0].complete);

        let items = toggle_complete(&items, key, true);
        assert!(items[0].complete);
        assert!(filter_items(Filter::Active, &items).is_empty());
        assert_eq!(filter_items(Filter::Completed, &items).len(), 1);
    }
}
