use serde::Serialize;

use crate::model::filter::active_count;
use crate::model::item::Item;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ItemJson {
    pub key: u64,
    pub text: String,
    pub complete: bool,
}

#[derive(Serialize)]
pub struct ListJson {
    pub filter: String,
    pub active: usize,
    pub items: Vec<ItemJson>,
}

#[derive(Serialize)]
pub struct CountJson {
    pub active: usize,
    pub completed: usize,
    pub total: usize,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn item_to_json(item: &Item) -> ItemJson {
    ItemJson {
        key: item.key.0,
        text: item.text.clone(),
        complete: item.complete,
    }
}

pub fn count_to_json(items: &[Item]) -> CountJson {
    let active = active_count(items);
    CountJson {
        active,
        completed: items.len() - active,
        total: items.len(),
    }
}

/// One text list row: `  3 [x] buy milk`
pub fn format_item_line(item: &Item) -> String {
    let mark = if item.complete { 'x' } else { ' ' };
    format!("{:>3} [{}] {}", item.key, mark, item.text)
}
