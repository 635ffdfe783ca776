use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique key of a todo item. Assigned once at creation, monotonically
/// increasing within a list, never reused while the item lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemKey(pub u64);

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo entry.
///
/// `editing` is display state for the TUI's in-place editor and never
/// round-trips through storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub key: ItemKey,
    pub text: String,
    #[serde(default)]
    pub complete: bool,
    #[serde(skip)]
    pub editing: bool,
}

impl Item {
    /// Create a fresh, incomplete item.
    pub fn new(key: ItemKey, text: String) -> Self {
        Item {
            key,
            text,
            complete: false,
            editing: false,
        }
    }
}
