use crate::model::item::Item;

/// Which subset of the list is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Label shown in the status row and accepted by `--filter`.
    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    /// Parse a filter name (case-insensitive).
    pub fn parse(s: &str) -> Option<Filter> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Some(Filter::All),
            "active" => Some(Filter::Active),
            "completed" | "done" => Some(Filter::Completed),
            _ => None,
        }
    }

    /// Next filter in display order, wrapping (Tab cycling in the TUI).
    pub fn next(self) -> Filter {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    /// Does this filter admit the given item?
    pub fn admits(self, item: &Item) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !item.complete,
            Filter::Completed => item.complete,
        }
    }
}

/// The visible subset of `items` under `filter`, preserving input order.
/// Pure: no side effects, deterministic for identical inputs.
pub fn filter_items(filter: Filter, items: &[Item]) -> Vec<&Item> {
    items.iter().filter(|item| filter.admits(item)).collect()
}

/// Count of items still to do, always over the full set.
pub fn active_count(items: &[Item]) -> usize {
    filter_items(Filter::Active, items).len()
}

/// True when the list is non-empty and every item is complete.
/// Derived on every read; never cached.
pub fn all_complete(items: &[Item]) -> bool {
    !items.is_empty() && items.iter().all(|item| item.complete)
}
