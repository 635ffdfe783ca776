use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Persisted TUI session state (written to .state.json in the store dir).
///
/// Display state only; the filter never shapes the items payload, which
/// always holds the full sequence.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiState {
    /// Selected filter ("all", "active", "completed")
    #[serde(default)]
    pub filter: String,
    /// Cursor index into the visible list
    #[serde(default)]
    pub cursor: usize,
    /// Scroll offset (first visible row)
    #[serde(default)]
    pub scroll_offset: usize,
    /// Last search pattern
    #[serde(default)]
    pub last_search: Option<String>,
}

/// Read .state.json from the store directory
pub fn read_ui_state(store_dir: &Path) -> Option<UiState> {
    let path = store_dir.join(".state.json");
    let content = fs::read_to_string(&path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write .state.json to the store directory
pub fn write_ui_state(store_dir: &Path, state: &UiState) -> Result<(), std::io::Error> {
    let path = store_dir.join(".state.json");
    let content = serde_json::to_string_pretty(state)?;
    fs::write(&path, content)
}
