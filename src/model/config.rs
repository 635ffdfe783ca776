use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml in the store directory.
/// Everything is optional; a missing file means all defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Hex color overrides, e.g. `highlight = "#FB4196"` under [ui.colors]
    #[serde(default)]
    pub colors: HashMap<String, String>,
}
