use std::fs;
use std::path::Path;

use crate::io::store::StoreError;
use crate::model::config::AppConfig;

/// Read config.toml from the store directory. A missing file means all
/// defaults; a file that exists but doesn't parse is an error the user
/// should see rather than silently losing their settings.
pub fn read_config(store_dir: &Path) -> Result<AppConfig, StoreError> {
    let path = store_dir.join("config.toml");
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let text = fs::read_to_string(&path)?;
    let config: AppConfig = toml::from_str(&text)?;
    Ok(config)
}
