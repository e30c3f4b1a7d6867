use std::path::Path;

use crate::configs::PageConfig;
use crate::error::Result;

pub const CONFIG_ENV_VAR: &str = "SITE_CONFIG";

/// Loads the page config named by `SITE_CONFIG`, falling back to the
/// built-in defaults when the variable is not set.
pub fn get_page_config() -> Result<PageConfig> {
    match std::env::var(CONFIG_ENV_VAR) {
        Ok(path) => load_page_config(Path::new(&path)),
        Err(_) => {
            log::warn!("{} not set, using default page config", CONFIG_ENV_VAR);
            Ok(PageConfig::default())
        }
    }
}

pub fn load_page_config(path: &Path) -> Result<PageConfig> {
    let raw = std::fs::read_to_string(path)?;
    let config = PageConfig::from_json(&raw)?;
    log::info!("Loaded page config from {}", path.display());
    Ok(config)
}
