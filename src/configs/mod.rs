mod env_validate;
mod page_config;

pub use env_validate::{ get_page_config, load_page_config, CONFIG_ENV_VAR };
pub use page_config::{ Classes, MenuAssets, PageConfig, Selectors, ThemeAssets, DEFAULT_STORAGE_KEY };
