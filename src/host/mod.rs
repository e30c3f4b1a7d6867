//! Seams between the controllers and the page they drive.
//!
//! Controllers never look anything up themselves; they are handed values
//! implementing these traits. The browser binding implements them over
//! web-sys types, tests over in-memory fakes.

use crate::error::Result;

/// One element of the page.
pub trait PageElement {
    fn set_attribute(&self, name: &str, value: &str) -> Result<()>;

    fn attribute(&self, name: &str) -> Option<String>;

    fn add_class(&self, class: &str) -> Result<()>;

    fn remove_class(&self, class: &str) -> Result<()>;

    /// Sets the inline `display` style.
    fn set_display(&self, value: &str) -> Result<()>;

    fn focus(&self) -> Result<()>;
}

/// Single-key string storage that survives a reload.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>>;

    fn store(&self, key: &str, value: &str) -> Result<()>;
}

/// The system-level `prefers-color-scheme` setting.
pub trait ColorSchemeSource {
    fn prefers_dark(&self) -> bool;
}
