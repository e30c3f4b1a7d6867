use crate::configs::ThemeAssets;
use crate::error::Result;
use crate::host::{ ColorSchemeSource, PageElement, PreferenceStore };
use crate::utils::{ Theme, ThemePreference };

/// Swaps the theme stylesheet and the toggle icon, and owns the stored
/// preference.
pub struct ThemeController<E, S> {
    toggle: E,
    stylesheet: E,
    store: S,
    storage_key: String,
    assets: ThemeAssets,
    active: Theme,
    preference: ThemePreference,
}

impl<E: PageElement, S: PreferenceStore> ThemeController<E, S> {
    pub fn new(toggle: E, stylesheet: E, store: S, storage_key: String, assets: ThemeAssets) -> Self {
        Self {
            toggle,
            stylesheet,
            store,
            storage_key,
            assets,
            active: Theme::default(),
            preference: ThemePreference::Unset,
        }
    }

    pub fn active(&self) -> Theme {
        self.active
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn set_theme(&mut self, theme: Theme, persist: bool) -> Result<()> {
        let (href, icon, alt) = match theme {
            Theme::Dark =>
                (
                    &self.assets.dark_stylesheet,
                    &self.assets.light_mode_icon,
                    &self.assets.light_mode_alt,
                ),
            Theme::Light =>
                (
                    &self.assets.light_stylesheet,
                    &self.assets.dark_mode_icon,
                    &self.assets.dark_mode_alt,
                ),
        };

        self.stylesheet.set_attribute("href", href)?;
        self.toggle.set_attribute("src", icon)?;
        self.toggle.set_attribute("alt", alt)?;
        self.active = theme;
        log::debug!("Applied {} theme", theme.as_str());

        if persist {
            // The choice holds for this page even if the write below fails.
            self.preference = theme.into();
            self.store.store(&self.storage_key, theme.as_str())?;
        }

        Ok(())
    }

    /// Applies the stored preference, or the system setting when none is
    /// stored. Returns the theme that was applied.
    pub fn initialize<C: ColorSchemeSource>(&mut self, system: &C) -> Result<Theme> {
        let stored = match self.store.load(&self.storage_key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Failed to read theme preference, treating as unset: {}", e);
                None
            }
        };
        self.preference = ThemePreference::from_stored(stored.as_deref());

        let theme = match self.preference.theme() {
            Some(theme) => theme,
            None => Theme::from_dark(system.prefers_dark()),
        };
        log::info!("Initial theme: {} (preference: {:?})", theme.as_str(), self.preference);

        self.set_theme(theme, false)?;
        Ok(theme)
    }

    /// Follows the system setting until the user has picked a theme.
    pub fn on_system_change(&mut self, prefers_dark: bool) -> Result<()> {
        if self.preference.is_set() {
            log::debug!("Ignoring system color scheme change, preference is stored");
            return Ok(());
        }
        self.set_theme(Theme::from_dark(prefers_dark), false)
    }

    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.active.flipped();
        self.set_theme(next, true)?;
        Ok(next)
    }
}
