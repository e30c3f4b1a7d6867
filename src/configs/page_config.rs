use serde::{ Deserialize, Serialize };

use crate::error::{ PresentationError, Result };

pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Everything the controllers need to know about the page markup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub storage_key: String,
    pub selectors: Selectors,
    pub theme_assets: ThemeAssets,
    pub menu_assets: MenuAssets,
    pub classes: Classes,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            selectors: Selectors::default(),
            theme_assets: ThemeAssets::default(),
            menu_assets: MenuAssets::default(),
            classes: Classes::default(),
        }
    }
}

/// CSS selectors for the elements of the DOM contract. `menu_items` is
/// resolved inside the side menu, everything else against the document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub theme_toggle: String,
    pub theme_style: String,
    pub header: String,
    pub header_placeholder: String,
    pub menu_button: String,
    pub menu_icon: String,
    pub side_menu: String,
    pub menu_items: String,
    pub contact_modal: String,
    pub contact_triggers: Vec<String>,
    pub modal_close: String,
    pub first_field: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            theme_toggle: "#theme-toggle".to_string(),
            theme_style: "#theme-style".to_string(),
            header: "header".to_string(),
            header_placeholder: ".header-placeholder".to_string(),
            menu_button: "#menu-button".to_string(),
            menu_icon: "#menu-button img".to_string(),
            side_menu: "#side-menu".to_string(),
            menu_items: "a, button".to_string(),
            contact_modal: "#contact-form-modal".to_string(),
            contact_triggers: vec![
                "#open-contact-form".to_string(),
                "#footer-contact-link".to_string()
            ],
            modal_close: ".close-button".to_string(),
            first_field: "#name".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeAssets {
    pub dark_stylesheet: String,
    pub light_stylesheet: String,
    /// Shown while dark is active: switches to light.
    pub light_mode_icon: String,
    pub light_mode_alt: String,
    /// Shown while light is active: switches to dark.
    pub dark_mode_icon: String,
    pub dark_mode_alt: String,
}

impl Default for ThemeAssets {
    fn default() -> Self {
        Self {
            dark_stylesheet: "css/dark-styles.css".to_string(),
            light_stylesheet: "css/light-styles.css".to_string(),
            light_mode_icon: "assets/light-mode.svg".to_string(),
            light_mode_alt: "Switch to Light Mode".to_string(),
            dark_mode_icon: "assets/dark-mode.svg".to_string(),
            dark_mode_alt: "Switch to Dark Mode".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuAssets {
    pub open_icon: String,
    pub closed_icon: String,
}

impl Default for MenuAssets {
    fn default() -> Self {
        Self {
            open_icon: "assets/open-menu.svg".to_string(),
            closed_icon: "assets/closed-menu.svg".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Classes {
    pub menu_visible: String,
    pub header_sticky: String,
    pub modal_hidden: String,
    pub body_no_scroll: String,
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            menu_visible: "visible".to_string(),
            header_sticky: "sticky".to_string(),
            modal_hidden: "hidden".to_string(),
            body_no_scroll: "no-scroll".to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: PageConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(PresentationError::Config("storage_key is empty".to_string()));
        }

        let s = &self.selectors;
        let named = [
            ("theme_toggle", &s.theme_toggle),
            ("theme_style", &s.theme_style),
            ("header", &s.header),
            ("header_placeholder", &s.header_placeholder),
            ("menu_button", &s.menu_button),
            ("menu_icon", &s.menu_icon),
            ("side_menu", &s.side_menu),
            ("menu_items", &s.menu_items),
            ("contact_modal", &s.contact_modal),
            ("modal_close", &s.modal_close),
            ("first_field", &s.first_field),
            ("menu_visible", &self.classes.menu_visible),
            ("header_sticky", &self.classes.header_sticky),
            ("modal_hidden", &self.classes.modal_hidden),
            ("body_no_scroll", &self.classes.body_no_scroll),
        ];
        if let Some((name, _)) = named.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(PresentationError::Config(format!("{} is empty", name)));
        }

        let classes = [
            ("menu_visible", &self.classes.menu_visible),
            ("header_sticky", &self.classes.header_sticky),
            ("modal_hidden", &self.classes.modal_hidden),
            ("body_no_scroll", &self.classes.body_no_scroll),
        ];
        // classList.add throws on tokens containing whitespace.
        if let Some((name, _)) = classes.iter().find(|(_, value)| value.contains(char::is_whitespace)) {
            return Err(PresentationError::Config(format!("{} contains whitespace", name)));
        }

        if s.contact_triggers.is_empty() {
            return Err(PresentationError::Config("contact_triggers is empty".to_string()));
        }
        if s.contact_triggers.iter().any(|t| t.trim().is_empty()) {
            return Err(PresentationError::Config("contact_triggers has an empty selector".to_string()));
        }

        if self.theme_assets.dark_stylesheet == self.theme_assets.light_stylesheet {
            return Err(
                PresentationError::Config(
                    "dark and light stylesheets must differ".to_string()
                )
            );
        }

        Ok(())
    }
}
