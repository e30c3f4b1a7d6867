/// The theme currently applied to the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Theme::Dark } else { Theme::Light }
    }

    pub fn flipped(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Value written to the preference slot.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// What the user explicitly chose, if anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Dark,
    Light,
    #[default]
    Unset,
}

impl ThemePreference {
    /// Decodes a raw stored value. An empty slot counts as unset and any
    /// other value than `"dark"` selects the light theme.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            None | Some("") => ThemePreference::Unset,
            Some("dark") => ThemePreference::Dark,
            Some(_) => ThemePreference::Light,
        }
    }

    pub fn theme(self) -> Option<Theme> {
        match self {
            ThemePreference::Dark => Some(Theme::Dark),
            ThemePreference::Light => Some(Theme::Light),
            ThemePreference::Unset => None,
        }
    }

    pub fn is_set(self) -> bool {
        self != ThemePreference::Unset
    }
}

impl From<Theme> for ThemePreference {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Dark => ThemePreference::Dark,
            Theme::Light => ThemePreference::Light,
        }
    }
}
