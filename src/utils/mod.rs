pub mod theme_state;

pub use theme_state::{ Theme, ThemePreference };
