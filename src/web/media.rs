use web_sys::{ MediaQueryList, Window };

use crate::host::ColorSchemeSource;

pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

pub struct SystemColorScheme {
    query: Option<MediaQueryList>,
}

impl SystemColorScheme {
    pub fn new(window: &Window) -> Self {
        let query = window.match_media(PREFERS_DARK_QUERY).ok().flatten();
        if query.is_none() {
            log::warn!("matchMedia unsupported, assuming light system theme");
        }
        Self { query }
    }

    pub fn query(&self) -> Option<&MediaQueryList> {
        self.query.as_ref()
    }
}

impl ColorSchemeSource for SystemColorScheme {
    fn prefers_dark(&self) -> bool {
        self.query.as_ref().map_or(false, |mq| mq.matches())
    }
}
