//! Browser binding: resolves the DOM contract, builds the page controller
//! and wires DOM events to it. Only compiled for `wasm32`.

mod element;
mod listeners;
mod media;
mod storage;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{ Document, Element };

use crate::configs::PageConfig;
use crate::error::{ PresentationError, Result };
use crate::views::{
    ContactModalController,
    MenuController,
    MenuElements,
    ModalElements,
    PageController,
    ThemeController,
};

pub use media::{ SystemColorScheme, PREFERS_DARK_QUERY };
pub use storage::LocalStorage;

pub type WebPage = PageController<Element, LocalStorage, SystemColorScheme>;

pub const CONFIG_ELEMENT_ID: &str = "presentation-config";

/// Reads `<script type="application/json" id="presentation-config">` if the
/// page has one. Any problem with it falls back to the defaults.
pub fn load_config(document: &Document) -> PageConfig {
    let Some(script) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return PageConfig::default();
    };
    let raw = script.text_content().unwrap_or_default();
    match PageConfig::from_json(&raw) {
        Ok(config) => {
            log::info!("Using page config from #{}", CONFIG_ELEMENT_ID);
            config
        }
        Err(e) => {
            log::error!("Invalid page config, using defaults: {}", e);
            PageConfig::default()
        }
    }
}

/// Mounts the controllers on the current document and initializes the theme.
pub fn mount(config: &PageConfig) -> Result<Rc<RefCell<WebPage>>> {
    let window = web_sys::window()
        .ok_or_else(|| PresentationError::MissingElement("window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| PresentationError::MissingElement("document".to_string()))?;

    let theme = build_theme(&document, config, LocalStorage::new(&window));
    let menu = build_menu(&document, config);
    let modal = build_modal(&document, config);

    let mut page = PageController::new(
        theme,
        menu,
        modal,
        SystemColorScheme::new(&window)
    );
    if let Err(e) = page.initialize() {
        log::error!("Failed to initialize theme: {}", e);
    }

    let page = Rc::new(RefCell::new(page));
    listeners::attach(&window, &document, config, &page)?;
    log::info!("Presentation controller mounted");
    Ok(page)
}

fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(e) => {
            log::warn!("Invalid selector {:?}: {:?}", selector, e);
            None
        }
    }
}

fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        log::warn!("Invalid selector {:?}", selector);
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Missing triggers are skipped; the listeners and the modal controller
/// both go through here so trigger indices line up.
fn contact_triggers(document: &Document, config: &PageConfig) -> Vec<Element> {
    config.selectors.contact_triggers
        .iter()
        .filter_map(|selector| query(document, selector))
        .collect()
}

fn required(document: &Document, selector: &str, controller: &str) -> Option<Element> {
    let found = query(document, selector);
    if found.is_none() {
        log::warn!("{} disabled: {} not found", controller, selector);
    }
    found
}

fn build_theme(
    document: &Document,
    config: &PageConfig,
    store: LocalStorage
) -> Option<ThemeController<Element, LocalStorage>> {
    let toggle = required(document, &config.selectors.theme_toggle, "Theme toggle")?;
    let stylesheet = required(document, &config.selectors.theme_style, "Theme toggle")?;
    Some(
        ThemeController::new(
            toggle,
            stylesheet,
            store,
            config.storage_key.clone(),
            config.theme_assets.clone()
        )
    )
}

fn build_menu(document: &Document, config: &PageConfig) -> Option<MenuController<Element>> {
    let s = &config.selectors;
    let button = required(document, &s.menu_button, "Side menu")?;
    let menu = required(document, &s.side_menu, "Side menu")?;
    let items = query_all(&menu, &s.menu_items);

    let elements = MenuElements {
        button,
        icon: query(document, &s.menu_icon),
        header: query(document, &s.header),
        placeholder: query(document, &s.header_placeholder),
        items,
        menu,
    };
    match MenuController::new(elements, config.menu_assets.clone(), &config.classes) {
        Ok(controller) => Some(controller),
        Err(e) => {
            log::error!("Side menu disabled: {}", e);
            None
        }
    }
}

fn build_modal(document: &Document, config: &PageConfig) -> Option<ContactModalController<Element>> {
    let s = &config.selectors;
    let modal = required(document, &s.contact_modal, "Contact modal")?;
    let Some(body) = document.body() else {
        log::warn!("Contact modal disabled: document has no body");
        return None;
    };

    let elements = ModalElements {
        modal,
        body: body.into(),
        first_field: query(document, &s.first_field),
        triggers: contact_triggers(document, config),
        fallback_focus: query(document, &s.menu_button),
    };
    match ContactModalController::new(elements, &config.classes) {
        Ok(controller) => Some(controller),
        Err(e) => {
            log::error!("Contact modal disabled: {}", e);
            None
        }
    }
}
