pub mod mocks;

use crate::configs::PageConfig;
use crate::views::{
    ContactModalController,
    MenuController,
    MenuElements,
    ModalElements,
    PageController,
    ThemeController,
};
use mocks::{ MockColorScheme, MockDocument, MockElement, MockStore };

pub type MockPage = PageController<MockElement, MockStore, MockColorScheme>;

#[allow(dead_code)]
pub fn setup() {
    std::env::set_var("RUST_LOG", "debug");
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The site's markup: a header with the menu, three menu entries (the last
/// one opens the contact form) and a footer contact link.
#[allow(dead_code)]
pub struct Fixture {
    pub doc: MockDocument,
    pub store: MockStore,
    pub theme_toggle: MockElement,
    pub theme_style: MockElement,
    pub header: MockElement,
    pub placeholder: MockElement,
    pub menu_button: MockElement,
    pub menu_icon: MockElement,
    pub side_menu: MockElement,
    pub items: Vec<MockElement>,
    pub modal: MockElement,
    pub body: MockElement,
    pub name_field: MockElement,
    pub footer_link: MockElement,
}

impl Fixture {
    pub fn new(store: MockStore) -> Self {
        setup();
        let doc = MockDocument::new();
        let items = vec![
            doc.element("about-link"),
            doc.element("projects-link"),
            doc.element("open-contact-form")
        ];
        Self {
            theme_toggle: doc.element("theme-toggle"),
            theme_style: doc.element("theme-style"),
            header: doc.element("header"),
            placeholder: doc.element("header-placeholder"),
            menu_button: doc.element("menu-button"),
            menu_icon: doc.element("menu-icon"),
            side_menu: doc.element("side-menu"),
            items,
            modal: doc.element("contact-form-modal"),
            body: doc.element("body"),
            name_field: doc.element("name"),
            footer_link: doc.element("footer-contact-link"),
            store,
            doc,
        }
    }

    pub fn config(&self) -> PageConfig {
        PageConfig::default()
    }

    pub fn theme_controller(&self) -> ThemeController<MockElement, MockStore> {
        let config = self.config();
        ThemeController::new(
            self.theme_toggle.clone(),
            self.theme_style.clone(),
            self.store.clone(),
            config.storage_key,
            config.theme_assets
        )
    }

    pub fn menu_controller(&self) -> MenuController<MockElement> {
        let config = self.config();
        let elements = MenuElements {
            button: self.menu_button.clone(),
            menu: self.side_menu.clone(),
            icon: Some(self.menu_icon.clone()),
            header: Some(self.header.clone()),
            placeholder: Some(self.placeholder.clone()),
            items: self.items.clone(),
        };
        MenuController::new(elements, config.menu_assets, &config.classes).unwrap()
    }

    pub fn modal_controller(&self) -> ContactModalController<MockElement> {
        let elements = ModalElements {
            modal: self.modal.clone(),
            body: self.body.clone(),
            first_field: Some(self.name_field.clone()),
            triggers: vec![self.items[2].clone(), self.footer_link.clone()],
            fallback_focus: Some(self.menu_button.clone()),
        };
        ContactModalController::new(elements, &self.config().classes).unwrap()
    }

    pub fn page(&self, system_dark: bool) -> MockPage {
        PageController::new(
            Some(self.theme_controller()),
            Some(self.menu_controller()),
            Some(self.modal_controller()),
            MockColorScheme { dark: system_dark }
        )
    }
}
