mod contact_modal;
mod page;
mod side_menu;
mod theme_toggle;

pub use contact_modal::{ ContactModalController, ModalElements };
pub use page::PageController;
pub use side_menu::{ MenuController, MenuElements };
pub use theme_toggle::ThemeController;
