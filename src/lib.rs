pub mod configs;
pub mod error;
pub mod events;
pub mod host;
pub mod utils;
pub mod views;
#[cfg(target_arch = "wasm32")]
pub mod web;
#[cfg(test)]
mod tests;

pub use crate::configs::{ get_page_config, PageConfig };
pub use crate::error::PresentationError;
pub use crate::events::UiEvent;
pub use crate::utils::*;
pub use crate::views::PageController;
