/// Input the page controller reacts to. The browser binding translates DOM
/// events into these; tests construct them directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    ThemeToggleClicked,
    SystemSchemeChanged {
        prefers_dark: bool,
    },
    MenuButtonClicked,
    MenuItemActivated,
    ContactTriggerClicked {
        trigger: usize,
    },
    ModalCloseClicked,
    /// A click whose target is the modal backdrop itself.
    BackdropClicked,
    KeyDown {
        key: String,
    },
}

pub const ESCAPE_KEY: &str = "Escape";

impl UiEvent {
    pub fn key_down(key: impl Into<String>) -> Self {
        UiEvent::KeyDown { key: key.into() }
    }

    pub fn is_escape(&self) -> bool {
        matches!(self, UiEvent::KeyDown { key } if key == ESCAPE_KEY)
    }
}

/// Only a click landing on the modal element itself (the backdrop) closes
/// it; clicks inside the dialog content target a descendant.
pub fn backdrop_click(target_is_modal: bool) -> Option<UiEvent> {
    target_is_modal.then_some(UiEvent::BackdropClicked)
}

/// Groups of elements that get a click listener, and what a click on the
/// element at `index` within the group means.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickRoute {
    ThemeToggle,
    MenuButton,
    MenuItems,
    ContactTriggers,
    ModalClose,
}

/// Registration order. An element in several groups (the contact trigger
/// inside the side menu) fires its listeners in this order, so the menu
/// closes before the modal opens and takes focus.
pub const CLICK_ROUTES: [ClickRoute; 5] = [
    ClickRoute::ThemeToggle,
    ClickRoute::MenuButton,
    ClickRoute::MenuItems,
    ClickRoute::ContactTriggers,
    ClickRoute::ModalClose,
];

impl ClickRoute {
    pub fn event(self, index: usize) -> UiEvent {
        match self {
            ClickRoute::ThemeToggle => UiEvent::ThemeToggleClicked,
            ClickRoute::MenuButton => UiEvent::MenuButtonClicked,
            ClickRoute::MenuItems => UiEvent::MenuItemActivated,
            ClickRoute::ContactTriggers => UiEvent::ContactTriggerClicked { trigger: index },
            ClickRoute::ModalClose => UiEvent::ModalCloseClicked,
        }
    }
}
