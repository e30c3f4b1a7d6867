use crate::error::Result;
use crate::events::UiEvent;
use crate::host::{ ColorSchemeSource, PageElement, PreferenceStore };
use crate::utils::Theme;
use crate::views::{ ContactModalController, MenuController, ThemeController };

/// The single object driving the page. A sub-controller is `None` when its
/// required elements were missing at mount; events for it are dropped.
pub struct PageController<E, S, C> {
    theme: Option<ThemeController<E, S>>,
    menu: Option<MenuController<E>>,
    modal: Option<ContactModalController<E>>,
    color_scheme: C,
}

impl<E: PageElement, S: PreferenceStore, C: ColorSchemeSource> PageController<E, S, C> {
    pub fn new(
        theme: Option<ThemeController<E, S>>,
        menu: Option<MenuController<E>>,
        modal: Option<ContactModalController<E>>,
        color_scheme: C
    ) -> Self {
        Self { theme, menu, modal, color_scheme }
    }

    pub fn theme(&self) -> Option<&ThemeController<E, S>> {
        self.theme.as_ref()
    }

    pub fn menu(&self) -> Option<&MenuController<E>> {
        self.menu.as_ref()
    }

    pub fn modal(&self) -> Option<&ContactModalController<E>> {
        self.modal.as_ref()
    }

    pub fn color_scheme(&self) -> &C {
        &self.color_scheme
    }

    pub fn initialize(&mut self) -> Result<Option<Theme>> {
        match self.theme.as_mut() {
            Some(theme) => theme.initialize(&self.color_scheme).map(Some),
            None => Ok(None),
        }
    }

    pub fn handle(&mut self, event: UiEvent) -> Result<()> {
        log::trace!("Handling {:?}", event);
        match event {
            UiEvent::ThemeToggleClicked => {
                if let Some(theme) = self.theme.as_mut() {
                    theme.toggle()?;
                }
            }
            UiEvent::SystemSchemeChanged { prefers_dark } => {
                if let Some(theme) = self.theme.as_mut() {
                    theme.on_system_change(prefers_dark)?;
                }
            }
            UiEvent::MenuButtonClicked => {
                if let Some(menu) = self.menu.as_mut() {
                    menu.toggle()?;
                }
            }
            UiEvent::MenuItemActivated => {
                if let Some(menu) = self.menu.as_mut() {
                    menu.close()?;
                }
            }
            UiEvent::ContactTriggerClicked { trigger } => {
                if let Some(modal) = self.modal.as_mut() {
                    modal.open(Some(trigger))?;
                }
            }
            UiEvent::ModalCloseClicked | UiEvent::BackdropClicked => {
                if let Some(modal) = self.modal.as_mut() {
                    modal.close()?;
                }
            }
            key_event @ UiEvent::KeyDown { .. } => {
                if key_event.is_escape() {
                    self.escape()?;
                }
            }
        }
        Ok(())
    }

    /// Closes whatever is open; both the menu and the modal may close on
    /// the same keypress.
    fn escape(&mut self) -> Result<()> {
        if let Some(menu) = self.menu.as_mut().filter(|m| m.is_open()) {
            menu.close()?;
        }
        if let Some(modal) = self.modal.as_mut().filter(|m| m.is_open()) {
            modal.close()?;
        }
        Ok(())
    }
}
