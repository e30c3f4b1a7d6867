use crate::configs::{ Classes, MenuAssets };
use crate::error::Result;
use crate::host::PageElement;

/// Elements the side menu controller works on. `header`, `placeholder`
/// and `icon` may be missing from the page; their steps are then skipped.
pub struct MenuElements<E> {
    pub button: E,
    pub menu: E,
    pub icon: Option<E>,
    pub header: Option<E>,
    pub placeholder: Option<E>,
    pub items: Vec<E>,
}

pub struct MenuController<E> {
    elements: MenuElements<E>,
    assets: MenuAssets,
    visible_class: String,
    sticky_class: String,
    visible: bool,
}

impl<E: PageElement> MenuController<E> {
    /// Builds the controller and puts the page into the closed state
    /// without touching focus.
    pub fn new(elements: MenuElements<E>, assets: MenuAssets, classes: &Classes) -> Result<Self> {
        let controller = Self {
            elements,
            assets,
            visible_class: classes.menu_visible.clone(),
            sticky_class: classes.header_sticky.clone(),
            visible: false,
        };
        controller.apply(false)?;
        Ok(controller)
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) -> Result<()> {
        if self.visible { self.close() } else { self.open() }
    }

    pub fn open(&mut self) -> Result<()> {
        self.transition(true)?;
        if let Some(first) = self.elements.items.first() {
            first.focus()?;
        }
        log::debug!("Side menu opened");
        Ok(())
    }

    /// Idempotent: item activation calls this whether or not the menu is
    /// open.
    pub fn close(&mut self) -> Result<()> {
        self.transition(false)?;
        self.elements.button.focus()?;
        log::debug!("Side menu closed");
        Ok(())
    }

    /// `visible` only changes once the page agrees with it. A failed write
    /// puts the page back into the previous state as far as it can.
    fn transition(&mut self, open: bool) -> Result<()> {
        if let Err(e) = self.apply(open) {
            if let Err(rollback) = self.apply(self.visible) {
                log::warn!("Side menu rollback incomplete: {}", rollback);
            }
            return Err(e);
        }
        self.visible = open;
        Ok(())
    }

    /// Menu class, ARIA and tab order go first so a failure on the optional
    /// header elements can't split them.
    fn apply(&self, open: bool) -> Result<()> {
        let els = &self.elements;

        if open {
            els.menu.add_class(&self.visible_class)?;
        } else {
            els.menu.remove_class(&self.visible_class)?;
        }
        els.button.set_attribute("aria-expanded", bool_attr(open))?;
        els.menu.set_attribute("aria-hidden", bool_attr(!open))?;

        let tabindex = if open { "0" } else { "-1" };
        for item in &els.items {
            item.set_attribute("tabindex", tabindex)?;
        }

        if let Some(icon) = &els.icon {
            let src = if open { &self.assets.open_icon } else { &self.assets.closed_icon };
            icon.set_attribute("src", src)?;
        }

        if let Some(header) = &els.header {
            if open {
                header.add_class(&self.sticky_class)?;
            } else {
                header.remove_class(&self.sticky_class)?;
            }
        }
        if let Some(placeholder) = &els.placeholder {
            placeholder.set_display(if open { "block" } else { "none" })?;
        }

        Ok(())
    }
}

pub(crate) fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
