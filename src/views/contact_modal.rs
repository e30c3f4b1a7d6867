use crate::configs::Classes;
use crate::error::Result;
use crate::host::PageElement;
use crate::views::side_menu::bool_attr;

pub struct ModalElements<E> {
    pub modal: E,
    /// The document body; carries the no-scroll class.
    pub body: E,
    pub first_field: Option<E>,
    /// Triggers in the order their indices are reported by events.
    pub triggers: Vec<E>,
    /// Where focus goes when the invoker can't take it back.
    pub fallback_focus: Option<E>,
}

pub struct ContactModalController<E> {
    elements: ModalElements<E>,
    hidden_class: String,
    no_scroll_class: String,
    invoker: Option<usize>,
    visible: bool,
}

impl<E: PageElement> ContactModalController<E> {
    pub fn new(elements: ModalElements<E>, classes: &Classes) -> Result<Self> {
        let controller = Self {
            elements,
            hidden_class: classes.modal_hidden.clone(),
            no_scroll_class: classes.body_no_scroll.clone(),
            invoker: None,
            visible: false,
        };
        controller.apply(false)?;
        Ok(controller)
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn open(&mut self, invoker: Option<usize>) -> Result<()> {
        self.transition(true)?;
        self.invoker = invoker.filter(|&i| i < self.elements.triggers.len());
        if let Some(field) = &self.elements.first_field {
            field.focus()?;
        }
        log::debug!("Contact modal opened (invoker: {:?})", self.invoker);
        Ok(())
    }

    pub fn close(&mut self) -> Result<()> {
        self.transition(false)?;

        let invoker = self.invoker.take().and_then(|i| self.elements.triggers.get(i));
        match invoker {
            Some(trigger) if is_focusable(trigger) => trigger.focus()?,
            _ => {
                if let Some(anchor) = &self.elements.fallback_focus {
                    anchor.focus()?;
                }
            }
        }
        log::debug!("Contact modal closed");
        Ok(())
    }

    fn transition(&mut self, open: bool) -> Result<()> {
        if let Err(e) = self.apply(open) {
            if let Err(rollback) = self.apply(self.visible) {
                log::warn!("Contact modal rollback incomplete: {}", rollback);
            }
            return Err(e);
        }
        self.visible = open;
        Ok(())
    }

    fn apply(&self, open: bool) -> Result<()> {
        let els = &self.elements;
        if open {
            els.modal.remove_class(&self.hidden_class)?;
            els.body.add_class(&self.no_scroll_class)?;
        } else {
            els.modal.add_class(&self.hidden_class)?;
            els.body.remove_class(&self.no_scroll_class)?;
        }
        els.modal.set_attribute("aria-hidden", bool_attr(!open))
    }
}

fn is_focusable<E: PageElement>(element: &E) -> bool {
    element.attribute("tabindex").as_deref() != Some("-1")
}
