use wasm_bindgen::{ JsCast, JsValue };
use web_sys::{ Element, HtmlElement };

use crate::error::{ PresentationError, Result };
use crate::host::PageElement;

pub(crate) fn dom_error(op: &str, err: JsValue) -> PresentationError {
    PresentationError::Dom(format!("{} failed: {:?}", op, err))
}

impl PageElement for Element {
    fn set_attribute(&self, name: &str, value: &str) -> Result<()> {
        Element::set_attribute(self, name, value).map_err(|e| dom_error("setAttribute", e))
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn add_class(&self, class: &str) -> Result<()> {
        self.class_list().add_1(class).map_err(|e| dom_error("classList.add", e))
    }

    fn remove_class(&self, class: &str) -> Result<()> {
        self.class_list().remove_1(class).map_err(|e| dom_error("classList.remove", e))
    }

    fn set_display(&self, value: &str) -> Result<()> {
        match self.dyn_ref::<HtmlElement>() {
            Some(html) =>
                html
                    .style()
                    .set_property("display", value)
                    .map_err(|e| dom_error("style.setProperty", e)),
            None => {
                log::warn!("Cannot set display on non-HTML element <{}>", self.tag_name());
                Ok(())
            }
        }
    }

    fn focus(&self) -> Result<()> {
        match self.dyn_ref::<HtmlElement>() {
            Some(html) => html.focus().map_err(|e| dom_error("focus", e)),
            None => Ok(()),
        }
    }
}
