use std::cell::RefCell;
use std::collections::{ BTreeSet, HashMap };
use std::rc::Rc;

use crate::error::{ PresentationError, Result };
use crate::host::{ ColorSchemeSource, PageElement, PreferenceStore };

#[derive(Default)]
struct ElementState {
    attributes: HashMap<String, String>,
    classes: BTreeSet<String>,
    display: Option<String>,
    fail_writes: bool,
}

/// Owns the focus marker shared by every element it creates.
#[derive(Clone, Default)]
pub struct MockDocument {
    focused: Rc<RefCell<Option<String>>>,
}

impl MockDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element(&self, name: &str) -> MockElement {
        MockElement {
            name: name.to_string(),
            state: Rc::new(RefCell::new(ElementState::default())),
            focused: Rc::clone(&self.focused),
        }
    }

    pub fn focused(&self) -> Option<String> {
        self.focused.borrow().clone()
    }

    pub fn blur(&self) {
        self.focused.borrow_mut().take();
    }
}

/// Clones share state, so a test keeps a handle to what the controller owns.
#[derive(Clone)]
pub struct MockElement {
    name: String,
    state: Rc<RefCell<ElementState>>,
    focused: Rc<RefCell<Option<String>>>,
}

#[allow(dead_code)]
impl MockElement {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attr(&self, name: &str) -> Option<String> {
        self.state.borrow().attributes.get(name).cloned()
    }

    pub fn display(&self) -> Option<String> {
        self.state.borrow().display.clone()
    }

    pub fn classes(&self) -> Vec<String> {
        self.state.borrow().classes.iter().cloned().collect()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.contains(class)
    }

    pub fn fail_writes(&self) {
        self.state.borrow_mut().fail_writes = true;
    }

    fn check_writable(&self, op: &str) -> Result<()> {
        if self.state.borrow().fail_writes {
            return Err(PresentationError::Dom(format!("{} failed on {}", op, self.name)));
        }
        Ok(())
    }
}

impl PageElement for MockElement {
    fn set_attribute(&self, name: &str, value: &str) -> Result<()> {
        self.check_writable("setAttribute")?;
        self.state.borrow_mut().attributes.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attr(name)
    }

    fn add_class(&self, class: &str) -> Result<()> {
        self.check_writable("classList.add")?;
        self.state.borrow_mut().classes.insert(class.to_string());
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<()> {
        self.check_writable("classList.remove")?;
        self.state.borrow_mut().classes.remove(class);
        Ok(())
    }

    fn set_display(&self, value: &str) -> Result<()> {
        self.check_writable("style.setProperty")?;
        self.state.borrow_mut().display = Some(value.to_string());
        Ok(())
    }

    fn focus(&self) -> Result<()> {
        *self.focused.borrow_mut() = Some(self.name.clone());
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MockStore {
    values: Rc<RefCell<HashMap<String, String>>>,
    unreadable: bool,
    read_only: bool,
}

#[allow(dead_code)]
impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.values.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    pub fn unreadable() -> Self {
        Self { unreadable: true, ..Self::default() }
    }

    pub fn read_only() -> Self {
        Self { read_only: true, ..Self::default() }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MockStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        if self.unreadable {
            return Err(PresentationError::Storage("access denied".to_string()));
        }
        Ok(self.get(key))
    }

    fn store(&self, key: &str, value: &str) -> Result<()> {
        if self.read_only {
            return Err(PresentationError::Storage("quota exceeded".to_string()));
        }
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub struct MockColorScheme {
    pub dark: bool,
}

impl ColorSchemeSource for MockColorScheme {
    fn prefers_dark(&self) -> bool {
        self.dark
    }
}
