use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ Document, Element, Event, EventTarget, KeyboardEvent, MediaQueryListEvent, Window };

use crate::configs::PageConfig;
use crate::error::Result;
use crate::events::{ backdrop_click, ClickRoute, UiEvent, CLICK_ROUTES };
use crate::web::element::dom_error;
use crate::web::{ contact_triggers, query, query_all, WebPage };

fn dispatch(page: &Rc<RefCell<WebPage>>, event: UiEvent) {
    let Ok(mut page) = page.try_borrow_mut() else {
        log::warn!("Dropped re-entrant {:?}", event);
        return;
    };
    if let Err(e) = page.handle(event) {
        log::error!("Failed to handle event: {}", e);
    }
}

/// Registers `handler` for `kind` on `target` for the lifetime of the page.
fn listen<F>(target: &EventTarget, kind: &str, handler: F) -> Result<()>
    where F: FnMut(Event) + 'static
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref())
        .map_err(|e| dom_error("addEventListener", e))?;
    cb.forget();
    Ok(())
}

fn on_click(target: &EventTarget, page: &Rc<RefCell<WebPage>>, event: UiEvent) -> Result<()> {
    let page = Rc::clone(page);
    listen(target, "click", move |_| dispatch(&page, event.clone()))
}

fn route_targets(route: ClickRoute, document: &Document, config: &PageConfig) -> Vec<Element> {
    let s = &config.selectors;
    match route {
        ClickRoute::ThemeToggle => query(document, &s.theme_toggle).into_iter().collect(),
        ClickRoute::MenuButton => query(document, &s.menu_button).into_iter().collect(),
        ClickRoute::MenuItems =>
            query(document, &s.side_menu)
                .map(|menu| query_all(&menu, &s.menu_items))
                .unwrap_or_default(),
        ClickRoute::ContactTriggers => contact_triggers(document, config),
        ClickRoute::ModalClose => query(document, &s.modal_close).into_iter().collect(),
    }
}

/// Attaches every listener, click groups in `CLICK_ROUTES` order.
pub(super) fn attach(
    window: &Window,
    document: &Document,
    config: &PageConfig,
    page: &Rc<RefCell<WebPage>>
) -> Result<()> {
    for route in CLICK_ROUTES {
        for (index, target) in route_targets(route, document, config).iter().enumerate() {
            on_click(target, page, route.event(index))?;
        }
    }

    let system = page.borrow().color_scheme().query().cloned();
    if let Some(mq) = system {
        let page = Rc::clone(page);
        listen(&mq, "change", move |ev: Event| {
            if let Some(ev) = ev.dyn_ref::<MediaQueryListEvent>() {
                dispatch(&page, UiEvent::SystemSchemeChanged { prefers_dark: ev.matches() });
            }
        })?;
    }

    if let Some(modal) = query(document, &config.selectors.contact_modal) {
        let page = Rc::clone(page);
        listen(window, "click", move |ev: Event| {
            let target_is_modal = ev
                .target()
                .map_or(false, |target| js_sys::Object::is(&target, &modal));
            if let Some(event) = backdrop_click(target_is_modal) {
                dispatch(&page, event);
            }
        })?;
    }

    let page = Rc::clone(page);
    listen(window, "keydown", move |ev: Event| {
        if let Some(ev) = ev.dyn_ref::<KeyboardEvent>() {
            dispatch(&page, UiEvent::key_down(ev.key()));
        }
    })
}
