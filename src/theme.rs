use crate::constants::THEME_TOGGLE_ID;
use crate::dom;
use portfolio_core::theme::{
    PreferenceStore, Theme, ThemeController, PREFERS_LIGHT_QUERY, THEME_ATTRIBUTE,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `localStorage`-backed preference store. Storage can be unavailable
/// (privacy modes); reads then return nothing and writes are dropped.
pub struct LocalStore {
    storage: Option<web::Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = web::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("[theme] localStorage unavailable; preference will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(s) = &self.storage {
            if let Err(e) = s.set_item(key, value) {
                log::warn!("[theme] could not store preference: {:?}", e);
            }
        }
    }
}

fn apply(root: &web::Element, theme: Theme) {
    match theme.attribute_value() {
        Some(v) => {
            _ = root.set_attribute(THEME_ATTRIBUTE, v);
        }
        None => {
            _ = root.remove_attribute(THEME_ATTRIBUTE);
        }
    }
}

fn current(root: &web::Element) -> Theme {
    Theme::from_attribute(root.get_attribute(THEME_ATTRIBUTE).as_deref())
}

pub fn init(document: &web::Document) {
    let Some(toggle) = document.get_element_by_id(THEME_TOGGLE_ID) else {
        log::debug!("[theme] no #{}; theme toggle disabled", THEME_TOGGLE_ID);
        return;
    };
    let Some(root) = document.document_element() else {
        return;
    };

    let controller = Rc::new(RefCell::new(ThemeController::new(LocalStore::open())));
    if let Some(theme) = controller.borrow().initial() {
        apply(&root, theme);
    }

    let ctl_click = controller.clone();
    let root_click = root.clone();
    dom::add_listener(&toggle, "click", move || {
        let next = ctl_click.borrow_mut().toggle(current(&root_click));
        apply(&root_click, next);
    });

    wire_system_scheme(controller, root);
    log::info!("[theme] toggle wired");
}

fn wire_system_scheme(controller: Rc<RefCell<ThemeController<LocalStore>>>, root: web::Element) {
    let Some(mql) = web::window().and_then(|w| w.match_media(PREFERS_LIGHT_QUERY).ok().flatten())
    else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::MediaQueryListEvent| {
        if let Some(theme) = controller.borrow().on_system_change(ev.matches()) {
            apply(&root, theme);
        }
    }) as Box<dyn FnMut(_)>);
    _ = mql.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}
