use crate::dom;
use portfolio_core::scroll::{fragment_selector, ANCHOR_SELECTOR};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Replace jump navigation on in-page anchors with smooth scrolling.
pub fn init(document: &web::Document) {
    let anchors = dom::query_all_in_document(document, ANCHOR_SELECTOR);
    for anchor in &anchors {
        let doc = document.clone();
        let href_el = anchor.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            let href = href_el.get_attribute("href").unwrap_or_default();
            let Some(selector) = fragment_selector(&href) else {
                return;
            };
            if let Ok(Some(target)) = doc.query_selector(selector) {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                opts.set_block(web::ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        }) as Box<dyn FnMut(_)>);
        _ = anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    log::info!("[scroll] {} anchors smoothed", anchors.len());
}
