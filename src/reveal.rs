//! Scroll-triggered effects built on `IntersectionObserver`: staggered
//! reveals and count-up stats. Both fire at most once per element.

use crate::dom;
use crate::frame;
use portfolio_core::counter::{CounterAnimation, CounterText, COUNTER_SELECTOR, COUNTER_THRESHOLD};
use portfolio_core::reveal::{
    stagger_delay, OneShotRegistry, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD,
    REVEAL_VISIBLE_CLASS,
};
use portfolio_core::{FrameLoop, FrameTask, LoopState};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Observe `elements` and call `on_fire(index, element)` on each one's first
/// intersection, then stop observing it.
fn observe_once(
    elements: Vec<web::Element>,
    init: &web::IntersectionObserverInit,
    mut on_fire: impl FnMut(usize, &web::Element) + 'static,
) -> anyhow::Result<()> {
    if elements.is_empty() {
        return Ok(());
    }
    let registry = RefCell::new(OneShotRegistry::with_pending(elements.len()));
    let observed = elements.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let Some(index) = observed.iter().position(|el| *el == target) else {
                    continue;
                };
                if registry.borrow_mut().fire(index) {
                    observer.unobserve(&target);
                    on_fire(index, &target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), init)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    for el in &elements {
        observer.observe(el);
    }
    callback.forget();
    Ok(())
}

pub fn init_reveal(document: &web::Document) -> anyhow::Result<()> {
    let elements = dom::query_all_in_document(document, REVEAL_SELECTOR);
    let count = elements.len();
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);
    observe_once(elements, &init, |_, target| {
        let delay = stagger_delay(sibling_index(target));
        let target = target.clone();
        spawn_local(async move {
            dom::sleep(delay).await;
            _ = target.class_list().add_1(REVEAL_VISIBLE_CLASS);
        });
    })?;
    log::info!("[reveal] observing {} elements", count);
    Ok(())
}

/// Position of `target` among the `.reveal` elements under its parent.
fn sibling_index(target: &web::Element) -> usize {
    target
        .parent_element()
        .and_then(|parent| {
            dom::query_all(&parent, REVEAL_SELECTOR)
                .iter()
                .position(|el| el == target)
        })
        .unwrap_or(0)
}

struct CounterTask {
    animation: CounterAnimation,
    el: web::Element,
}

impl FrameTask for CounterTask {
    fn frame(&mut self, _dt: Duration) -> LoopState {
        let frame = self.animation.advance();
        self.el.set_text_content(Some(&frame.text));
        frame.state
    }
}

pub fn init_counters(document: &web::Document) -> anyhow::Result<()> {
    let elements = dom::query_all_in_document(document, COUNTER_SELECTOR);
    let count = elements.len();
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(COUNTER_THRESHOLD));
    observe_once(elements, &init, |_, target| {
        let Some(text) = target.text_content().and_then(|t| CounterText::parse(&t)) else {
            return;
        };
        let task = CounterTask {
            animation: CounterAnimation::new(text),
            el: target.clone(),
        };
        frame::start_loop(Rc::new(RefCell::new(FrameLoop::new(task))));
    })?;
    log::info!("[counter] observing {} stats", count);
    Ok(())
}
