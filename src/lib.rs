#![cfg(target_arch = "wasm32")]
use portfolio_core::{PointerTracker, StopHandle};
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;

mod canvas;
mod constants;
mod cursor;
mod dom;
mod events;
mod frame;
mod navbar;
mod particles;
mod reveal;
mod scroll;
mod theme;
mod typewriter;

thread_local! {
    // Stop handles of every perpetual effect started by `init`.
    static RUNNING: RefCell<Vec<StopHandle>> = const { RefCell::new(Vec::new()) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Stop every running animation loop and the typewriter. Listeners stay
/// attached; they only touch state that no longer animates.
#[wasm_bindgen]
pub fn stop_effects() {
    RUNNING.with(|r| {
        for handle in r.borrow_mut().drain(..) {
            handle.stop();
        }
    });
    log::info!("portfolio-web effects stopped");
}

fn keep(handle: Option<StopHandle>) {
    if let Some(h) = handle {
        RUNNING.with(|r| r.borrow_mut().push(h));
    }
}

/// Report a failed effect without taking the others down with it.
fn report<T>(effect: &str, result: anyhow::Result<T>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("[{}] not started: {:?}", effect, e);
            None
        }
    }
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Single writer for the pointer slot shared by the particles and the cursor.
    let pointer = PointerTracker::new();
    events::wire_pointer_tracker(&pointer);

    keep(report("particles", particles::init(&document, pointer.clone())).flatten());
    keep(cursor::init(&document, pointer));
    theme::init(&document);
    navbar::init(&document);
    keep(typewriter::init(&document));
    report("reveal", reveal::init_reveal(&document));
    report("counter", reveal::init_counters(&document));
    scroll::init(&document);

    Ok(())
}
