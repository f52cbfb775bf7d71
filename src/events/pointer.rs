use portfolio_core::PointerTracker;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Record every `mousemove` on the window into `tracker` (viewport coordinates).
///
/// This is the only writer of the shared pointer slot; the particle and
/// cursor frame tasks only read it.
pub fn wire_pointer_tracker(tracker: &PointerTracker) {
    let tracker = tracker.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        tracker.record(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
