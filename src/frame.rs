use instant::Instant;
use portfolio_core::{FrameLoop, FrameTask, LoopState, StopHandle};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Drive `frame_loop` from `requestAnimationFrame`.
///
/// The callback reschedules itself while the loop reports `Running`. Once it
/// reports `Stopped` (task finished or the returned handle was used) the
/// callback releases itself after the current frame returns.
pub fn start_loop<T: FrameTask + 'static>(frame_loop: Rc<RefCell<FrameLoop<T>>>) -> StopHandle {
    let handle = frame_loop.borrow().stop_handle();
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let state = frame_loop.borrow_mut().tick(Instant::now());
        match state {
            LoopState::Running => request_frame(&tick_clone),
            LoopState::Stopped => {
                // Dropping a closure from inside itself is not allowed; defer it.
                let slot = tick_clone.clone();
                spawn_local(async move {
                    slot.borrow_mut().take();
                });
            }
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
    handle
}

fn request_frame(tick: &TickSlot) {
    let slot = tick.borrow();
    if let (Some(w), Some(cb)) = (web::window(), slot.as_ref()) {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }
}
