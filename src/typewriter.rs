use crate::constants::TYPEWRITER_ID;
use crate::dom;
use portfolio_core::typewriter::Typewriter;
use portfolio_core::StopHandle;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Cycle the headline phrases in `#typewriter` until the returned handle is stopped.
pub fn init(document: &web::Document) -> Option<StopHandle> {
    let Some(el) = document.get_element_by_id(TYPEWRITER_ID) else {
        log::debug!("[typewriter] no #{}; effect disabled", TYPEWRITER_ID);
        return None;
    };
    let stop = StopHandle::new();
    let stop_task = stop.clone();
    spawn_local(async move {
        let mut tw = Typewriter::default();
        dom::sleep(Typewriter::start_delay()).await;
        while !stop_task.is_stopped() {
            let frame = tw.tick();
            el.set_text_content(Some(&frame.text));
            dom::sleep(frame.delay).await;
        }
        log::debug!("[typewriter] stopped");
    });
    Some(stop)
}
