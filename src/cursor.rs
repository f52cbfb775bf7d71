use crate::constants::{CURSOR_FOLLOWER_ID, CURSOR_ID};
use crate::dom;
use crate::frame;
use portfolio_core::cursor::{follower_style, CursorFollower, INTERACTIVE_SELECTOR};
use portfolio_core::{FrameLoop, FrameTask, LoopState, PointerTracker, StopHandle};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use web_sys as web;

struct CursorTask {
    follower: CursorFollower,
    pointer: PointerTracker,
    dot: web::HtmlElement,
    ring: web::HtmlElement,
}

impl FrameTask for CursorTask {
    fn frame(&mut self, _dt: Duration) -> LoopState {
        if let Some(p) = self.pointer.position() {
            self.follower.set_target(p);
        }
        self.follower.step();
        dom::set_style(&self.dot, "transform", &self.follower.dot_transform());
        dom::set_style(&self.ring, "transform", &self.follower.follower_transform());
        LoopState::Running
    }
}

pub fn init(document: &web::Document, pointer: PointerTracker) -> Option<StopHandle> {
    let (Some(dot), Some(ring)) = (
        dom::html_element_by_id(document, CURSOR_ID),
        dom::html_element_by_id(document, CURSOR_FOLLOWER_ID),
    ) else {
        log::debug!("[cursor] cursor elements missing; custom cursor disabled");
        return None;
    };

    let targets = dom::query_all_in_document(document, INTERACTIVE_SELECTOR);
    for el in &targets {
        let ring_enter = ring.clone();
        dom::add_listener(el, "mouseenter", move || apply_hover(&ring_enter, true));
        let ring_leave = ring.clone();
        dom::add_listener(el, "mouseleave", move || apply_hover(&ring_leave, false));
    }
    log::info!("[cursor] follower wired ({} hover targets)", targets.len());

    let task = CursorTask {
        follower: CursorFollower::new(),
        pointer,
        dot,
        ring,
    };
    Some(frame::start_loop(Rc::new(RefCell::new(FrameLoop::new(task)))))
}

fn apply_hover(ring: &web::HtmlElement, hovering: bool) {
    let style = follower_style(hovering);
    let size = format!("{}px", style.size_px);
    dom::set_style(ring, "width", &size);
    dom::set_style(ring, "height", &size);
    dom::set_style(ring, "border-color", style.border_color);
}
