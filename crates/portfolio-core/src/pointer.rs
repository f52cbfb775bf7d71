//! Last-known pointer position shared between the pointer-move listener
//! (single writer) and the particle frame callback (single reader).

use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;

/// Cloneable handle to the shared pointer slot.
///
/// The page runs on one thread and event callbacks never overlap a frame
/// callback, so a `Cell` is enough. `Vec2` is `Copy`, which keeps reads and
/// writes whole: a reader never observes a half-written pair.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    slot: Rc<Cell<Option<Vec2>>>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the latest absolute pointer coordinates. No smoothing, no bounds check.
    #[inline]
    pub fn record(&self, x: f32, y: f32) {
        self.slot.set(Some(Vec2::new(x, y)));
    }

    /// `None` until the first pointer-move notification.
    #[inline]
    pub fn position(&self) -> Option<Vec2> {
        self.slot.get()
    }
}
