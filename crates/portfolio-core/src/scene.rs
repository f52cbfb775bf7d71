use crate::canvas::Canvas2d;
use crate::frame_loop::{FrameTask, LoopState};
use crate::particles::ParticleField;
use crate::pointer::PointerTracker;
use crate::surface::Surface;
use std::time::Duration;

/// The particle background as a frame task: clear the canvas, then step the
/// field with the latest pointer position.
pub struct ParticleScene<C> {
    pub canvas: C,
    pub field: ParticleField,
    pointer: PointerTracker,
}

impl<C: Canvas2d> ParticleScene<C> {
    pub fn new(canvas: C, field: ParticleField, pointer: PointerTracker) -> Self {
        Self {
            canvas,
            field,
            pointer,
        }
    }

    /// Forward a viewport resize to the field.
    pub fn resize(&mut self, surface: Surface) {
        self.field.resize(surface);
    }

    pub fn render(&mut self) {
        let s = self.field.surface();
        self.canvas.clear_rect(0.0, 0.0, s.width_f32(), s.height_f32());
        self.field.step(&mut self.canvas, self.pointer.position());
    }
}

impl<C: Canvas2d> FrameTask for ParticleScene<C> {
    fn frame(&mut self, _dt: Duration) -> LoopState {
        self.render();
        LoopState::Running
    }
}
