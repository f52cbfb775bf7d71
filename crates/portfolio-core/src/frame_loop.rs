//! Cooperative per-frame driver with explicit cancellation.
//!
//! The host calls [`FrameLoop::tick`] once per display refresh and
//! reschedules only while it returns [`LoopState::Running`]. Owners stop the
//! loop through a [`StopHandle`]; finite tasks stop it by returning
//! [`LoopState::Stopped`] from their own frame.

use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Cloneable stop flag checked at the start of every tick.
#[derive(Clone, Debug, Default)]
pub struct StopHandle {
    stopped: Rc<Cell<bool>>,
}

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn stop(&self) {
        self.stopped.set(true);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

/// Work performed once per frame. `dt` is the time since the previous frame.
pub trait FrameTask {
    fn frame(&mut self, dt: Duration) -> LoopState;
}

pub struct FrameLoop<T> {
    task: T,
    stop: StopHandle,
    last_instant: Option<Instant>,
    frames: u64,
}

impl<T: FrameTask> FrameLoop<T> {
    pub fn new(task: T) -> Self {
        Self {
            task,
            stop: StopHandle::new(),
            last_instant: None,
            frames: 0,
        }
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        if self.stop.is_stopped() {
            LoopState::Stopped
        } else {
            LoopState::Running
        }
    }

    /// Number of frames the task has actually run.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn task(&self) -> &T {
        &self.task
    }

    pub fn task_mut(&mut self) -> &mut T {
        &mut self.task
    }

    /// Run one frame at `now` unless the loop has been stopped.
    pub fn tick(&mut self, now: Instant) -> LoopState {
        if self.stop.is_stopped() {
            return LoopState::Stopped;
        }
        let dt = match self.last_instant {
            Some(prev) if now > prev => now - prev,
            Some(_) => Duration::ZERO,
            None => Duration::ZERO,
        };
        self.last_instant = Some(now);
        self.frames += 1;
        if self.task.frame(dt) == LoopState::Stopped {
            self.stop.stop();
        }
        self.state()
    }
}
