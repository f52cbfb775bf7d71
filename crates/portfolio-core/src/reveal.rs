//! One-shot visibility triggers shared by the reveal and counter effects.
//!
//! Each observed element starts `Pending` and moves to `Fired` on its first
//! intersection. Fired elements never fire again, which is what lets the web
//! layer unobserve them.

use fnv::FnvHashMap;
use std::time::Duration;

pub const REVEAL_SELECTOR: &str = ".reveal";
pub const REVEAL_VISIBLE_CLASS: &str = "visible";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_STAGGER_MS: u64 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OneShot {
    Pending,
    Fired,
}

#[derive(Debug, Default)]
pub struct OneShotRegistry {
    states: FnvHashMap<usize, OneShot>,
}

impl OneShotRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with `count` pending entries keyed `0..count`.
    pub fn with_pending(count: usize) -> Self {
        let mut r = Self::new();
        for key in 0..count {
            r.register(key);
        }
        r
    }

    /// Start tracking `key`. Already-known keys keep their state.
    pub fn register(&mut self, key: usize) {
        self.states.entry(key).or_insert(OneShot::Pending);
    }

    pub fn state(&self, key: usize) -> Option<OneShot> {
        self.states.get(&key).copied()
    }

    /// Transition `key` from `Pending` to `Fired`. Returns true only for that
    /// transition; unknown or already fired keys return false.
    pub fn fire(&mut self, key: usize) -> bool {
        match self.states.get_mut(&key) {
            Some(state @ OneShot::Pending) => {
                *state = OneShot::Fired;
                true
            }
            _ => false,
        }
    }

    pub fn pending(&self) -> usize {
        self.states
            .values()
            .filter(|s| **s == OneShot::Pending)
            .count()
    }
}

/// Grid items reveal one after another: 100 ms per preceding sibling.
#[inline]
pub fn stagger_delay(sibling_index: usize) -> Duration {
    Duration::from_millis(sibling_index as u64 * REVEAL_STAGGER_MS)
}
