//! Typewriter phrase cycling: type a phrase, hold, delete it, move on.

use std::time::Duration;

pub const PHRASES: &[&str] = &[
    "Senior Software Engineer",
    "Backend Developer",
    "Cloud Enthusiast",
    "Microservices Architect",
    "Problem Solver",
    "Tech Explorer",
];

pub const START_DELAY_MS: u64 = 800;
pub const TYPE_DELAY_MS: u64 = 70;
pub const DELETE_DELAY_MS: u64 = 40;
pub const HOLD_DELAY_MS: u64 = 2000; // full phrase shown
pub const NEXT_PHRASE_DELAY_MS: u64 = 400; // phrase fully erased

/// Text to show after a tick and how long to wait before the next one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypewriterFrame {
    pub text: String,
    pub delay: Duration,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_idx: usize,
    char_idx: usize,
    deleting: bool,
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(PHRASES.iter().map(|s| s.to_string()).collect())
    }
}

impl Typewriter {
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases,
            phrase_idx: 0,
            char_idx: 0,
            deleting: false,
        }
    }

    #[inline]
    pub fn phrase_index(&self) -> usize {
        self.phrase_idx
    }

    #[inline]
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn start_delay() -> Duration {
        Duration::from_millis(START_DELAY_MS)
    }

    /// Type or erase one character. Indices count `char`s, not bytes.
    pub fn tick(&mut self) -> TypewriterFrame {
        let Some(current) = self.phrases.get(self.phrase_idx) else {
            return TypewriterFrame {
                text: String::new(),
                delay: Duration::from_millis(HOLD_DELAY_MS),
            };
        };
        let len = current.chars().count();

        if self.deleting {
            self.char_idx = self.char_idx.saturating_sub(1);
        } else {
            self.char_idx = (self.char_idx + 1).min(len);
        }
        let text: String = current.chars().take(self.char_idx).collect();

        let mut delay_ms = if self.deleting {
            DELETE_DELAY_MS
        } else {
            TYPE_DELAY_MS
        };
        if !self.deleting && self.char_idx == len {
            delay_ms = HOLD_DELAY_MS;
            self.deleting = true;
        } else if self.deleting && self.char_idx == 0 {
            self.deleting = false;
            self.phrase_idx = (self.phrase_idx + 1) % self.phrases.len();
            delay_ms = NEXT_PHRASE_DELAY_MS;
        }

        TypewriterFrame {
            text,
            delay: Duration::from_millis(delay_ms),
        }
    }
}
