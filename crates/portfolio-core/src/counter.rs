//! Count-up animation for the numeric stats.

use crate::frame_loop::LoopState;

pub const COUNTER_SELECTOR: &str = ".detail-info h4";
pub const COUNTER_THRESHOLD: f64 = 0.5;
pub const COUNTER_DURATION_MS: f64 = 1500.0;
pub const COUNTER_FRAME_MS: f64 = 16.0; // nominal frame length used to size each increment

/// A label split around its first run of ASCII digits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterText {
    pub prefix: String,
    pub end: u64,
    pub suffix: String,
}

impl CounterText {
    /// `None` when the text holds no digits (or the number does not fit).
    pub fn parse(text: &str) -> Option<Self> {
        let start = text.find(|c: char| c.is_ascii_digit())?;
        let len = text[start..]
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(text.len() - start);
        let end = text[start..start + len].parse().ok()?;
        Some(Self {
            prefix: text[..start].to_string(),
            end,
            suffix: text[start + len..].to_string(),
        })
    }

    pub fn render(&self, value: u64) -> String {
        format!("{}{}{}", self.prefix, value, self.suffix)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub state: LoopState,
}

#[derive(Clone, Debug)]
pub struct CounterAnimation {
    text: CounterText,
    current: f64,
    step: f64,
}

impl CounterAnimation {
    pub fn new(text: CounterText) -> Self {
        let step = text.end as f64 / (COUNTER_DURATION_MS / COUNTER_FRAME_MS);
        Self {
            text,
            current: 0.0,
            step,
        }
    }

    /// Advance one frame. The final frame shows the exact target and stops.
    pub fn advance(&mut self) -> CounterFrame {
        self.current += self.step;
        if self.current >= self.text.end as f64 {
            CounterFrame {
                text: self.text.render(self.text.end),
                state: LoopState::Stopped,
            }
        } else {
            CounterFrame {
                text: self.text.render(self.current.floor() as u64),
                state: LoopState::Running,
            }
        }
    }
}
