//! One-shot entrance animation state
//!
//! A section starts hidden and becomes visible once, a fixed delay after
//! mount. It never reverts. Unmounting before the delay elapses cancels the
//! pending transition.

use serde::Serialize;
use std::time::{Duration, Instant};

/// Entrance visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    /// Transition classes for a block with the given stagger class
    pub fn classes(&self, base: &str) -> String {
        let state = match self {
            RevealState::Hidden => "opacity-0 translate-y-4",
            RevealState::Visible => "opacity-100 translate-y-0",
        };
        format!("{} transition-all duration-700 {}", base, state)
    }
}

/// Timer-driven reveal
#[derive(Debug, Clone)]
pub struct Reveal {
    state: RevealState,
    deadline: Option<Instant>,
    delay: Duration,
}

impl Default for Reveal {
    fn default() -> Self {
        Self::with_delay(Self::DEFAULT_DELAY)
    }
}

impl Reveal {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            state: RevealState::Hidden,
            deadline: None,
            delay,
        }
    }

    /// Already visible, for static output
    pub fn visible() -> Self {
        Self {
            state: RevealState::Visible,
            deadline: None,
            delay: Duration::ZERO,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Arm the timer. No effect when already armed or visible.
    pub fn mount(&mut self, now: Instant) {
        if self.state == RevealState::Hidden && self.deadline.is_none() {
            self.deadline = Some(now + self.delay);
        }
    }

    /// Fire if the delay has elapsed. Returns true only on the transition.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.state = RevealState::Visible;
                true
            }
            _ => false,
        }
    }

    /// Cancel a pending transition
    pub fn unmount(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}
