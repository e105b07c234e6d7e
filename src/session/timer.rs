//! Per-question countdown.

use serde::Serialize;

use super::scheduler::{Generation, Token};

/// How close the countdown is to running out.
///
/// Only the presenter cares about this; scoring never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Urgency {
    Normal,
    Warning,
    Danger,
}

impl Urgency {
    pub fn from_remaining(remaining: u32) -> Self {
        match remaining {
            11.. => Urgency::Normal,
            6..=10 => Urgency::Warning,
            _ => Urgency::Danger,
        }
    }
}

/// Outcome of a countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick { remaining: u32, urgency: Urgency },
    Expired,
}

/// A single countdown measured in whole ticks.
///
/// The timer does not schedule anything by itself: `start` hands back a
/// token, the owner schedules one tick per unit with that token and feeds
/// them back through [`Timer::on_tick`]. Ticks carrying an old token are
/// ignored, so cancelling or restarting is enough to silence them.
#[derive(Debug, Default)]
pub struct Timer {
    generation: Generation,
    remaining: u32,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, duration: u32) -> Token {
        self.remaining = duration;
        self.generation.issue()
    }

    pub fn cancel(&mut self) {
        self.generation.revoke();
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn urgency(&self) -> Urgency {
        Urgency::from_remaining(self.remaining)
    }

    pub fn on_tick(&mut self, token: Token) -> Option<TimerEvent> {
        if !self.generation.is_current(token) {
            return None;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.generation.revoke();
            return Some(TimerEvent::Expired);
        }

        Some(TimerEvent::Tick {
            remaining: self.remaining,
            urgency: self.urgency(),
        })
    }
}
