//! Virtual-time wakeup queue.
//!
//! The session never sleeps. Instead it schedules wakeups here and the
//! driver moves the clock forward, either in real time or, in tests, by
//! hand. Cancelling is done with [`Generation`] tokens: a wakeup carries the
//! token that was current when it was scheduled and is discarded on arrival
//! if that token has since been superseded.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

/// Identifies one issue of a [`Generation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token(u64);

/// Monotonic counter handing out cancellation tokens.
///
/// At most one token is live at a time.
#[derive(Debug, Default)]
pub struct Generation {
    current: u64,
    live: bool,
}

impl Generation {
    /// Invalidate any live token and hand out a fresh one.
    pub fn issue(&mut self) -> Token {
        self.current += 1;
        self.live = true;
        Token(self.current)
    }

    /// Invalidate the live token, if any.
    pub fn revoke(&mut self) {
        if self.live {
            self.current += 1;
            self.live = false;
        }
    }

    pub fn is_current(&self, token: Token) -> bool {
        self.live && token.0 == self.current
    }
}

struct Entry<W> {
    due: Duration,
    seq: u64,
    wakeup: W,
}

impl<W> PartialEq for Entry<W> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<W> Eq for Entry<W> {}

impl<W> PartialOrd for Entry<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W> Ord for Entry<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due, self.seq).cmp(&(other.due, other.seq))
    }
}

/// Pending wakeups ordered by due time, then by scheduling order.
pub struct Scheduler<W> {
    now: Duration,
    next_seq: u64,
    queue: BinaryHeap<Reverse<Entry<W>>>,
}

impl<W> Scheduler<W> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            queue: BinaryHeap::new(),
        }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule(&mut self, delay: Duration, wakeup: W) {
        let entry = Entry {
            due: self.now + delay,
            seq: self.next_seq,
            wakeup,
        };
        self.next_seq += 1;
        self.queue.push(Reverse(entry));
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.queue.peek().map(|Reverse(entry)| entry.due)
    }

    /// Pop the earliest wakeup due at or before `until`, moving the clock to
    /// its due time.
    pub fn pop_due(&mut self, until: Duration) -> Option<W> {
        if self.next_due()? > until {
            return None;
        }
        let Reverse(entry) = self.queue.pop()?;
        self.now = self.now.max(entry.due);
        Some(entry.wakeup)
    }

    /// Move the clock forward without firing anything. Never goes backwards.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

impl<W> Default for Scheduler<W> {
    fn default() -> Self {
        Self::new()
    }
}
