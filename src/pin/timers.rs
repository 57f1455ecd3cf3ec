//! Deadlines for the field's delayed work.
//!
//! Each cell has at most one pending mask deadline; scheduling again
//! replaces it. Deadlines are fired by the owner polling with the current
//! time, so they always run on the same context as input handling.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// A deadline that has come due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    Mask { index: usize, token: u64 },
    Settle,
}

#[derive(Debug, Clone, Copy)]
struct PendingMask {
    at: Instant,
    token: u64,
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    masks: BTreeMap<usize, PendingMask>,
    settle: Option<Instant>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule_mask(&mut self, index: usize, token: u64, delay: Duration) {
        let at = Instant::now() + delay;
        self.masks.insert(index, PendingMask { at, token });
    }

    pub fn cancel_mask(&mut self, index: usize) {
        self.masks.remove(&index);
    }

    pub fn cancel_masks(&mut self) {
        self.masks.clear();
    }

    pub fn schedule_settle(&mut self, delay: Duration) {
        self.settle = Some(Instant::now() + delay);
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.masks
            .values()
            .map(|pending| pending.at)
            .chain(self.settle)
            .min()
    }

    /// Remove and return every timer due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<Timer> {
        let mut due: Vec<(Instant, Timer)> = Vec::new();

        self.masks.retain(|&index, pending| {
            if pending.at <= now {
                due.push((
                    pending.at,
                    Timer::Mask {
                        index,
                        token: pending.token,
                    },
                ));
                false
            } else {
                true
            }
        });

        if let Some(at) = self.settle {
            if at <= now {
                self.settle = None;
                due.push((at, Timer::Settle));
            }
        }

        due.sort_by_key(|(at, _)| *at);
        due.into_iter().map(|(_, timer)| timer).collect()
    }
}
