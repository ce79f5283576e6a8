//! Virtual-clock scheduler.
//!
//! Time only moves when [`ManualScheduler::advance`] is called, which makes
//! debouncing deterministic in tests and lets single-threaded hosts drive
//! timers from their own event loop.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::core::Schedule;

type Callback = Box<dyn FnOnce() + Send + 'static>;

/// Handle to a callback scheduled on a [`ManualScheduler`].
///
/// Orders by deadline, then by scheduling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ManualTimer {
    deadline: Duration,
    seq: u64,
}

impl ManualTimer {
    /// Virtual time at which the callback becomes due.
    pub const fn deadline(&self) -> Duration {
        self.deadline
    }
}

struct Entry {
    scheduled_at: Duration,
    callback: Callback,
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_seq: u64,
    timers: BTreeMap<ManualTimer, Entry>,
}

/// Scheduler driven by an explicit virtual clock. Clones share the clock.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Arc<Mutex<ClockState>>,
}

impl ManualScheduler {
    /// Create a clock at virtual time zero with no timers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.state.lock().now
    }

    /// Number of scheduled callbacks that have not fired or been cancelled.
    pub fn pending(&self) -> usize {
        self.state.lock().timers.len()
    }

    /// Move the clock forward by `by`, firing every callback that becomes due
    /// in deadline order. Returns how many callbacks ran.
    ///
    /// Callbacks run without the clock locked, so they may schedule or cancel
    /// timers. A timer scheduled during this call fires within it only if its
    /// deadline lies strictly after the moment it was scheduled and inside the
    /// advanced window; zero-delay timers wait for the next `advance`/`tick`.
    pub fn advance(&self, by: Duration) -> usize {
        let (target, first_new_seq) = {
            let state = self.state.lock();
            (state.now.saturating_add(by), state.next_seq)
        };
        let mut fired = 0;
        while let Some(callback) = self.pop_due(target, first_new_seq) {
            callback();
            fired += 1;
        }
        let mut state = self.state.lock();
        if state.now < target {
            state.now = target;
        }
        fired
    }

    /// Fire callbacks that are already due without moving the clock.
    pub fn tick(&self) -> usize {
        self.advance(Duration::ZERO)
    }

    fn pop_due(&self, target: Duration, first_new_seq: u64) -> Option<Callback> {
        let mut state = self.state.lock();
        let due = state
            .timers
            .iter()
            .take_while(|(timer, _)| timer.deadline <= target)
            .find(|(timer, entry)| {
                timer.seq < first_new_seq || timer.deadline > entry.scheduled_at
            })
            .map(|(timer, _)| *timer)?;
        if state.now < due.deadline {
            state.now = due.deadline;
        }
        state.timers.remove(&due).map(|entry| entry.callback)
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("ManualScheduler")
            .field("now", &state.now)
            .field("pending", &state.timers.len())
            .finish()
    }
}

impl Schedule for ManualScheduler {
    type Handle = ManualTimer;

    fn schedule_after<F>(&self, delay: Duration, callback: F) -> Self::Handle
    where
        F: FnOnce() + Send + 'static,
    {
        let mut state = self.state.lock();
        let timer = ManualTimer {
            deadline: state.now.saturating_add(delay),
            seq: state.next_seq,
        };
        let entry = Entry {
            scheduled_at: state.now,
            callback: Box::new(callback),
        };
        state.next_seq += 1;
        state.timers.insert(timer, entry);
        timer
    }

    fn cancel(&self, handle: Self::Handle) {
        self.state.lock().timers.remove(&handle);
    }
}
