//! OS-thread scheduler for hosts without an async runtime.
//!
//! Each pending timer parks one thread on a `parking_lot::Condvar` until
//! either its deadline passes or it is cancelled. A debouncer holds at most
//! one pending timer, so a wrapper costs at most one parked thread.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

use crate::core::Schedule;

const DEFAULT_THREAD_NAME: &str = "debounce-timer";

/// Cancellation signal shared between a timer thread and its handle.
#[derive(Debug)]
struct TimerSignal {
    cancelled: Mutex<bool>,
    condvar: Condvar,
}

impl TimerSignal {
    /// Block until `deadline` passes (true) or the timer is cancelled (false).
    /// A `None` deadline waits for cancellation only.
    fn wait_until(&self, deadline: Option<Instant>) -> bool {
        let mut cancelled = self.cancelled.lock();
        while !*cancelled {
            match deadline {
                Some(deadline) => {
                    if Instant::now() >= deadline {
                        return true;
                    }
                    let _ = self.condvar.wait_until(&mut cancelled, deadline);
                }
                None => self.condvar.wait(&mut cancelled),
            }
        }
        false
    }

    fn cancel(&self) {
        *self.cancelled.lock() = true;
        self.condvar.notify_one();
    }
}

/// Handle to a callback scheduled on a [`ThreadScheduler`].
#[derive(Debug)]
pub struct ThreadTimer {
    signal: Arc<TimerSignal>,
}

/// Scheduler that runs each deferred callback on a dedicated OS thread.
///
/// If the timer thread cannot be spawned the failure is logged and the
/// callback is dropped; the returned handle is inert, and a debouncer using
/// it keeps reporting `is_pending()` until its next call.
#[derive(Debug, Clone)]
pub struct ThreadScheduler {
    thread_name: String,
}

impl ThreadScheduler {
    /// Create a scheduler with the default timer thread name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name given to spawned timer threads.
    #[must_use]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    /// Name given to spawned timer threads.
    pub fn thread_name(&self) -> &str {
        &self.thread_name
    }
}

impl Default for ThreadScheduler {
    fn default() -> Self {
        Self {
            thread_name: DEFAULT_THREAD_NAME.to_string(),
        }
    }
}

impl Schedule for ThreadScheduler {
    type Handle = ThreadTimer;

    fn schedule_after<F>(&self, delay: Duration, callback: F) -> Self::Handle
    where
        F: FnOnce() + Send + 'static,
    {
        let signal = Arc::new(TimerSignal {
            cancelled: Mutex::new(false),
            condvar: Condvar::new(),
        });
        let deadline = Instant::now().checked_add(delay);
        let waiter = Arc::clone(&signal);

        let spawned = thread::Builder::new()
            .name(self.thread_name.clone())
            .spawn(move || {
                if waiter.wait_until(deadline) {
                    callback();
                }
            });
        if let Err(e) = spawned {
            tracing::error!("failed to spawn timer thread, callback dropped: {}", e);
        }

        ThreadTimer { signal }
    }

    fn cancel(&self, handle: Self::Handle) {
        handle.signal.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_thread_scheduler_fires() {
        let scheduler = ThreadScheduler::new();
        let (tx, rx) = mpsc::channel();
        let start = Instant::now();

        scheduler.schedule_after(Duration::from_millis(20), move || {
            tx.send(thread::current().name().map(str::to_string)).unwrap();
        });

        let name = rx.recv_timeout(Duration::from_secs(5)).expect("timer fired");
        assert!(start.elapsed() >= Duration::from_millis(20));
        assert_eq!(name.as_deref(), Some(DEFAULT_THREAD_NAME));
    }

    #[test]
    fn test_thread_scheduler_cancel() {
        let scheduler = ThreadScheduler::new().with_thread_name("test-timer");
        let (tx, rx) = mpsc::channel::<()>();

        let handle = scheduler.schedule_after(Duration::from_millis(20), move || {
            tx.send(()).unwrap();
        });
        scheduler.cancel(handle);

        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
        assert_eq!(scheduler.thread_name(), "test-timer");
    }

    #[test]
    fn test_signal_without_deadline_waits_for_cancel() {
        let signal = Arc::new(TimerSignal {
            cancelled: Mutex::new(false),
            condvar: Condvar::new(),
        });
        let waiter = Arc::clone(&signal);
        let join = thread::spawn(move || waiter.wait_until(None));

        thread::sleep(Duration::from_millis(10));
        signal.cancel();
        assert!(!join.join().unwrap());
    }
}
