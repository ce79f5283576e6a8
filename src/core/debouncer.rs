//! Trailing-edge debouncer.
//!
//! A [`Debouncer`] wraps an action so that a burst of calls collapses into a
//! single deferred execution. Every call cancels the pending execution (if
//! any) and schedules a new one carrying that call's arguments; the action
//! runs only once the delay elapses without another call.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use prometheus_debounce::debounce_with_delay;
//!
//! let on_resize = debounce_with_delay(
//!     |(width, height): (u32, u32)| println!("settled at {width}x{height}"),
//!     Duration::from_millis(100),
//! );
//!
//! on_resize((800, 600));
//! on_resize((1024, 768)); // only this one is delivered
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use uuid::Uuid;

use crate::core::Schedule;
#[cfg(feature = "tokio-runtime")]
use crate::runtime::TokioScheduler;

/// Delay used when none is given, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 400;

/// Delay used when none is given.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(DEFAULT_DELAY_MS);

/// The single pending-execution slot of one debouncer.
///
/// `generation` is bumped on every call; a fired callback only runs the
/// action if its generation is still current, so a timer that slipped past
/// cancellation can never deliver superseded arguments.
struct PendingSlot<H> {
    generation: u64,
    handle: Option<H>,
}

/// Wraps an action so repeated calls within `delay` collapse into one.
///
/// Clones share the same pending slot: they are the same wrapper. Separately
/// constructed debouncers are fully independent, even around the same action.
///
/// Dropping a debouncer does not cancel a pending execution; the scheduled
/// callback owns everything it needs to fire.
pub struct Debouncer<F, Args, S>
where
    S: Schedule,
{
    id: Uuid,
    delay: Duration,
    action: Arc<F>,
    scheduler: Arc<S>,
    slot: Arc<Mutex<PendingSlot<S::Handle>>>,
    _args: PhantomData<fn(Args)>,
}

impl<F, Args, S> Debouncer<F, Args, S>
where
    F: Fn(Args) + Send + Sync + 'static,
    Args: Send + 'static,
    S: Schedule,
{
    /// Create a debouncer around `action` firing `delay` after the last call.
    ///
    /// No validation is performed; a zero delay defers to the scheduler's
    /// next tick.
    pub fn new(action: F, delay: Duration, scheduler: S) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(debouncer = %id, delay = ?delay, "debouncer created");
        Self {
            id,
            delay,
            action: Arc::new(action),
            scheduler: Arc::new(scheduler),
            slot: Arc::new(Mutex::new(PendingSlot {
                generation: 0,
                handle: None,
            })),
            _args: PhantomData,
        }
    }

    /// Invoke the wrapper.
    ///
    /// Cancels the pending execution, if any, and schedules `action(args)`
    /// after the configured delay. Returns immediately.
    pub fn call(&self, args: Args) {
        let mut slot = self.slot.lock();
        if let Some(previous) = slot.handle.take() {
            self.scheduler.cancel(previous);
            tracing::trace!(debouncer = %self.id, "pending call superseded");
        }
        slot.generation = slot.generation.wrapping_add(1);

        let generation = slot.generation;
        let id = self.id;
        let action = Arc::clone(&self.action);
        let shared = Arc::clone(&self.slot);
        let handle = self.scheduler.schedule_after(self.delay, move || {
            {
                let mut slot = shared.lock();
                if slot.generation != generation {
                    tracing::trace!(debouncer = %id, "stale timer ignored");
                    return;
                }
                slot.handle = None;
            }
            run_action(id, action.as_ref(), args);
        });
        slot.handle = Some(handle);
        tracing::debug!(debouncer = %self.id, generation, "execution scheduled");
    }

    /// Convert into a plain callable wrapper.
    pub fn into_fn(self) -> impl Fn(Args) + Clone + Send + Sync + 'static {
        move |args| self.call(args)
    }
}

impl<F, Args, S> Debouncer<F, Args, S>
where
    S: Schedule,
{
    /// Quiet period after which the action fires.
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Identifier used in log records for this debouncer.
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Whether an execution is currently scheduled.
    ///
    /// This reflects the debouncer's own bookkeeping: it turns true when a
    /// call hands a callback to the scheduler and false when that callback
    /// fires. A scheduler that drops a callback without running it (such as
    /// [`ThreadScheduler`](crate::runtime::ThreadScheduler) failing to spawn
    /// its timer thread) leaves it true until the next call replaces it.
    pub fn is_pending(&self) -> bool {
        self.slot.lock().handle.is_some()
    }
}

impl<F, Args, S> Clone for Debouncer<F, Args, S>
where
    S: Schedule,
{
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            delay: self.delay,
            action: Arc::clone(&self.action),
            scheduler: Arc::clone(&self.scheduler),
            slot: Arc::clone(&self.slot),
            _args: PhantomData,
        }
    }
}

impl<F, Args, S> fmt::Debug for Debouncer<F, Args, S>
where
    S: Schedule,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("id", &self.id)
            .field("delay", &self.delay)
            .field("pending", &self.is_pending())
            .finish_non_exhaustive()
    }
}

/// Run the action, logging a panic before letting it continue to unwind
/// into the scheduler that fired the callback.
fn run_action<F, Args>(id: Uuid, action: &F, args: Args)
where
    F: Fn(Args),
{
    tracing::debug!(debouncer = %id, "quiet period elapsed, running action");
    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(move || action(args))) {
        tracing::error!(debouncer = %id, "debounced action panicked");
        panic::resume_unwind(payload);
    }
}

/// Debounce `action` with [`DEFAULT_DELAY`] on the current Tokio runtime.
///
/// # Panics
///
/// Panics if called outside the context of a Tokio runtime.
#[cfg(feature = "tokio-runtime")]
pub fn debounce<F, Args>(action: F) -> impl Fn(Args) + Clone + Send + Sync + 'static
where
    F: Fn(Args) + Send + Sync + 'static,
    Args: Send + 'static,
{
    debounce_with_delay(action, DEFAULT_DELAY)
}

/// Debounce `action` with an explicit delay on the current Tokio runtime.
///
/// # Panics
///
/// Panics if called outside the context of a Tokio runtime.
#[cfg(feature = "tokio-runtime")]
pub fn debounce_with_delay<F, Args>(
    action: F,
    delay: Duration,
) -> impl Fn(Args) + Clone + Send + Sync + 'static
where
    F: Fn(Args) + Send + Sync + 'static,
    Args: Send + 'static,
{
    Debouncer::new(action, delay, TokioScheduler::current()).into_fn()
}
