//! Timing primitive abstraction used by debouncers.

use std::time::Duration;

/// Abstraction for a host's deferred-execution primitive.
///
/// A scheduler runs a callback once after a delay, unless the returned handle
/// is cancelled first. Implementations must never run the callback
/// synchronously inside `schedule_after`, even for a zero delay.
pub trait Schedule: Send + Sync + 'static {
    /// Handle identifying one scheduled callback.
    type Handle: Send + 'static;

    /// Schedule `callback` to run once after `delay` has elapsed.
    fn schedule_after<F>(&self, delay: Duration, callback: F) -> Self::Handle
    where
        F: FnOnce() + Send + 'static;

    /// Cancel a scheduled callback. Cancelling a handle whose callback already
    /// ran is a no-op.
    fn cancel(&self, handle: Self::Handle);
}
