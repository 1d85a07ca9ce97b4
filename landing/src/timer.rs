//! Browser timers owned by a component.
//!
//! Every timer lives in a [`TimerSlot`] that is released in `on_cleanup`, so
//! no callback ever lands on a disposed view.

use std::time::Duration;

use leptos::prelude::*;
use tracing::{debug, warn};

/// A pending browser timer that can be cancelled.
trait Cancel {
    fn cancel(self);
}

impl Cancel for IntervalHandle {
    fn cancel(self) {
        self.clear();
    }
}

impl Cancel for TimeoutHandle {
    fn cancel(self) {
        self.clear();
    }
}

/// Holds at most one pending timer. Replacing or releasing cancels it.
struct TimerSlot<H: Send + Sync + 'static>(StoredValue<Option<H>>);

impl<H: Send + Sync + 'static> Clone for TimerSlot<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: Send + Sync + 'static> Copy for TimerSlot<H> {}

impl<H: Cancel + Send + Sync + 'static> TimerSlot<H> {
    fn new() -> Self {
        Self(StoredValue::new(None))
    }

    /// Cancel the current timer, if any, and keep `next` instead.
    fn replace(self, next: Option<H>) {
        if let Some(Some(previous)) = self.0.try_update_value(Option::take) {
            previous.cancel();
        }
        self.0.try_set_value(next);
    }

    fn release(self) {
        self.replace(None);
    }
}

/// Call `on_tick` every `period` while `paused` is false.
///
/// The interval is re-armed whenever `paused` changes.
pub fn use_interval<F>(period: Duration, paused: Signal<bool>, on_tick: F)
where
    F: Fn() + Clone + 'static,
{
    let slot = TimerSlot::<IntervalHandle>::new();

    Effect::new(move |_| {
        let next = if paused.get() {
            debug!("interval paused");
            None
        } else {
            match set_interval_with_handle(on_tick.clone(), period) {
                Ok(h) => Some(h),
                Err(err) => {
                    warn!(?err, "could not arm interval");
                    None
                }
            }
        };
        slot.replace(next);
    });

    on_cleanup(move || slot.release());
}

/// A one-shot timer owned by the calling component.
#[derive(Clone, Copy)]
pub struct Timeout(TimerSlot<TimeoutHandle>);

impl Timeout {
    /// Run `f` after `delay`, cancelling a call that is still pending.
    pub fn arm(self, delay: Duration, f: impl FnOnce() + 'static) {
        match set_timeout_with_handle(f, delay) {
            Ok(h) => self.0.replace(Some(h)),
            Err(err) => {
                warn!(?err, "could not arm timeout");
                self.0.release();
            }
        }
    }
}

/// Create a [`Timeout`] that is cleared when the component is torn down.
pub fn use_timeout() -> Timeout {
    let slot = TimerSlot::<TimeoutHandle>::new();
    on_cleanup(move || slot.release());
    Timeout(slot)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use leptos::reactive::owner::Owner;

    use super::*;

    /// Handle that records its id when cancelled.
    struct FakeHandle {
        id: u32,
        cancelled: Arc<Mutex<Vec<u32>>>,
    }

    impl Cancel for FakeHandle {
        fn cancel(self) {
            self.cancelled.lock().unwrap().push(self.id);
        }
    }

    #[test]
    fn replacing_cancels_the_pending_timer() {
        let owner = Owner::new();
        owner.with(|| {
            let cancelled = Arc::new(Mutex::new(Vec::new()));
            let handle = |id| FakeHandle {
                id,
                cancelled: Arc::clone(&cancelled),
            };
            let slot = TimerSlot::new();

            slot.replace(Some(handle(1)));
            assert!(cancelled.lock().unwrap().is_empty());

            slot.replace(Some(handle(2)));
            assert_eq!(*cancelled.lock().unwrap(), vec![1]);

            slot.release();
            assert_eq!(*cancelled.lock().unwrap(), vec![1, 2]);

            slot.release();
            assert_eq!(*cancelled.lock().unwrap(), vec![1, 2]);
        });
    }

    #[test]
    fn cleanup_releases_the_pending_timer() {
        let cancelled = Arc::new(Mutex::new(Vec::new()));
        let owner = Owner::new();
        owner.with(|| {
            let slot = TimerSlot::new();
            slot.replace(Some(FakeHandle {
                id: 7,
                cancelled: Arc::clone(&cancelled),
            }));
            on_cleanup(move || slot.release());
        });
        assert!(cancelled.lock().unwrap().is_empty());

        owner.cleanup();
        assert_eq!(*cancelled.lock().unwrap(), vec![7]);
    }
}
