//! Recurring timers behind a host-agnostic seam.
//!
//! A [`Scheduler`] registers a callback to fire every `period` and hands back
//! a [`TimerHandle`]. Dropping or cancelling the handle stops the timer, so a
//! timer owned by a view cannot outlive it.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::debug;

use crate::carousel::CarouselState;
use crate::error::ScheduleError;

/// Callback fired on every timer period.
pub type Tick = Box<dyn Fn() + Send + 'static>;

/// Registers recurring callbacks on the host event loop.
pub trait Scheduler: Send + Sync {
    fn every(&self, period: Duration, tick: Tick) -> Result<TimerHandle, ScheduleError>;
}

/// Owned registration of a recurring timer. Cancels on drop.
#[must_use = "dropping the handle cancels the timer"]
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl TimerHandle {
    /// Wrap the host-specific cancellation.
    pub fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Stop the timer now. Idempotent.
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerHandle")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Run `advance` once per `interval` until the returned handle is dropped.
///
/// The component passes a closure over its slide signal; see
/// [`start_autoplay_shared`] for state held in a mutex.
pub fn start_autoplay<F>(
    scheduler: &dyn Scheduler,
    interval: Duration,
    advance: F,
) -> Result<TimerHandle, ScheduleError>
where
    F: Fn() + Send + 'static,
{
    debug!(interval_ms = interval.as_millis() as u64, "starting carousel autoplay");
    scheduler.every(interval, Box::new(advance))
}

/// Convenience for callers holding the state in a mutex.
pub fn start_autoplay_shared(
    scheduler: &dyn Scheduler,
    interval: Duration,
    state: Arc<Mutex<CarouselState>>,
) -> Result<TimerHandle, ScheduleError> {
    start_autoplay(scheduler, interval, move || {
        if let Ok(mut state) = state.lock() {
            state.advance();
            debug!(slide = state.current(), "autoplay advanced");
        }
    })
}

struct ManualTimer {
    id: u64,
    period: Duration,
    due: Duration,
    tick: Arc<Mutex<Tick>>,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_id: u64,
    timers: Vec<ManualTimer>,
}

/// Deterministic scheduler driven by [`ManualScheduler::advance`].
///
/// Timers fire in due order as virtual time passes; used by tests and by
/// anything that wants to step the carousel without a host event loop.
/// Ticks run with the clock unlocked and may register or cancel timers.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Arc<Mutex<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered, uncancelled timers.
    pub fn active_timers(&self) -> usize {
        self.clock.lock().map(|c| c.timers.len()).unwrap_or(0)
    }

    /// Virtual time elapsed so far.
    pub fn now(&self) -> Duration {
        self.clock.lock().map(|c| c.now).unwrap_or_default()
    }

    /// Move virtual time forward, firing every tick that falls due.
    /// Returns the number of ticks fired.
    pub fn advance(&self, by: Duration) -> usize {
        let target = match self.clock.lock() {
            Ok(clock) => clock.now + by,
            Err(_) => return 0,
        };
        let mut fired = 0;
        loop {
            let tick = {
                let Ok(mut clock) = self.clock.lock() else {
                    break;
                };
                let next = clock
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| t.due)
                    .map(|(index, _)| index);
                let Some(index) = next else {
                    clock.now = target;
                    break;
                };
                let timer = &mut clock.timers[index];
                let due = timer.due;
                timer.due += timer.period;
                let tick = Arc::clone(&timer.tick);
                clock.now = due;
                tick
            };
            if let Ok(tick) = tick.lock() {
                (*tick)();
            }
            fired += 1;
        }
        fired
    }
}

impl Scheduler for ManualScheduler {
    fn every(&self, period: Duration, tick: Tick) -> Result<TimerHandle, ScheduleError> {
        if period.is_zero() {
            return Err(ScheduleError("period must be non-zero".into()));
        }
        let mut clock = self
            .clock
            .lock()
            .map_err(|_| ScheduleError("clock poisoned".into()))?;
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + period;
        clock.timers.push(ManualTimer {
            id,
            period,
            due,
            tick: Arc::new(Mutex::new(tick)),
        });

        let shared = Arc::clone(&self.clock);
        Ok(TimerHandle::new(move || {
            if let Ok(mut clock) = shared.lock() {
                clock.timers.retain(|t| t.id != id);
            }
        }))
    }
}
