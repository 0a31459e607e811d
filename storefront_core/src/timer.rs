//! Owned repeating timers.
//!
//! A [`Ticker`] knows how to schedule a repeating callback on some clock (the
//! browser's `setInterval`, or [`ManualTicker`] in tests). [`AutoAdvance`]
//! owns at most one live handle from a ticker: arming always cancels the
//! previous handle first, and dropping the slot cancels whatever is live.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use tracing::debug;

use crate::error::Result;

/// Default auto-advance cadence for the hero carousel.
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(5000);

/// A scheduled repeating callback that can be cancelled exactly once.
pub trait TimerHandle {
    fn cancel(self);
}

/// Something that can schedule repeating callbacks.
pub trait Ticker {
    type Handle: TimerHandle;

    fn start(&self, period: Duration, on_tick: Box<dyn FnMut()>) -> Result<Self::Handle>;
}

/// Slot holding at most one live timer.
pub struct AutoAdvance<T: Ticker> {
    ticker: T,
    period: Duration,
    handle: Option<T::Handle>,
}

impl<T: Ticker> AutoAdvance<T> {
    pub fn new(ticker: T, period: Duration) -> Self {
        Self {
            ticker,
            period,
            handle: None,
        }
    }

    /// Cancel the live timer (if any) and schedule `on_tick` on a fresh one.
    ///
    /// On error the slot is left disarmed.
    pub fn arm(&mut self, on_tick: impl FnMut() + 'static) -> Result<()> {
        self.disarm();
        let handle = self.ticker.start(self.period, Box::new(on_tick))?;
        debug!(period_ms = self.period.as_millis() as u64, "auto-advance armed");
        self.handle = Some(handle);
        Ok(())
    }

    /// Cancel the live timer. Returns whether one was running.
    pub fn disarm(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                handle.cancel();
                debug!("auto-advance disarmed");
                true
            }
            None => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }
}

impl<T: Ticker> Drop for AutoAdvance<T> {
    fn drop(&mut self) {
        self.disarm();
    }
}

impl<T: Ticker> fmt::Debug for AutoAdvance<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoAdvance")
            .field("period", &self.period)
            .field("armed", &self.is_armed())
            .finish()
    }
}

type SharedCallback = Rc<RefCell<Box<dyn FnMut()>>>;

struct ManualTimer {
    id: u64,
    period: Duration,
    due: Duration,
    callback: SharedCallback,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_id: u64,
    timers: Vec<ManualTimer>,
    started: usize,
    cancelled: usize,
}

/// Hand-driven ticker on a virtual clock.
///
/// Time only moves when [`ManualTicker::advance`] is called, which makes
/// cadence and cancellation fully deterministic. Clones share one clock.
#[derive(Clone, Default)]
pub struct ManualTicker {
    clock: Rc<RefCell<ManualClock>>,
}

/// Handle into a [`ManualTicker`].
#[derive(Debug)]
pub struct ManualHandle {
    id: u64,
    clock: std::rc::Weak<RefCell<ManualClock>>,
}

impl TimerHandle for ManualHandle {
    fn cancel(self) {
        if let Some(clock) = self.clock.upgrade() {
            let mut clock = clock.borrow_mut();
            let before = clock.timers.len();
            clock.timers.retain(|t| t.id != self.id);
            if clock.timers.len() != before {
                clock.cancelled += 1;
            }
        }
    }
}

impl Ticker for ManualTicker {
    type Handle = ManualHandle;

    fn start(&self, period: Duration, on_tick: Box<dyn FnMut()>) -> Result<ManualHandle> {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        clock.started += 1;
        let due = clock.now + period;
        clock.timers.push(ManualTimer {
            id,
            period,
            due,
            callback: Rc::new(RefCell::new(on_tick)),
        });
        Ok(ManualHandle {
            id,
            clock: Rc::downgrade(&self.clock),
        })
    }
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward, firing every timer whose deadline passes, in
    /// deadline order. Returns how many callbacks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.clock.borrow().now + by;
        let mut fired = 0;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let due = clock
                    .timers
                    .iter_mut()
                    .filter(|t| t.due <= target)
                    .min_by_key(|t| (t.due, t.id));
                match due {
                    Some(timer) => {
                        let at = timer.due;
                        timer.due += timer.period;
                        let callback = Rc::clone(&timer.callback);
                        clock.now = at;
                        Some(callback)
                    }
                    None => None,
                }
            };
            match next {
                Some(callback) => {
                    (callback.borrow_mut())();
                    fired += 1;
                }
                None => break,
            }
        }
        self.clock.borrow_mut().now = target;
        fired
    }

    /// Virtual time elapsed since the ticker was created.
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Timers currently scheduled.
    pub fn active(&self) -> usize {
        self.clock.borrow().timers.len()
    }

    /// Total timers ever started.
    pub fn started(&self) -> usize {
        self.clock.borrow().started
    }

    /// Total timers cancelled while live.
    pub fn cancelled(&self) -> usize {
        self.clock.borrow().cancelled
    }
}

impl fmt::Debug for ManualTicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clock = self.clock.borrow();
        f.debug_struct("ManualTicker")
            .field("now", &clock.now)
            .field("active", &clock.timers.len())
            .finish()
    }
}
