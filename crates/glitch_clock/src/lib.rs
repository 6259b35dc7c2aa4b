//! Coarse wall-clock stopwatch for timed sections of a test run.
//!
//! A [`Stopwatch`] holds two marks, `start` and `end`, and reports the
//! distance between them in milliseconds. Marks are offsets from the origin
//! of a [`TimeSource`], so an unset mark is the zero sentinel rather than an
//! `Option`.
//!
//! # State machine
//!
//! ```text
//! Unset ──begin──► Started ──end──► Stopped ──begin──► Started ...
//!   │                                  ▲
//!   └──────────────end─────────────────┘
//! ```
//!
//! [`Stopwatch::elapsed_ms`] can be read in any state. Its value is only
//! meaningful from `Stopped`:
//!
//! - never begun, never ended: exactly `0.0`
//! - ended but never begun: time since the clock's origin
//! - begun but not ended again: zero or negative
//!
//! This is instrumentation, not a benchmark timer. Precision is whatever the
//! time source provides.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Something a stopwatch can ask for the current time.
///
/// `now` is measured from a fixed origin chosen by the source.
pub trait TimeSource {
    fn now(&self) -> Duration;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    #[inline]
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Monotonic time source with its origin at construction.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        MonotonicClock {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicClock {
    #[inline]
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Time source that only moves when told to.
///
/// Lend it to a stopwatch by reference so the test can keep advancing it.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }

    /// Move forward by `by`, saturating at `Duration::MAX`.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get().saturating_add(by));
    }
}

impl TimeSource for ManualClock {
    #[inline]
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Which marks of a stopwatch have been set most recently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StopwatchState {
    /// Neither `begin` nor `end` has been called.
    #[default]
    Unset,
    /// `begin` was the last call.
    Started,
    /// `end` was the last call.
    Stopped,
}

/// Begin/end stopwatch.
#[derive(Debug)]
pub struct Stopwatch<C: TimeSource = MonotonicClock> {
    clock: C,
    start: Duration,
    end: Duration,
    state: StopwatchState,
}

impl Stopwatch {
    /// Stopwatch backed by a fresh [`MonotonicClock`].
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: TimeSource> Stopwatch<C> {
    pub fn with_clock(clock: C) -> Self {
        Stopwatch {
            clock,
            start: Duration::ZERO,
            end: Duration::ZERO,
            state: StopwatchState::Unset,
        }
    }

    /// Overwrite the start mark with the current time.
    pub fn begin(&mut self) {
        self.start = self.clock.now();
        self.state = StopwatchState::Started;
    }

    /// Overwrite the end mark with the current time.
    pub fn end(&mut self) {
        self.end = self.clock.now();
        self.state = StopwatchState::Stopped;
        tracing::trace!(elapsed_ms = self.elapsed_ms(), "stopwatch stopped");
    }

    /// Milliseconds from the start mark to the end mark.
    ///
    /// Signed: reads taken after a fresh `begin` and before the next `end`
    /// come out negative.
    pub fn elapsed_ms(&self) -> f64 {
        (self.end.as_secs_f64() - self.start.as_secs_f64()) * 1000.0
    }

    pub fn state(&self) -> StopwatchState {
        self.state
    }

    /// Start mark as an offset from the clock's origin.
    pub fn start_mark(&self) -> Duration {
        self.start
    }

    /// End mark as an offset from the clock's origin.
    pub fn end_mark(&self) -> Duration {
        self.end
    }
}
