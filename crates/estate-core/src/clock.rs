use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use time::{Duration, OffsetDateTime};

/// Source of "now" for timestamping records.
pub trait Clock: Send + Sync + fmt::Debug {
    fn now(&self) -> OffsetDateTime;
}

/// Shareable clock handle.
pub type SharedClock = Arc<dyn Clock>;

/// Wall clock in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn shared() -> SharedClock {
        Arc::new(Self)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Manually driven clock for deterministic tests.
///
/// Every call to [`Clock::now`] returns the current instant and then moves
/// the clock forward by `step`. A zero step gives a frozen clock.
#[derive(Debug)]
pub struct ManualClock {
    current: Mutex<OffsetDateTime>,
    step: Duration,
}

impl ManualClock {
    /// A clock frozen at `start`.
    pub fn frozen(start: OffsetDateTime) -> Self {
        Self::stepping(start, Duration::ZERO)
    }

    /// A clock that advances by `step` after each reading.
    pub fn stepping(start: OffsetDateTime, step: Duration) -> Self {
        Self {
            current: Mutex::new(start),
            step,
        }
    }

    /// Moves the clock forward without reading it.
    pub fn advance(&self, by: Duration) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        *current += by;
    }

    /// Returns the instant the next reading will produce.
    pub fn peek(&self) -> OffsetDateTime {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> OffsetDateTime {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        let now = *current;
        *current += self.step;
        now
    }
}
