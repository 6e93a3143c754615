/// Clock abstraction for time-dependent store behavior
///
/// Creation timestamps and the archive day-boundary both depend on "now".
/// The store takes its clock as a constructor argument so tests can pin or
/// step time instead of relying on the ambient system clock.
use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};

/// Source of the current instant
pub trait Clock: Send + Sync {
    /// Returns the current time in UTC
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Settable clock for tests
///
/// Shared via `Arc`; `set` and `advance` take `&self` so a test can hold one
/// handle while the store holds another.
#[derive(Debug)]
pub struct ManualClock {
    now: RwLock<DateTime<Utc>>,
}

impl ManualClock {
    /// Creates a clock pinned at `start`
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(start),
        }
    }

    /// Pins the clock at `now`
    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.write().expect("clock lock poisoned") = now;
    }

    /// Moves the clock forward (or backward, with a negative delta)
    pub fn advance(&self, delta: Duration) {
        let mut guard = self.now.write().expect("clock lock poisoned");
        *guard += delta;
    }
}

impl Clock for ManualClock {
    fn now_utc(&self) -> DateTime<Utc> {
        *self.now.read().expect("clock lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_system_clock_advances() {
        let clock = SystemClock;
        let first = clock.now_utc();
        let second = clock.now_utc();
        assert!(second >= first);
    }

    #[test]
    fn test_manual_clock_set_and_advance() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let clock = ManualClock::new(start);
        assert_eq!(clock.now_utc(), start);

        clock.advance(Duration::hours(3));
        assert_eq!(clock.now_utc(), start + Duration::hours(3));

        let later = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
        clock.set(later);
        assert_eq!(clock.now_utc(), later);
    }
}
