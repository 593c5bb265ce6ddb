// tests/support/mocks/time.rs
use std::sync::Mutex;

use chrono::{DateTime, Duration, TimeZone, Utc};
use quillpress_core::application::ports::time::Clock;

/// Deterministic base timestamp for fixtures.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// Advances by `step` on every reading, starting at `fixed_now()` unless
/// told otherwise.
pub struct SteppingClock {
    current: Mutex<DateTime<Utc>>,
    step: Duration,
}

impl SteppingClock {
    pub fn new(step: Duration) -> Self {
        Self::starting_at(fixed_now(), step)
    }

    pub fn starting_at(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            current: Mutex::new(start),
            step,
        }
    }

    /// Current reading without advancing.
    pub fn peek(&self) -> DateTime<Utc> {
        *self.current.lock().unwrap()
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self::new(Duration::seconds(1))
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut current = self.current.lock().unwrap();
        *current += self.step;
        *current
    }
}
