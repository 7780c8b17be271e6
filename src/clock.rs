//! Wall-clock hour resolution.
//!
//! The time source is an explicit trait so the live feed (and tests) can
//! inject a fake clock instead of depending on real wall-clock timing.

use chrono::Timelike;

/// Source of the current fractional hour of day, in [0, 24).
pub trait Clock: Send + Sync {
    fn fractional_hour(&self) -> f32;
}

/// Reads the observer's local wall clock. No timezone conversion; the sky
/// palette follows whatever time zone the process runs in.
pub struct SystemClock;

impl Clock for SystemClock {
    fn fractional_hour(&self) -> f32 {
        let now = chrono::Local::now();
        now.hour() as f32 + now.minute() as f32 / 60.0 + now.second() as f32 / 3600.0
    }
}

/// Current local fractional hour, e.g. 13.5 for 1:30 PM.
pub fn current_hour() -> f32 {
    SystemClock.fractional_hour()
}
