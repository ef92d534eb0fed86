use chrono::Timelike;

use crate::domain::weather::local_datetime;

const DAY_SECS: i64 = 86_400;

/// Sunrise and sunset of the one day the provider reports them for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaylightWindow {
    pub sunrise: i64,
    pub sunset: i64,
}

impl DaylightWindow {
    #[must_use]
    pub fn new(sunrise: i64, sunset: i64) -> Self {
        Self { sunrise, sunset }
    }

    /// True when `timestamp` falls inside today's window or the same window
    /// repeated one or two days later. Daylight drift between days is ignored.
    #[must_use]
    pub fn contains(&self, timestamp: i64) -> bool {
        (0..=2).any(|days| {
            let shifted = timestamp - days * DAY_SECS;
            self.sunrise <= shifted && shifted <= self.sunset
        })
    }

    /// Hour-granular test used by the five-day table: daytime when the
    /// sample's local hour is after the sunrise hour and not after the
    /// sunset hour.
    #[must_use]
    pub fn contains_by_clock(&self, timestamp: i64, utc_offset_secs: i32) -> bool {
        let hour = local_datetime(timestamp, utc_offset_secs).hour();
        let sunrise_hour = local_datetime(self.sunrise, utc_offset_secs).hour();
        let sunset_hour = local_datetime(self.sunset, utc_offset_secs).hour();
        sunrise_hour < hour && hour <= sunset_hour
    }
}
