use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreshnessState {
    Fresh,
    Stale,
    Offline,
}

impl FreshnessState {
    /// Text of the status badge; fresh data shows none.
    #[must_use]
    pub fn badge(self) -> Option<&'static str> {
        match self {
            Self::Fresh => None,
            Self::Stale => Some("stale"),
            Self::Offline => Some("offline"),
        }
    }
}

/// Failures in a row that mark the source offline regardless of age.
const OFFLINE_FAILURES: u32 = 3;
const STALE_INTERVALS: i32 = 2;
const OFFLINE_INTERVALS: i32 = 6;
const MAX_INTERVAL_MINUTES: u64 = 10_080;

/// Classifies the displayed data relative to the configured refresh
/// interval. One missed refresh makes the data stale, three make it offline.
#[must_use]
pub fn evaluate_freshness(
    last_success: Option<DateTime<Utc>>,
    consecutive_failures: u32,
    refresh_minutes: u64,
) -> FreshnessState {
    let interval = Duration::minutes(
        i64::try_from(refresh_minutes.min(MAX_INTERVAL_MINUTES)).unwrap_or_default(),
    );

    match last_success.map(|ts| Utc::now() - ts) {
        _ if consecutive_failures >= OFFLINE_FAILURES => FreshnessState::Offline,
        Some(age) if age > interval * OFFLINE_INTERVALS => FreshnessState::Offline,
        Some(age) if age > interval * STALE_INTERVALS || consecutive_failures > 0 => {
            FreshnessState::Stale
        }
        Some(_) => FreshnessState::Fresh,
        None => FreshnessState::Stale,
    }
}
