use chrono::{DateTime, NaiveDateTime, Utc};

use crate::resilience::freshness::FreshnessState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Condition {
    pub id: u16,
    pub icon: String,
    pub description: String,
}

impl Condition {
    /// Provider icon ids end in `d` or `n`.
    #[must_use]
    pub fn is_day_icon(&self) -> bool {
        !self.icon.ends_with('n')
    }
}

/// One forecast data point in provider-native units (°C, m/s, hPa).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawSample {
    pub timestamp: i64,
    pub temp_c: f32,
    pub feels_like_c: Option<f32>,
    pub wind_speed_ms: f32,
    pub wind_gust_ms: Option<f32>,
    pub wind_deg: f32,
    pub humidity: f32,
    pub pressure_hpa: f32,
    pub cloud_cover: f32,
    pub precip_probability: Option<f32>,
    pub rain_mm: Option<f32>,
    pub condition: Condition,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub observed_at: i64,
    pub sunrise: i64,
    pub sunset: i64,
    pub temp_c: f32,
    pub feels_like_c: f32,
    pub wind_speed_ms: f32,
    pub wind_gust_ms: Option<f32>,
    pub wind_deg: f32,
    pub humidity: f32,
    pub pressure_hpa: f32,
    pub condition: Condition,
}

/// A daily record as summarized by the provider itself.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyOutlook {
    pub timestamp: i64,
    pub temp_min_c: f32,
    pub temp_max_c: f32,
    pub wind_speed_ms: f32,
    pub wind_gust_ms: Option<f32>,
    pub wind_deg: f32,
    pub humidity: f32,
    pub precip_probability: f32,
    pub rain_mm: Option<f32>,
    pub pressure_hpa: f32,
    pub condition: Condition,
}

#[derive(Debug, Clone)]
pub struct ForecastBundle {
    pub location: String,
    pub utc_offset_secs: i32,
    pub current: CurrentConditions,
    pub hourly: Vec<RawSample>,
    pub daily: Vec<DailyOutlook>,
    pub fetched_at: DateTime<Utc>,
}

impl ForecastBundle {
    pub fn local_time(&self, timestamp: i64) -> NaiveDateTime {
        local_datetime(timestamp, self.utc_offset_secs)
    }
}

#[derive(Debug, Clone)]
pub struct FiveDayForecast {
    pub city: String,
    pub utc_offset_secs: i32,
    pub sunrise: i64,
    pub sunset: i64,
    pub samples: Vec<RawSample>,
    pub fetched_at: DateTime<Utc>,
}

/// A geocoding search result.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceMatch {
    pub display_name: String,
    pub locality: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone)]
pub struct RefreshMetadata {
    pub last_success: Option<DateTime<Utc>>,
    pub last_attempt: Option<DateTime<Utc>>,
    pub state: FreshnessState,
    pub consecutive_failures: u32,
}

impl Default for RefreshMetadata {
    fn default() -> Self {
        Self {
            last_success: None,
            last_attempt: None,
            state: FreshnessState::Stale,
            consecutive_failures: 0,
        }
    }
}

impl RefreshMetadata {
    pub fn mark_success(&mut self) {
        let now = Utc::now();
        self.last_attempt = Some(now);
        self.last_success = Some(now);
        self.consecutive_failures = 0;
        self.state = FreshnessState::Fresh;
    }

    pub fn mark_failure(&mut self) {
        self.last_attempt = Some(Utc::now());
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);
    }

    pub fn age_minutes(&self) -> Option<i64> {
        self.last_success.map(|ts| (Utc::now() - ts).num_minutes())
    }
}

/// Wall-clock time at the forecast location.
#[must_use]
pub fn local_datetime(timestamp: i64, utc_offset_secs: i32) -> NaiveDateTime {
    DateTime::from_timestamp(timestamp + i64::from(utc_offset_secs), 0)
        .unwrap_or_default()
        .naive_utc()
}
