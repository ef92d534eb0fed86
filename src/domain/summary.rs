use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::weather::{Condition, RawSample, local_datetime};

/// Only this many day-groups are surfaced to the five-day view.
pub const MAX_SUMMARY_DAYS: usize = 5;

/// Index of the representative sample in a full day-group. With 3-hourly
/// data starting at local midnight this is the 12:00 slot.
pub const PIVOT_INDEX: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub label: String,
    pub temp_min_c: f32,
    pub temp_max_c: f32,
    pub condition: Condition,
    pub wind_deg: f32,
    pub wind_speed_avg_ms: f32,
    pub wind_gust_max_ms: f32,
    pub rain_total_mm: f32,
    pub precip_probability_max: f32,
    pub pressure_avg_hpa: f32,
    pub sample_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourlyRow {
    pub time: NaiveDateTime,
    pub sample: RawSample,
    pub is_day: bool,
}

impl HourlyRow {
    #[must_use]
    pub fn label(&self) -> String {
        self.time.format("%a %Hh").to_string()
    }
}

/// Splits chronologically ordered samples into runs sharing a local date.
/// A new group starts whenever the date changes from the previous sample.
pub fn day_groups(
    samples: &[RawSample],
    utc_offset_secs: i32,
) -> impl Iterator<Item = &[RawSample]> {
    samples.chunk_by(move |a, b| {
        local_datetime(a.timestamp, utc_offset_secs).date()
            == local_datetime(b.timestamp, utc_offset_secs).date()
    })
}

#[must_use]
pub fn summarize_days(samples: &[RawSample], utc_offset_secs: i32) -> Vec<DailySummary> {
    day_groups(samples, utc_offset_secs)
        .take(MAX_SUMMARY_DAYS)
        .filter_map(|group| summarize_group(group, utc_offset_secs))
        .collect()
}

#[must_use]
pub fn pivot_sample(group: &[RawSample]) -> Option<&RawSample> {
    if group.len() > PIVOT_INDEX {
        group.get(PIVOT_INDEX)
    } else {
        group.last()
    }
}

fn summarize_group(group: &[RawSample], utc_offset_secs: i32) -> Option<DailySummary> {
    let first = group.first()?;
    let pivot = pivot_sample(group)?;
    let date = local_datetime(first.timestamp, utc_offset_secs).date();

    let (temp_min_c, temp_max_c) = group
        .iter()
        .skip(1)
        .fold((first.temp_c, first.temp_c), |(lo, hi), s| {
            (lo.min(s.temp_c), hi.max(s.temp_c))
        });

    Some(DailySummary {
        date,
        label: date.format("%a").to_string(),
        temp_min_c,
        temp_max_c,
        condition: pivot.condition.clone(),
        wind_deg: pivot.wind_deg,
        wind_speed_avg_ms: mean(group.iter().map(|s| s.wind_speed_ms)),
        wind_gust_max_ms: max_reported(group.iter().map(|s| s.wind_gust_ms)),
        rain_total_mm: group.iter().map(|s| s.rain_mm.unwrap_or(0.0)).sum(),
        precip_probability_max: max_reported(group.iter().map(|s| s.precip_probability)),
        pressure_avg_hpa: mean(group.iter().map(|s| s.pressure_hpa)),
        sample_count: group.len(),
    })
}

/// Per-sample display rows with local time and a day/night flag.
pub fn hourly_rows<F>(samples: &[RawSample], utc_offset_secs: i32, is_day: F) -> Vec<HourlyRow>
where
    F: Fn(&RawSample) -> bool,
{
    samples
        .iter()
        .map(|sample| HourlyRow {
            time: local_datetime(sample.timestamp, utc_offset_secs),
            sample: sample.clone(),
            is_day: is_day(sample),
        })
        .collect()
}

fn mean(values: impl Iterator<Item = f32>) -> f32 {
    let (sum, count) = values.fold((0.0_f32, 0_u32), |(sum, n), v| (sum + v, n + 1));
    if count == 0 { 0.0 } else { sum / count as f32 }
}

/// Running max over the values that are present; 0 when none are.
fn max_reported(values: impl Iterator<Item = Option<f32>>) -> f32 {
    values.flatten().reduce(f32::max).unwrap_or(0.0)
}

#[cfg(test)]
mod tests;
