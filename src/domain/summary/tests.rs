use super::*;

// 2026-02-12 00:00 UTC, a Thursday.
const DAY_START: i64 = 1_770_854_400;
const THREE_HOURS: i64 = 10_800;

fn sample(timestamp: i64, temp_c: f32) -> RawSample {
    RawSample {
        timestamp,
        temp_c,
        wind_speed_ms: 4.0,
        wind_deg: 180.0,
        humidity: 70.0,
        pressure_hpa: 1010.0,
        cloud_cover: 40.0,
        condition: Condition {
            id: 803,
            icon: "04d".to_string(),
            description: "broken clouds".to_string(),
        },
        ..RawSample::default()
    }
}

fn three_hourly(start: i64, count: usize) -> Vec<RawSample> {
    (0..count)
        .map(|idx| {
            let idx = i64::try_from(idx).unwrap_or(0);
            sample(start + idx * THREE_HOURS, 5.0)
        })
        .collect()
}

#[test]
fn forty_samples_from_midnight_make_five_full_days() {
    let samples = three_hourly(DAY_START, 40);
    let summaries = summarize_days(&samples, 0);

    assert_eq!(summaries.len(), 5);
    assert!(summaries.iter().all(|s| s.sample_count == 8));
    assert_eq!(summaries[0].label, "Thu");
    assert_eq!(summaries[4].label, "Mon");
}

#[test]
fn partial_first_day_starts_its_own_group() {
    let samples = three_hourly(DAY_START + 15 * 3_600, 40);
    let summaries = summarize_days(&samples, 0);

    assert_eq!(summaries.len(), MAX_SUMMARY_DAYS);
    assert_eq!(summaries[0].sample_count, 3);
    assert_eq!(summaries[1].sample_count, 8);
}

#[test]
fn grouping_uses_location_offset_not_utc_date() {
    // 22:00 and 23:00 UTC on the 12th are already the 13th at UTC+3.
    let samples = vec![
        sample(DAY_START + 20 * 3_600, 1.0),
        sample(DAY_START + 22 * 3_600, 2.0),
        sample(DAY_START + 23 * 3_600, 3.0),
    ];

    let utc = summarize_days(&samples, 0);
    assert_eq!(utc.len(), 1);

    let shifted = summarize_days(&samples, 3 * 3_600);
    assert_eq!(shifted.len(), 2);
    assert_eq!(shifted[0].sample_count, 1);
    assert_eq!(shifted[1].sample_count, 2);
    assert_eq!(shifted[1].label, "Fri");
}

#[test]
fn min_and_max_temperature_follow_running_comparison() {
    let mut samples = three_hourly(DAY_START, 8);
    for (sample, temp) in samples
        .iter_mut()
        .zip([3.0, -1.5, 0.0, 7.25, 9.0, 4.0, 2.0, 1.0])
    {
        sample.temp_c = temp;
    }

    let day = &summarize_days(&samples, 0)[0];
    assert_eq!(day.temp_min_c, -1.5);
    assert_eq!(day.temp_max_c, 9.0);
}

#[test]
fn rainfall_total_treats_missing_as_zero() {
    let mut samples = three_hourly(DAY_START, 3);
    samples[0].rain_mm = Some(1.0);
    samples[2].rain_mm = Some(2.5);

    let day = &summarize_days(&samples, 0)[0];
    assert!((day.rain_total_mm - 3.5).abs() < 1e-6);
}

#[test]
fn gust_and_precip_probability_ignore_missing_values() {
    let mut samples = three_hourly(DAY_START, 4);
    samples[1].wind_gust_ms = Some(9.5);
    samples[3].wind_gust_ms = Some(7.0);
    samples[2].precip_probability = Some(0.4);

    let day = &summarize_days(&samples, 0)[0];
    assert_eq!(day.wind_gust_max_ms, 9.5);
    assert_eq!(day.precip_probability_max, 0.4);
}

#[test]
fn gust_defaults_to_zero_when_nothing_reports_it() {
    let samples = three_hourly(DAY_START, 2);
    let day = &summarize_days(&samples, 0)[0];
    assert_eq!(day.wind_gust_max_ms, 0.0);
    assert_eq!(day.precip_probability_max, 0.0);
}

#[test]
fn averages_wind_and_pressure() {
    let mut samples = three_hourly(DAY_START, 4);
    for (sample, (wind, pressure)) in samples.iter_mut().zip([
        (2.0, 1000.0),
        (4.0, 1004.0),
        (6.0, 1008.0),
        (8.0, 1012.0),
    ]) {
        sample.wind_speed_ms = wind;
        sample.pressure_hpa = pressure;
    }

    let day = &summarize_days(&samples, 0)[0];
    assert!((day.wind_speed_avg_ms - 5.0).abs() < 1e-6);
    assert!((day.pressure_avg_hpa - 1006.0).abs() < 1e-3);
}

#[test]
fn pivot_is_fifth_sample_of_full_group() {
    let mut samples = three_hourly(DAY_START, 5);
    for (idx, sample) in samples.iter_mut().enumerate() {
        sample.condition.icon = format!("icon-{idx}");
        sample.wind_deg = idx as f32 * 10.0;
    }

    let pivot = pivot_sample(&samples).expect("pivot");
    assert_eq!(pivot.condition.icon, "icon-4");

    let day = &summarize_days(&samples, 0)[0];
    assert_eq!(day.condition.icon, "icon-4");
    assert_eq!(day.wind_deg, 40.0);
}

#[test]
fn pivot_is_last_sample_of_short_group() {
    let mut samples = three_hourly(DAY_START, 3);
    for (idx, sample) in samples.iter_mut().enumerate() {
        sample.condition.icon = format!("icon-{idx}");
    }

    assert_eq!(pivot_sample(&samples).expect("pivot").condition.icon, "icon-2");
    assert!(pivot_sample(&[]).is_none());
}

#[test]
fn empty_input_yields_no_summaries() {
    assert!(summarize_days(&[], 0).is_empty());
}

#[test]
fn hourly_rows_carry_local_time_and_flag() {
    let samples = three_hourly(DAY_START, 3);
    let rows = hourly_rows(&samples, 3_600, |s| s.timestamp > DAY_START);

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].label(), "Thu 01h");
    assert!(!rows[0].is_day);
    assert!(rows[1].is_day);
    assert_eq!(rows[2].time.format("%H:%M").to_string(), "07:00");
}
