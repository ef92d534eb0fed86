mod common;

use proptest::prelude::*;
use weather_widget::domain::{
    summary::{MAX_SUMMARY_DAYS, summarize_days},
    units::{COMPASS_POINTS, SpeedUnit, compass_point, convert_wind_speed},
};

use common::{DAY_START, HOUR, sample};

proptest! {
    #[test]
    fn wind_speed_conversion_is_monotonic(a in 0.0f32..80.0, b in 0.0f32..80.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        for unit in SpeedUnit::ALL {
            prop_assert!(convert_wind_speed(lo, unit) <= convert_wind_speed(hi, unit));
        }
    }

    #[test]
    fn compass_point_always_names_a_known_point(deg in 0.0f32..=360.0) {
        prop_assert!(COMPASS_POINTS.contains(&compass_point(deg)));
    }

    #[test]
    fn day_summaries_are_ordered_and_bounded(
        temps in prop::collection::vec(-30.0f32..45.0, 1..60),
        rain in prop::collection::vec(prop::option::of(0.0f32..20.0), 60),
    ) {
        let samples: Vec<_> = temps
            .iter()
            .zip(&rain)
            .enumerate()
            .map(|(i, (&temp, &rain_mm))| {
                let mut s = sample(DAY_START + i as i64 * 3 * HOUR, temp);
                s.rain_mm = rain_mm;
                s
            })
            .collect();

        let summaries = summarize_days(&samples, 0);
        prop_assert!(!summaries.is_empty());
        prop_assert!(summaries.len() <= MAX_SUMMARY_DAYS);

        let mut consumed = 0;
        for day in &summaries {
            prop_assert!(day.temp_min_c <= day.temp_max_c);
            let group = &samples[consumed..consumed + day.sample_count];
            let expected: f32 = group.iter().map(|s| s.rain_mm.unwrap_or(0.0)).sum();
            prop_assert!((day.rain_total_mm - expected).abs() < 1e-3);
            consumed += day.sample_count;
        }
        for pair in summaries.windows(2) {
            prop_assert!(pair[0].date < pair[1].date);
        }
    }
}

#[test]
fn compass_edges_wrap_to_north() {
    assert_eq!(compass_point(0.0), "N");
    assert_eq!(compass_point(360.0), "N");
    assert_eq!(compass_point(348.0), "N");
    assert_eq!(compass_point(347.0), "NNW");
}
