use std::path::PathBuf;

use chrono::Utc;

use crate::{
    app::state::Clients,
    cli::{Cli, LogLevelArg},
    data::{forecast::ForecastClient, geocode::GeocodeClient},
    domain::weather::{
        Condition, CurrentConditions, DailyOutlook, FiveDayForecast, ForecastBundle, RawSample,
    },
};

/// 2026-02-12 00:00 UTC
pub(crate) const DAY_START: i64 = 1_770_854_400;
pub(crate) const HOUR: i64 = 3_600;

pub(crate) fn test_cli() -> Cli {
    Cli {
        prefs: None,
        forecast_url: None,
        geocode_url: None,
        log_file: None,
        log_level: LogLevelArg::Info,
        ascii_icons: false,
        emoji_icons: false,
        no_color: false,
        one_shot: false,
    }
}

pub(crate) fn test_cli_with_prefs(path: &str) -> Cli {
    Cli {
        prefs: Some(PathBuf::from(path)),
        ..test_cli()
    }
}

/// Clients aimed at a closed local port; state tests never let them fire.
pub(crate) fn offline_clients() -> Clients {
    Clients {
        forecast: ForecastClient::with_base_url("http://127.0.0.1:9"),
        geocode: GeocodeClient::with_base_url("http://127.0.0.1:9/search"),
    }
}

pub(crate) fn condition(id: u16, icon: &str, description: &str) -> Condition {
    Condition {
        id,
        icon: icon.to_string(),
        description: description.to_string(),
    }
}

pub(crate) fn sample(timestamp: i64, temp_c: f32) -> RawSample {
    RawSample {
        timestamp,
        temp_c,
        feels_like_c: Some(temp_c - 2.0),
        wind_speed_ms: 4.0,
        wind_gust_ms: Some(7.5),
        wind_deg: 225.0,
        humidity: 72.0,
        pressure_hpa: 1012.0,
        cloud_cover: 40.0,
        precip_probability: Some(0.2),
        rain_mm: None,
        condition: condition(803, "04d", "broken clouds"),
    }
}

pub(crate) fn fixture_bundle() -> ForecastBundle {
    let hourly = (0..48)
        .map(|h| sample(DAY_START + h * HOUR, 3.0 + (h % 24) as f32 * 0.5))
        .collect();
    let daily = (0..7)
        .map(|d| DailyOutlook {
            timestamp: DAY_START + d * 24 * HOUR + 12 * HOUR,
            temp_min_c: 1.0 + d as f32,
            temp_max_c: 8.0 + d as f32,
            wind_speed_ms: 5.0,
            wind_gust_ms: Some(9.0),
            wind_deg: 270.0,
            humidity: 80.0,
            precip_probability: 0.3,
            rain_mm: Some(1.2),
            pressure_hpa: 1009.0,
            condition: condition(500, "10d", "light rain"),
        })
        .collect();

    ForecastBundle {
        location: "London".to_string(),
        utc_offset_secs: 0,
        current: CurrentConditions {
            observed_at: DAY_START + 10 * HOUR,
            sunrise: DAY_START + 7 * HOUR,
            sunset: DAY_START + 17 * HOUR,
            temp_c: 7.4,
            feels_like_c: 5.1,
            wind_speed_ms: 4.5,
            wind_gust_ms: Some(8.9),
            wind_deg: 250.0,
            humidity: 76.0,
            pressure_hpa: 1014.0,
            condition: condition(803, "04d", "broken clouds"),
        },
        hourly,
        daily,
        fetched_at: Utc::now(),
    }
}

pub(crate) fn fixture_five_day() -> FiveDayForecast {
    FiveDayForecast {
        city: "London".to_string(),
        utc_offset_secs: 0,
        sunrise: DAY_START + 7 * HOUR,
        sunset: DAY_START + 17 * HOUR,
        samples: (0..40)
            .map(|i| sample(DAY_START + i * 3 * HOUR, 2.0 + (i % 8) as f32))
            .collect(),
        fetched_at: Utc::now(),
    }
}
