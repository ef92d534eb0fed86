#![allow(dead_code)]
#![allow(clippy::cast_precision_loss)]

use std::path::Path;

use chrono::Utc;
use serde_json::{Value, json};
use weather_widget::{
    app::{
        prefs::Preferences,
        state::{AppState, Clients},
    },
    cli::{Cli, LogLevelArg},
    data::{forecast::ForecastClient, geocode::GeocodeClient},
    domain::weather::{
        Condition, CurrentConditions, DailyOutlook, FiveDayForecast, ForecastBundle, RawSample,
    },
    resilience::outcome::FetchOutcome,
};

/// 2026-02-12 00:00 UTC, a Thursday.
pub const DAY_START: i64 = 1_770_854_400;
pub const HOUR: i64 = 3_600;

pub fn cli() -> Cli {
    Cli {
        prefs: None,
        forecast_url: None,
        geocode_url: None,
        log_file: None,
        log_level: LogLevelArg::Info,
        ascii_icons: true,
        emoji_icons: false,
        no_color: false,
        one_shot: false,
    }
}

pub fn cli_for(server_uri: &str, prefs_path: &Path) -> Cli {
    Cli {
        prefs: Some(prefs_path.to_path_buf()),
        forecast_url: Some(server_uri.to_string()),
        geocode_url: Some(format!("{server_uri}/search")),
        ..cli()
    }
}

pub fn keyed_preferences() -> Preferences {
    Preferences {
        api_key: "test-key".to_string(),
        latitude: 51.5,
        longitude: -0.12,
        location: "London".to_string(),
        ..Preferences::default()
    }
}

pub fn offline_state() -> AppState {
    AppState::with_preferences(
        Preferences::default(),
        None,
        Clients {
            forecast: ForecastClient::with_base_url("http://127.0.0.1:9"),
            geocode: GeocodeClient::with_base_url("http://127.0.0.1:9/search"),
        },
    )
}

pub fn ready_state() -> AppState {
    let mut state = offline_state();
    state.apply_fetch_outcome(FetchOutcome::Success(fixture_bundle()));
    state
}

pub fn condition(id: u16, icon: &str, description: &str) -> Condition {
    Condition {
        id,
        icon: icon.to_string(),
        description: description.to_string(),
    }
}

pub fn sample(timestamp: i64, temp_c: f32) -> RawSample {
    RawSample {
        timestamp,
        temp_c,
        feels_like_c: Some(temp_c - 1.5),
        wind_speed_ms: 5.0,
        wind_gust_ms: Some(9.0),
        wind_deg: 200.0,
        humidity: 70.0,
        pressure_hpa: 1010.0,
        cloud_cover: 55.0,
        precip_probability: Some(0.4),
        rain_mm: Some(0.3),
        condition: condition(500, "10d", "light rain"),
    }
}

pub fn fixture_bundle() -> ForecastBundle {
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
        hourly: (0..48)
            .map(|h| sample(DAY_START + h * HOUR, 2.0 + (h % 24) as f32 * 0.5))
            .collect(),
        daily: (0..7)
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
            .collect(),
        fetched_at: Utc::now(),
    }
}

pub fn fixture_five_day() -> FiveDayForecast {
    FiveDayForecast {
        city: "London".to_string(),
        utc_offset_secs: 0,
        sunrise: DAY_START + 7 * HOUR,
        sunset: DAY_START + 17 * HOUR,
        samples: (0..40)
            .map(|i| sample(DAY_START + i * 3 * HOUR, 1.0 + (i % 8) as f32))
            .collect(),
        fetched_at: Utc::now(),
    }
}

fn weather_json(id: u16, icon: &str, description: &str) -> Value {
    json!([{ "id": id, "main": "Clouds", "description": description, "icon": icon }])
}

/// A trimmed onecall payload: current block, 48 hourly and 7 daily entries.
pub fn onecall_json() -> Value {
    let hourly: Vec<Value> = (0..48)
        .map(|h| {
            let mut entry = json!({
                "dt": DAY_START + h * HOUR,
                "temp": 3.0 + (h % 24) as f64 * 0.5,
                "feels_like": 1.0,
                "pressure": 1012,
                "humidity": 81,
                "clouds": 75,
                "wind_speed": 6.2,
                "wind_deg": 240,
                "pop": 0.2,
                "weather": weather_json(803, "04d", "broken clouds"),
            });
            if h % 6 == 0 {
                entry["rain"] = json!({ "1h": 0.4 });
                entry["wind_gust"] = json!(11.5);
            }
            entry
        })
        .collect();
    let daily: Vec<Value> = (0..7)
        .map(|d| {
            json!({
                "dt": DAY_START + d * 24 * HOUR + 12 * HOUR,
                "temp": { "day": 6.0, "min": 2.0, "max": 9.0 },
                "pressure": 1008,
                "humidity": 77,
                "wind_speed": 7.0,
                "wind_gust": 13.0,
                "wind_deg": 260,
                "pop": 0.6,
                "rain": 2.4,
                "weather": weather_json(500, "10d", "light rain"),
            })
        })
        .collect();

    json!({
        "lat": 51.5,
        "lon": -0.12,
        "timezone": "Europe/London",
        "timezone_offset": 0,
        "current": {
            "dt": DAY_START + 10 * HOUR,
            "sunrise": DAY_START + 7 * HOUR,
            "sunset": DAY_START + 17 * HOUR,
            "temp": 7.4,
            "feels_like": 5.1,
            "pressure": 1014,
            "humidity": 76,
            "wind_speed": 4.5,
            "wind_deg": 250,
            "weather": weather_json(803, "04d", "broken clouds"),
        },
        "hourly": hourly,
        "daily": daily,
    })
}

/// A trimmed `/forecast` payload: 40 three-hourly entries.
pub fn five_day_json() -> Value {
    let list: Vec<Value> = (0..40)
        .map(|i| {
            json!({
                "dt": DAY_START + i * 3 * HOUR,
                "main": { "temp": 4.0, "feels_like": 1.5, "pressure": 1004, "humidity": 88 },
                "weather": weather_json(500, "10n", "light rain"),
                "clouds": { "all": 90 },
                "wind": { "speed": 8.4, "deg": 215, "gust": 14.1 },
                "pop": 0.8,
                "rain": { "3h": 1.25 },
            })
        })
        .collect();

    json!({
        "cod": "200",
        "cnt": 40,
        "list": list,
        "city": {
            "name": "London",
            "timezone": 0,
            "sunrise": DAY_START + 7 * HOUR,
            "sunset": DAY_START + 17 * HOUR,
        },
    })
}

pub fn nominatim_json() -> Value {
    json!([
        {
            "display_name": "Paris, Île-de-France, France",
            "lat": "48.8588897",
            "lon": "2.3200410",
            "address": { "city": "Paris", "country": "France" },
        },
        {
            "display_name": "Paris, Lamar County, Texas, United States",
            "lat": "33.6617962",
            "lon": "-95.5555130",
            "address": { "town": "Paris", "state": "Texas" },
        },
        {
            "display_name": "Paris, Oxford County, Maine, United States",
            "lat": "44.2597",
            "lon": "-70.5006",
            "address": { "county": "Oxford County" },
        },
    ])
}
