use std::fmt::Write as _;

use crate::{
    app::prefs::Preferences,
    cli::IconMode,
    domain::{conditions::weather_icon, units::compass_point, weather::ForecastBundle},
    ui::widgets::{format_percent, format_rain, format_temp, format_temp_range, format_wind},
};

/// Plain-text rendering for `--one-shot`: current conditions followed by one
/// line per day of the daily outlook.
#[must_use]
pub fn snapshot(bundle: &ForecastBundle, prefs: &Preferences, icons: IconMode) -> String {
    let current = &bundle.current;
    let clock = |ts: i64, fmt: &str| bundle.local_time(ts).format(fmt).to_string();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}  {} f/l {}  {} {}",
        bundle.location,
        format_temp(current.temp_c, prefs.temp_unit),
        format_temp(current.feels_like_c, prefs.temp_unit),
        weather_icon(&current.condition, icons),
        current.condition.description
    );
    let _ = writeln!(
        out,
        "Wind: {} {}  Pressure: {:.0}mb  Humidity: {:.0}%",
        format_wind(current.wind_speed_ms, current.wind_gust_ms, prefs.speed_unit),
        compass_point(current.wind_deg),
        current.pressure_hpa,
        current.humidity
    );
    let _ = writeln!(
        out,
        "Sunrise: {}  Sunset: {}  Updated: {}",
        clock(current.sunrise, "%H:%M"),
        clock(current.sunset, "%H:%M"),
        clock(current.observed_at, "%H:%M:%S")
    );

    for day in &bundle.daily {
        let _ = writeln!(
            out,
            "{}  {:>9}  {} {:<18} {:>10} {:<3}  {:>4}  {}",
            clock(day.timestamp, "%a"),
            format_temp_range(day.temp_min_c, day.temp_max_c, prefs.temp_unit),
            weather_icon(&day.condition, icons),
            day.condition.description,
            format_wind(day.wind_speed_ms, day.wind_gust_ms, prefs.speed_unit),
            compass_point(day.wind_deg),
            format_percent(day.precip_probability),
            format_rain(day.rain_mm)
        );
    }
    out
}
