use crate::{cli::IconMode, domain::weather::Condition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCategory {
    Clear,
    Cloudy,
    Drizzle,
    Rain,
    Snow,
    Fog,
    Thunder,
    Unknown,
}

/// Groups provider condition ids (2xx thunder, 3xx drizzle, 5xx rain, 6xx
/// snow, 7xx atmosphere, 800 clear, 80x clouds).
#[must_use]
pub fn category_for_id(id: u16) -> WeatherCategory {
    match id {
        200..=299 => WeatherCategory::Thunder,
        300..=399 => WeatherCategory::Drizzle,
        500..=599 => WeatherCategory::Rain,
        600..=699 => WeatherCategory::Snow,
        700..=799 => WeatherCategory::Fog,
        800 => WeatherCategory::Clear,
        801..=804 => WeatherCategory::Cloudy,
        _ => WeatherCategory::Unknown,
    }
}

#[must_use]
pub fn weather_icon(condition: &Condition, mode: IconMode) -> &'static str {
    let (ascii, emoji, unicode) =
        icon_tokens(category_for_id(condition.id), condition.is_day_icon());
    match mode {
        IconMode::Ascii => ascii,
        IconMode::Emoji => emoji,
        IconMode::Unicode => unicode,
    }
}

fn icon_tokens(
    category: WeatherCategory,
    is_day: bool,
) -> (&'static str, &'static str, &'static str) {
    if matches!(category, WeatherCategory::Clear) {
        return clear_icon_tokens(is_day);
    }
    non_clear_icon_tokens(category)
}

fn clear_icon_tokens(is_day: bool) -> (&'static str, &'static str, &'static str) {
    if is_day {
        ("SUN", "☀️", "☀")
    } else {
        ("MON", "🌙", "☾")
    }
}

fn non_clear_icon_tokens(category: WeatherCategory) -> (&'static str, &'static str, &'static str) {
    match category {
        WeatherCategory::Cloudy => ("CLD", "☁️", "☁"),
        WeatherCategory::Drizzle => ("DRZ", "🌦️", "☂"),
        WeatherCategory::Rain => ("RAN", "🌧️", "☔"),
        WeatherCategory::Snow => ("SNW", "🌨️", "❄"),
        WeatherCategory::Fog => ("FOG", "🌫️", "░"),
        WeatherCategory::Thunder => ("THN", "⛈️", "⚡"),
        WeatherCategory::Unknown | WeatherCategory::Clear => ("---", "☁️", "☁"),
    }
}
