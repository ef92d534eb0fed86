//! Discrete color steps for forecast tables. Inputs are native units
//! (°C, m/s, percent); brackets are `[low, high)` with open-ended terminals.

pub const DAY_BACKGROUND: &str = "#eeeeee";
pub const NIGHT_BACKGROUND: &str = "#bbbbbb";
pub const TABLE_TEXT: &str = "#191919";

#[must_use]
pub fn temp_colour(celsius: f32) -> &'static str {
    if celsius <= 0.0 {
        "#00ffff"
    } else if celsius < 5.0 {
        "#3399ff"
    } else if celsius < 10.0 {
        "#3366cc"
    } else if celsius < 15.0 {
        "#3319FF"
    } else if celsius < 20.0 {
        "#ff3300"
    } else if celsius < 25.0 {
        "#ff0000"
    } else {
        "#993300"
    }
}

#[must_use]
pub fn wind_colour(speed_ms: f32) -> &'static str {
    if speed_ms < 8.0 {
        "#2E423B"
    } else if speed_ms < 15.0 {
        "#CE5C00"
    } else if speed_ms < 20.0 {
        "#CE1600"
    } else if speed_ms < 25.0 {
        "#CC0000"
    } else {
        "#A40075"
    }
}

/// Background shade for a cloud cover percentage.
#[must_use]
pub fn cloud_colour(percent: f32) -> &'static str {
    if percent < 20.0 {
        "#eeeeee"
    } else if percent < 40.0 {
        "#dddddd"
    } else if percent < 60.0 {
        "#cccccc"
    } else if percent < 80.0 {
        "#bbbbbb"
    } else {
        "#aaaaaa"
    }
}

#[must_use]
pub fn row_background(is_day: bool) -> &'static str {
    if is_day {
        DAY_BACKGROUND
    } else {
        NIGHT_BACKGROUND
    }
}
