use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TempUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedUnit {
    MetersPerSecond,
    KilometersPerHour,
    #[default]
    MilesPerHour,
    Knots,
    Beaufort,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown unit label `{0}`")]
pub struct UnknownUnit(pub String);

impl TempUnit {
    pub const ALL: [TempUnit; 2] = [TempUnit::Celsius, TempUnit::Fahrenheit];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Celsius => "C",
            Self::Fahrenheit => "F",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Celsius => Self::Fahrenheit,
            Self::Fahrenheit => Self::Celsius,
        }
    }
}

impl SpeedUnit {
    /// Order matches the radio buttons of the preferences dialog.
    pub const ALL: [SpeedUnit; 5] = [
        SpeedUnit::Knots,
        SpeedUnit::MilesPerHour,
        SpeedUnit::MetersPerSecond,
        SpeedUnit::KilometersPerHour,
        SpeedUnit::Beaufort,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::MetersPerSecond => "m/s",
            Self::KilometersPerHour => "kph",
            Self::MilesPerHour => "mph",
            Self::Knots => "kt",
            Self::Beaufort => "Bf",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    #[must_use]
    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

fn cycle<T: Copy + PartialEq>(options: &[T], current: T, step: usize) -> T {
    let idx = options.iter().position(|o| *o == current).unwrap_or(0);
    options[(idx + step) % options.len()]
}

impl fmt::Display for TempUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TempUnit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.label() == s.trim())
            .ok_or_else(|| UnknownUnit(s.to_string()))
    }
}

impl FromStr for SpeedUnit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.label() == s.trim())
            .ok_or_else(|| UnknownUnit(s.to_string()))
    }
}

#[must_use]
pub fn convert_temp(celsius: f32, unit: TempUnit) -> f32 {
    match unit {
        TempUnit::Celsius => celsius,
        TempUnit::Fahrenheit => celsius * 1.8 + 32.0,
    }
}

/// Converts a speed in m/s. The Beaufort branch is the usual empirical
/// approximation and is only meaningful for non-negative input.
#[must_use]
pub fn convert_wind_speed(ms: f32, unit: SpeedUnit) -> f32 {
    match unit {
        SpeedUnit::MetersPerSecond => ms,
        SpeedUnit::KilometersPerHour => ms * 3.6,
        SpeedUnit::MilesPerHour => ms * 2.236_94,
        SpeedUnit::Knots => ms * 1.944,
        SpeedUnit::Beaufort => (ms / 0.836).powf(2.0 / 3.0),
    }
}

#[must_use]
pub fn round_temp(value: f32) -> i32 {
    value.round() as i32
}

#[must_use]
pub fn round_wind_speed(ms: f32, unit: SpeedUnit) -> i32 {
    convert_wind_speed(ms, unit).round() as i32
}

/// Upper bound (inclusive) of each compass bracket, clockwise from north.
const COMPASS_BRACKETS: [(f32, &str); 16] = [
    (11.0, "N"),
    (33.0, "NNE"),
    (56.0, "NE"),
    (78.0, "ENE"),
    (101.0, "E"),
    (123.0, "ESE"),
    (146.0, "SE"),
    (168.0, "SSE"),
    (190.0, "S"),
    (213.0, "SSW"),
    (235.0, "SW"),
    (258.0, "WSW"),
    (280.0, "W"),
    (303.0, "WNW"),
    (325.0, "NW"),
    (347.0, "NNW"),
];

pub const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Maps a bearing in degrees to its 16-point compass label.
#[must_use]
pub fn compass_point(degrees: f32) -> &'static str {
    COMPASS_BRACKETS
        .iter()
        .find_map(|(upper, label)| (degrees <= *upper).then_some(*label))
        .unwrap_or("N")
}
