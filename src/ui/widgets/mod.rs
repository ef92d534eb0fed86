pub mod current;
pub mod five_day;
pub mod hourly;
pub mod prefs;
pub mod table;

use ratatui::style::{Color, Modifier, Style};

use crate::domain::{
    palette::TABLE_TEXT,
    units::{SpeedUnit, TempUnit, convert_temp, round_wind_speed},
};

/// Palette lookups that collapse to the terminal default under `--no-color`.
#[derive(Debug, Clone, Copy)]
pub struct Paint {
    pub enabled: bool,
}

impl Paint {
    #[must_use]
    pub fn color(self, hex: &str) -> Option<Color> {
        if !self.enabled {
            return None;
        }
        hex.parse::<Color>().ok()
    }

    #[must_use]
    pub fn fg(self, hex: &str) -> Style {
        self.color(hex).map_or_else(Style::default, |c| Style::default().fg(c))
    }

    #[must_use]
    pub fn bg(self, hex: &str) -> Style {
        self.color(hex).map_or_else(Style::default, |c| Style::default().bg(c))
    }

    /// Row base style: fixed dark text on the day or night shade.
    #[must_use]
    pub fn row(self, background_hex: &str) -> Style {
        self.bg(background_hex).patch(self.fg(TABLE_TEXT))
    }

    #[must_use]
    pub fn bold(self, hex: &str) -> Style {
        self.fg(hex).add_modifier(Modifier::BOLD)
    }
}

/// One decimal place and the unit suffix, e.g. `7.4°C`.
#[must_use]
pub fn format_temp(celsius: f32, unit: TempUnit) -> String {
    format!("{:.1}°{}", convert_temp(celsius, unit), unit.label())
}

#[must_use]
pub fn format_temp_range(min_c: f32, max_c: f32, unit: TempUnit) -> String {
    format!(
        "{:.0}/{:.0}°{}",
        convert_temp(max_c, unit),
        convert_temp(min_c, unit),
        unit.label()
    )
}

/// Speed, optional gust after a slash, then the unit: `9/20mph`.
#[must_use]
pub fn format_wind(speed_ms: f32, gust_ms: Option<f32>, unit: SpeedUnit) -> String {
    let speed = round_wind_speed(speed_ms, unit);
    match gust_ms {
        Some(gust) => format!("{speed}/{}{}", round_wind_speed(gust, unit), unit.label()),
        None => format!("{speed}{}", unit.label()),
    }
}

#[must_use]
pub fn format_rain(mm: Option<f32>) -> String {
    format!("{:.1}mm", mm.unwrap_or(0.0))
}

#[must_use]
pub fn format_percent(fraction: f32) -> String {
    format!("{:.0}%", fraction * 100.0)
}
