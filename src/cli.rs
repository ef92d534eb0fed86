#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Unicode,
    Ascii,
    Emoji,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for log::LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
            LogLevelArg::Trace => Self::Trace,
        }
    }
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "weather-widget",
    version,
    about = "Terminal weather widget: current conditions, 48-hour and five-day forecasts"
)]
pub struct Cli {
    /// Preferences file (default: $WEATHER_WIDGET_CONFIG_DIR/prefs or ~/.config/weather-widget/prefs)
    #[arg(long)]
    pub prefs: Option<PathBuf>,

    /// Weather provider base URL
    #[arg(long)]
    pub forecast_url: Option<String>,

    /// Geocoding provider search URL
    #[arg(long)]
    pub geocode_url: Option<String>,

    /// Write logs to this file (no logging when omitted)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log verbosity
    #[arg(long, value_enum, default_value_t = LogLevelArg::Info)]
    pub log_level: LogLevelArg,

    /// Force ASCII icons
    #[arg(long, conflicts_with = "emoji_icons")]
    pub ascii_icons: bool,

    /// Force emoji icons
    #[arg(long)]
    pub emoji_icons: bool,

    /// Render without the temperature/wind/cloud palette
    #[arg(long)]
    pub no_color: bool,

    /// Print weather snapshot to stdout and exit (non-interactive)
    #[arg(long)]
    pub one_shot: bool,
}

impl Cli {
    #[must_use]
    pub fn icon_mode(&self) -> IconMode {
        if self.ascii_icons {
            IconMode::Ascii
        } else if self.emoji_icons {
            IconMode::Emoji
        } else {
            IconMode::Unicode
        }
    }

    #[must_use]
    pub fn use_color(&self) -> bool {
        !self.no_color
    }
}
