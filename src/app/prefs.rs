use std::{
    fmt::Write as _,
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Context;

use crate::{
    cli::Cli,
    data::forecast::ForecastQuery,
    domain::units::{SpeedUnit, TempUnit},
};

pub const DEFAULT_API_KEY: &str = "API key from https://home.openweathermap.org";
pub const MIN_REFRESH_MINUTES: u64 = 10;
const DEFAULT_REFRESH_MINUTES: u64 = 15;
pub const MIN_FONT_SIZE: u8 = 9;
pub const MAX_FONT_SIZE: u8 = 48;

/// Order of keys in the file, also the line order of the legacy
/// positional layout.
const KEYS: [&str; 10] = [
    "appid",
    "lat",
    "lon",
    "loc",
    "temp_unit",
    "speed_unit",
    "timeout",
    "font_size",
    "x",
    "y",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    pub api_key: String,
    pub latitude: f64,
    pub longitude: f64,
    pub location: String,
    pub temp_unit: TempUnit,
    pub speed_unit: SpeedUnit,
    /// As stored; read through [`Preferences::refresh_minutes`].
    pub refresh_interval: u64,
    pub font_size: u8,
    pub window_x: i32,
    pub window_y: i32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.to_string(),
            latitude: 51.5,
            longitude: 0.0,
            location: "London".to_string(),
            temp_unit: TempUnit::Celsius,
            speed_unit: SpeedUnit::MilesPerHour,
            refresh_interval: DEFAULT_REFRESH_MINUTES,
            font_size: 12,
            window_x: 250,
            window_y: 10,
        }
    }
}

impl Preferences {
    #[must_use]
    pub fn refresh_minutes(&self) -> u64 {
        self.refresh_interval.max(MIN_REFRESH_MINUTES)
    }

    #[must_use]
    pub fn forecast_query(&self) -> ForecastQuery {
        ForecastQuery {
            latitude: self.latitude,
            longitude: self.longitude,
            api_key: self.api_key.clone(),
            location: self.location.clone(),
        }
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty() && self.api_key != DEFAULT_API_KEY
    }

    fn apply(&mut self, key: &str, value: &str) {
        let defaults = Self::default();
        match key {
            "appid" => value.clone_into(&mut self.api_key),
            "lat" => self.latitude = parse_or(key, value, defaults.latitude),
            "lon" => self.longitude = parse_or(key, value, defaults.longitude),
            "loc" => value.clone_into(&mut self.location),
            "temp_unit" => self.temp_unit = parse_or(key, value, defaults.temp_unit),
            "speed_unit" => self.speed_unit = parse_or(key, value, defaults.speed_unit),
            "timeout" => {
                // negative minutes count as zero and clamp up on read
                let minutes: i64 = parse_or(key, value, DEFAULT_REFRESH_MINUTES as i64);
                self.refresh_interval = u64::try_from(minutes).unwrap_or_default();
            }
            "font_size" => {
                self.font_size = parse_or(key, value, defaults.font_size)
                    .clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
            }
            "x" => self.window_x = parse_or(key, value, defaults.window_x),
            "y" => self.window_y = parse_or(key, value, defaults.window_y),
            _ => log::debug!("ignoring unknown preference key {key}"),
        }
    }

    fn value_of(&self, key: &str) -> String {
        match key {
            "appid" => self.api_key.clone(),
            "lat" => self.latitude.to_string(),
            "lon" => self.longitude.to_string(),
            "loc" => self.location.clone(),
            "temp_unit" => self.temp_unit.to_string(),
            "speed_unit" => self.speed_unit.to_string(),
            "timeout" => self.refresh_minutes().to_string(),
            "font_size" => self.font_size.to_string(),
            "x" => self.window_x.to_string(),
            "y" => self.window_y.to_string(),
            _ => String::new(),
        }
    }
}

fn parse_or<T: FromStr>(key: &str, value: &str, fallback: T) -> T {
    value.parse().unwrap_or_else(|_| {
        log::warn!("preference {key} has unreadable value {value:?}; using default");
        fallback
    })
}

/// Parses preference file content. Keyed `key,value` lines are the normal
/// layout; a first line without a comma marks the older positional layout.
#[must_use]
pub fn parse_preferences(content: &str) -> Preferences {
    let mut prefs = Preferences::default();
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let positional = lines.first().is_some_and(|line| !line.contains(','));
    if positional {
        for (key, value) in KEYS.iter().zip(&lines) {
            prefs.apply(key, value);
        }
        return prefs;
    }

    for line in lines {
        match line.split_once(',') {
            Some((key, value)) => prefs.apply(key.trim(), value.trim()),
            None => log::warn!("skipping malformed preference line {line:?}"),
        }
    }
    prefs
}

#[must_use]
pub fn render_preferences(prefs: &Preferences) -> String {
    KEYS.iter().fold(String::new(), |mut out, key| {
        let _ = writeln!(out, "{key},{}", prefs.value_of(key));
        out
    })
}

/// Reads the preferences file. `Ok(None)` means there is no file yet.
pub fn load_preferences(path: &Path) -> anyhow::Result<Option<Preferences>> {
    match fs::read_to_string(path) {
        Ok(content) => {
            log::info!("loaded preferences from {}", path.display());
            Ok(Some(parse_preferences(&content)))
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            log::info!("no preferences at {}", path.display());
            Ok(None)
        }
        Err(err) => Err(err)
            .with_context(|| format!("reading preferences {} failed", path.display())),
    }
}

/// Writes the whole file through a temporary sibling and a rename so a
/// crash never leaves a half-written file behind.
pub fn save_preferences(path: &Path, prefs: &Preferences) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("creating preferences directory failed")?;
    }

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, render_preferences(prefs)).context("writing preferences file failed")?;
    restrict_permissions(&tmp)?;
    fs::rename(&tmp, path).context("replacing preferences file failed")?;
    log::info!("saved preferences to {}", path.display());
    Ok(())
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> anyhow::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
        .context("restricting preferences permissions failed")
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> anyhow::Result<()> {
    Ok(())
}

#[must_use]
pub fn preferences_path(cli: &Cli) -> Option<PathBuf> {
    if let Some(path) = &cli.prefs {
        return Some(path.clone());
    }

    if let Some(base) = std::env::var_os("WEATHER_WIDGET_CONFIG_DIR") {
        return Some(PathBuf::from(base).join("prefs"));
    }

    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("weather-widget")
            .join("prefs"),
    )
}

#[cfg(test)]
mod tests;
