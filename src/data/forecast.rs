use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    data::{error::FetchError, get_json},
    domain::weather::{
        Condition, CurrentConditions, DailyOutlook, FiveDayForecast, ForecastBundle, RawSample,
    },
};

const FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Coordinates and credentials for one provider request.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub api_key: String,
    pub location: String,
}

#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastClient {
    pub fn new() -> Self {
        Self::with_base_url(FORECAST_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|err| {
                log::warn!("falling back to default HTTP client: {err}");
                Client::new()
            });
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Current conditions with the 48-hour and 7-day forecasts.
    pub async fn fetch(&self, query: &ForecastQuery) -> Result<ForecastBundle, FetchError> {
        let url = format!("{}/onecall", self.base_url);
        let lat = query.latitude.to_string();
        let lon = query.longitude.to_string();
        let params = [
            ("lat", lat.as_str()),
            ("lon", lon.as_str()),
            ("exclude", "minutely,alerts"),
            ("units", "metric"),
            ("appid", query.api_key.as_str()),
        ];

        let payload: OneCallResponse = get_json(&self.client, &url, &params, "onecall").await?;
        Ok(payload.into_bundle(query.location.clone()))
    }

    /// The 3-hourly list backing the five-day view.
    pub async fn fetch_five_day(&self, query: &ForecastQuery) -> Result<FiveDayForecast, FetchError> {
        let url = format!("{}/forecast", self.base_url);
        let lat = query.latitude.to_string();
        let lon = query.longitude.to_string();
        let params = [
            ("lat", lat.as_str()),
            ("lon", lon.as_str()),
            ("units", "metric"),
            ("appid", query.api_key.as_str()),
        ];

        let payload: FiveDayResponse = get_json(&self.client, &url, &params, "forecast").await?;
        Ok(payload.into_forecast())
    }
}

#[derive(Debug, Deserialize)]
struct OneCallResponse {
    #[serde(default)]
    timezone_offset: i32,
    current: CurrentBlock,
    #[serde(default)]
    hourly: Vec<HourlyBlock>,
    #[serde(default)]
    daily: Vec<DailyBlock>,
}

impl OneCallResponse {
    fn into_bundle(self, location: String) -> ForecastBundle {
        let current = self.current;
        ForecastBundle {
            location,
            utc_offset_secs: self.timezone_offset,
            current: CurrentConditions {
                observed_at: current.dt,
                sunrise: current.sunrise,
                sunset: current.sunset,
                temp_c: current.temp,
                feels_like_c: current.feels_like,
                wind_speed_ms: current.wind_speed,
                wind_gust_ms: current.wind_gust,
                wind_deg: current.wind_deg,
                humidity: current.humidity,
                pressure_hpa: current.pressure,
                condition: first_condition(current.weather),
            },
            hourly: self.hourly.into_iter().map(HourlyBlock::into_sample).collect(),
            daily: self.daily.into_iter().map(DailyBlock::into_outlook).collect(),
            fetched_at: Utc::now(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WeatherBlock {
    id: u16,
    #[serde(default)]
    description: String,
    #[serde(default)]
    icon: String,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    dt: i64,
    #[serde(default)]
    sunrise: i64,
    #[serde(default)]
    sunset: i64,
    temp: f32,
    feels_like: f32,
    pressure: f32,
    humidity: f32,
    wind_speed: f32,
    wind_gust: Option<f32>,
    #[serde(default)]
    wind_deg: f32,
    #[serde(default)]
    weather: Vec<WeatherBlock>,
}

/// Accumulated precipitation; hourly entries report `1h`, 3-hourly `3h`.
#[derive(Debug, Deserialize)]
struct RainVolume {
    #[serde(rename = "1h")]
    one_hour: Option<f32>,
    #[serde(rename = "3h")]
    three_hours: Option<f32>,
}

impl RainVolume {
    fn millimetres(&self) -> Option<f32> {
        self.one_hour.or(self.three_hours)
    }
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    dt: i64,
    temp: f32,
    feels_like: Option<f32>,
    pressure: f32,
    humidity: f32,
    #[serde(default)]
    clouds: f32,
    wind_speed: f32,
    wind_gust: Option<f32>,
    #[serde(default)]
    wind_deg: f32,
    pop: Option<f32>,
    rain: Option<RainVolume>,
    #[serde(default)]
    weather: Vec<WeatherBlock>,
}

impl HourlyBlock {
    fn into_sample(self) -> RawSample {
        RawSample {
            timestamp: self.dt,
            temp_c: self.temp,
            feels_like_c: self.feels_like,
            wind_speed_ms: self.wind_speed,
            wind_gust_ms: self.wind_gust,
            wind_deg: self.wind_deg,
            humidity: self.humidity,
            pressure_hpa: self.pressure,
            cloud_cover: self.clouds,
            precip_probability: self.pop,
            rain_mm: self.rain.as_ref().and_then(RainVolume::millimetres),
            condition: first_condition(self.weather),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DailyTemp {
    min: f32,
    max: f32,
}

#[derive(Debug, Deserialize)]
struct DailyBlock {
    dt: i64,
    temp: DailyTemp,
    pressure: f32,
    humidity: f32,
    wind_speed: f32,
    wind_gust: Option<f32>,
    #[serde(default)]
    wind_deg: f32,
    #[serde(default)]
    pop: f32,
    rain: Option<f32>,
    #[serde(default)]
    weather: Vec<WeatherBlock>,
}

impl DailyBlock {
    fn into_outlook(self) -> DailyOutlook {
        DailyOutlook {
            timestamp: self.dt,
            temp_min_c: self.temp.min,
            temp_max_c: self.temp.max,
            wind_speed_ms: self.wind_speed,
            wind_gust_ms: self.wind_gust,
            wind_deg: self.wind_deg,
            humidity: self.humidity,
            precip_probability: self.pop,
            rain_mm: self.rain,
            pressure_hpa: self.pressure,
            condition: first_condition(self.weather),
        }
    }
}

#[derive(Debug, Deserialize)]
struct FiveDayResponse {
    list: Vec<ListEntry>,
    city: CityBlock,
}

impl FiveDayResponse {
    fn into_forecast(self) -> FiveDayForecast {
        FiveDayForecast {
            city: self.city.name,
            utc_offset_secs: self.city.timezone,
            sunrise: self.city.sunrise,
            sunset: self.city.sunset,
            samples: self.list.into_iter().map(ListEntry::into_sample).collect(),
            fetched_at: Utc::now(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CityBlock {
    #[serde(default)]
    name: String,
    #[serde(default)]
    timezone: i32,
    #[serde(default)]
    sunrise: i64,
    #[serde(default)]
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f32,
    feels_like: Option<f32>,
    pressure: f32,
    humidity: f32,
}

#[derive(Debug, Default, Deserialize)]
struct CloudsBlock {
    #[serde(default)]
    all: f32,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: f32,
    #[serde(default)]
    deg: f32,
    gust: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct ListEntry {
    dt: i64,
    main: MainBlock,
    #[serde(default)]
    weather: Vec<WeatherBlock>,
    #[serde(default)]
    clouds: CloudsBlock,
    wind: WindBlock,
    pop: Option<f32>,
    rain: Option<RainVolume>,
}

impl ListEntry {
    fn into_sample(self) -> RawSample {
        RawSample {
            timestamp: self.dt,
            temp_c: self.main.temp,
            feels_like_c: self.main.feels_like,
            wind_speed_ms: self.wind.speed,
            wind_gust_ms: self.wind.gust,
            wind_deg: self.wind.deg,
            humidity: self.main.humidity,
            pressure_hpa: self.main.pressure,
            cloud_cover: self.clouds.all,
            precip_probability: self.pop,
            rain_mm: self.rain.as_ref().and_then(RainVolume::millimetres),
            condition: first_condition(self.weather),
        }
    }
}

fn first_condition(weather: Vec<WeatherBlock>) -> Condition {
    weather
        .into_iter()
        .next()
        .map(|w| Condition {
            id: w.id,
            icon: w.icon,
            description: w.description,
        })
        .unwrap_or_default()
}
