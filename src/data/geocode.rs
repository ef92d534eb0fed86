use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::{
    data::{error::FetchError, get_json},
    domain::weather::PlaceMatch,
};

const GEOCODE_URL: &str = "https://nominatim.openstreetmap.org/search";
const MAX_RESULTS: &str = "5";
const UNKNOWN_LOCALITY: &str = "Unknown";

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: String,
}

impl Default for GeocodeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GeocodeClient {
    pub fn new() -> Self {
        Self::with_base_url(GEOCODE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        // Nominatim rejects requests without an identifying agent.
        let client = Client::builder()
            .timeout(Duration::from_secs(8))
            .user_agent(concat!("weather-widget/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|err| {
                log::warn!("falling back to default HTTP client: {err}");
                Client::new()
            });
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Free-text place search. Entries whose coordinates do not parse are
    /// dropped rather than failing the whole search.
    pub async fn search(&self, query: &str) -> Result<Vec<PlaceMatch>, FetchError> {
        let params = [
            ("format", "json"),
            ("addressdetails", "1"),
            ("q", query),
            ("limit", MAX_RESULTS),
        ];
        let payload: Vec<SearchResult> =
            get_json(&self.client, &self.base_url, &params, "geocode").await?;

        Ok(payload.into_iter().filter_map(SearchResult::into_match).collect())
    }
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    #[serde(default)]
    display_name: String,
    lat: String,
    lon: String,
    #[serde(default)]
    address: Option<Address>,
}

#[derive(Debug, Default, Deserialize)]
struct Address {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
}

impl Address {
    fn locality(self) -> Option<String> {
        self.city.or(self.town).or(self.village)
    }
}

impl SearchResult {
    fn into_match(self) -> Option<PlaceMatch> {
        let (Ok(latitude), Ok(longitude)) = (self.lat.parse::<f64>(), self.lon.parse::<f64>())
        else {
            log::warn!(
                "skipping geocode result with bad coordinates: {} ({}, {})",
                self.display_name,
                self.lat,
                self.lon
            );
            return None;
        };

        Some(PlaceMatch {
            display_name: self.display_name,
            locality: self
                .address
                .and_then(Address::locality)
                .unwrap_or_else(|| UNKNOWN_LOCALITY.to_string()),
            latitude,
            longitude,
        })
    }
}
