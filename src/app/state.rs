use std::{
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use anyhow::Result;
use tokio::sync::mpsc;

use crate::{
    app::{
        events::{AppEvent, start_refresh_task},
        prefs::{Preferences, load_preferences, preferences_path, save_preferences},
    },
    cli::Cli,
    data::{forecast::ForecastClient, geocode::GeocodeClient},
    domain::weather::{FiveDayForecast, ForecastBundle, RefreshMetadata},
    resilience::{freshness::evaluate_freshness, outcome::FetchOutcome},
};

mod fetch;
mod input;
pub mod prefs_dialog;

pub use prefs_dialog::{DialogAction, DialogField, PrefsDialog};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Current,
    Hourly,
    FiveDay,
}

#[derive(Debug, Clone)]
pub struct Clients {
    pub forecast: ForecastClient,
    pub geocode: GeocodeClient,
}

impl Clients {
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            forecast: cli
                .forecast_url
                .as_deref()
                .map_or_else(ForecastClient::new, ForecastClient::with_base_url),
            geocode: cli
                .geocode_url
                .as_deref()
                .map_or_else(GeocodeClient::new, GeocodeClient::with_base_url),
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub running: bool,
    pub view: View,
    pub prefs: Preferences,
    pub prefs_path: Option<PathBuf>,
    pub weather: Option<ForecastBundle>,
    pub five_day: Option<FiveDayForecast>,
    pub refresh_meta: RefreshMetadata,
    pub status: String,
    pub last_error: Option<String>,
    pub five_day_error: Option<String>,
    pub fetch_in_flight: bool,
    pub five_day_in_flight: bool,
    pub scroll: usize,
    pub dialog: Option<PrefsDialog>,
    pub refresh_minutes: Arc<AtomicU64>,
    clients: Clients,
    /// Bumped whenever the forecast query changes; results of older
    /// requests are discarded.
    query_generation: u64,
}

impl AppState {
    /// Loads preferences from disk. A missing file leaves the defaults in
    /// place and opens the preferences dialog.
    pub fn new(cli: &Cli) -> Self {
        let prefs_path = preferences_path(cli);
        let (prefs, first_run, last_error) = match prefs_path.as_deref().map(load_preferences) {
            Some(Ok(Some(prefs))) => (prefs, false, None),
            Some(Ok(None)) | None => (Preferences::default(), true, None),
            Some(Err(err)) => {
                log::error!("{err:#}");
                (Preferences::default(), false, Some(format!("{err:#}")))
            }
        };

        let mut state = Self::with_preferences(prefs, prefs_path, Clients::from_cli(cli));
        state.last_error = last_error;
        if first_run {
            state.dialog = Some(PrefsDialog::new(&state.prefs));
        }
        state
    }

    pub fn with_preferences(
        prefs: Preferences,
        prefs_path: Option<PathBuf>,
        clients: Clients,
    ) -> Self {
        let refresh_minutes = Arc::new(AtomicU64::new(prefs.refresh_minutes()));
        Self {
            running: true,
            view: View::Current,
            prefs,
            prefs_path,
            weather: None,
            five_day: None,
            refresh_meta: RefreshMetadata::default(),
            status: "Initializing...".to_string(),
            last_error: None,
            five_day_error: None,
            fetch_in_flight: false,
            five_day_in_flight: false,
            scroll: 0,
            dialog: None,
            refresh_minutes,
            clients,
            query_generation: 0,
        }
    }

    pub async fn handle_event(&mut self, event: AppEvent, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                start_refresh_task(tx.clone(), Arc::clone(&self.refresh_minutes));
                self.start_fetch(tx).await?;
            }
            AppEvent::TickRefresh => {
                self.update_freshness();
                self.start_fetch(tx).await?;
            }
            AppEvent::Input(event) => self.handle_input(event, tx).await?,
            AppEvent::FetchStarted => {
                self.fetch_in_flight = true;
                self.status = "Fetching weather...".to_string();
                self.refresh_meta.last_attempt = Some(chrono::Utc::now());
            }
            AppEvent::FetchFinished {
                generation,
                outcome,
            } => {
                if generation == self.query_generation {
                    self.apply_fetch_outcome(outcome);
                } else {
                    log::debug!("dropping forecast fetched for superseded preferences");
                }
            }
            AppEvent::FiveDayFinished {
                generation,
                outcome,
            } => {
                if generation == self.query_generation {
                    self.apply_five_day_outcome(outcome);
                } else {
                    log::debug!("dropping five-day forecast fetched for superseded preferences");
                }
            }
            AppEvent::SearchFinished(outcome) => {
                if let Some(dialog) = self.dialog.as_mut() {
                    match outcome {
                        FetchOutcome::Success(results) => dialog.set_results(results),
                        other => dialog
                            .set_search_error(other.error_message().unwrap_or_default().to_string()),
                    }
                }
            }
            AppEvent::Quit => {
                self.running = false;
            }
        }

        Ok(())
    }

    /// A failed fetch never clears data already on screen; it only counts
    /// towards the stale/offline indicator.
    pub fn apply_fetch_outcome(&mut self, outcome: FetchOutcome<ForecastBundle>) {
        self.fetch_in_flight = false;
        match outcome {
            FetchOutcome::Success(bundle) => {
                log::info!(
                    "forecast for {} updated: {} hourly, {} daily",
                    bundle.location,
                    bundle.hourly.len(),
                    bundle.daily.len()
                );
                self.weather = Some(bundle);
                self.last_error = None;
                self.status = "Ready".to_string();
                self.refresh_meta.mark_success();
                self.clamp_scroll();
            }
            failure => {
                let message = failure.error_message().unwrap_or_default().to_string();
                log::warn!("forecast refresh failed: {message}");
                self.last_error = Some(message);
                self.status = if self.weather.is_some() {
                    "Showing last known forecast".to_string()
                } else {
                    "No forecast available".to_string()
                };
                self.refresh_meta.mark_failure();
            }
        }
        self.update_freshness();
    }

    pub fn apply_five_day_outcome(&mut self, outcome: FetchOutcome<FiveDayForecast>) {
        self.five_day_in_flight = false;
        match outcome {
            FetchOutcome::Success(forecast) => {
                log::info!(
                    "five-day forecast for {} updated: {} samples",
                    forecast.city,
                    forecast.samples.len()
                );
                self.five_day = Some(forecast);
                self.five_day_error = None;
                self.clamp_scroll();
            }
            failure => {
                let message = failure.error_message().unwrap_or_default().to_string();
                log::warn!("five-day fetch failed: {message}");
                self.five_day_error = Some(message);
            }
        }
    }

    pub fn update_freshness(&mut self) {
        self.refresh_meta.state = evaluate_freshness(
            self.refresh_meta.last_success,
            self.refresh_meta.consecutive_failures,
            self.prefs.refresh_minutes(),
        );
    }

    /// Swaps in new preferences and publishes the refresh interval to the
    /// running timer. A changed query orphans any request still in flight so
    /// the next fetch starts at once and late results are dropped.
    pub fn apply_preferences(&mut self, prefs: Preferences) {
        self.refresh_minutes
            .store(prefs.refresh_minutes(), Ordering::Relaxed);
        let location_changed = (prefs.latitude, prefs.longitude)
            != (self.prefs.latitude, self.prefs.longitude);
        let query_changed = location_changed
            || prefs.api_key != self.prefs.api_key
            || prefs.location != self.prefs.location;
        self.prefs = prefs;
        if location_changed {
            self.five_day = None;
        }
        if query_changed {
            self.query_generation = self.query_generation.wrapping_add(1);
            self.fetch_in_flight = false;
            self.five_day_in_flight = false;
        }
        self.update_freshness();
    }

    /// Re-reads the preferences file in place of restarting the process.
    pub async fn reload_preferences(&mut self, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        if let Some(path) = self.prefs_path.clone() {
            match load_preferences(&path) {
                Ok(Some(prefs)) => {
                    log::info!("reloaded preferences from {}", path.display());
                    self.apply_preferences(prefs);
                }
                Ok(None) => log::info!("no preferences file; keeping current settings"),
                Err(err) => {
                    log::error!("{err:#}");
                    self.last_error = Some(format!("{err:#}"));
                }
            }
        }
        self.refetch_all(tx).await
    }

    fn save_dialog(&mut self) -> Option<Preferences> {
        let prefs = self.dialog.as_ref()?.to_preferences();
        if let Some(path) = self.prefs_path.as_deref()
            && let Err(err) = save_preferences(path, &prefs)
        {
            log::error!("{err:#}");
            if let Some(dialog) = self.dialog.as_mut() {
                dialog.status = Some(format!("Save failed: {err:#}"));
            }
            return None;
        }
        self.dialog = None;
        Some(prefs)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        match self.view {
            View::Current => 0,
            View::Hourly => self.weather.as_ref().map_or(0, |w| w.hourly.len()),
            View::FiveDay => self.five_day.as_ref().map_or(0, |f| f.samples.len()),
        }
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.row_count().saturating_sub(1));
    }
}
