use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::{sync::mpsc, time::sleep};

use crate::{
    app::prefs::MIN_REFRESH_MINUTES,
    domain::weather::{FiveDayForecast, ForecastBundle, PlaceMatch},
    resilience::outcome::FetchOutcome,
};

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    TickRefresh,
    Input(Event),
    FetchStarted,
    /// `generation` is the preferences generation the request was made for.
    FetchFinished {
        generation: u64,
        outcome: FetchOutcome<ForecastBundle>,
    },
    FiveDayFinished {
        generation: u64,
        outcome: FetchOutcome<FiveDayForecast>,
    },
    SearchFinished(FetchOutcome<Vec<PlaceMatch>>),
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

/// Emits `TickRefresh` forever. The interval is re-read before every sleep
/// so a preference reload changes the cadence of the next cycle.
pub fn start_refresh_task(tx: mpsc::Sender<AppEvent>, refresh_minutes: Arc<AtomicU64>) {
    tokio::spawn(async move {
        loop {
            let minutes = refresh_minutes.load(Ordering::Relaxed).max(MIN_REFRESH_MINUTES);
            sleep(Duration::from_secs(minutes.saturating_mul(60))).await;
            if tx.send(AppEvent::TickRefresh).await.is_err() {
                break;
            }
        }
    });
}
