use super::*;

impl AppState {
    pub(crate) async fn start_fetch(&mut self, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        if self.fetch_in_flight {
            return Ok(());
        }
        if !self.prefs.has_api_key() {
            self.status = "No API key configured; press p".to_string();
            return Ok(());
        }

        tx.send(AppEvent::FetchStarted).await?;
        self.fetch_in_flight = true;
        log::info!("fetching forecast for {}", self.prefs.location);

        let client = self.clients.forecast.clone();
        let query = self.prefs.forecast_query();
        let generation = self.query_generation;
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let outcome = FetchOutcome::from(client.fetch(&query).await);
            let _ = tx2
                .send(AppEvent::FetchFinished {
                    generation,
                    outcome,
                })
                .await;
        });
        Ok(())
    }

    pub(crate) fn start_five_day_fetch(&mut self, tx: &mpsc::Sender<AppEvent>) {
        if self.five_day_in_flight || !self.prefs.has_api_key() {
            return;
        }

        self.five_day_in_flight = true;
        log::info!("fetching five-day forecast for {}", self.prefs.location);

        let client = self.clients.forecast.clone();
        let query = self.prefs.forecast_query();
        let generation = self.query_generation;
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let outcome = FetchOutcome::from(client.fetch_five_day(&query).await);
            let _ = tx2
                .send(AppEvent::FiveDayFinished {
                    generation,
                    outcome,
                })
                .await;
        });
    }

    pub(crate) fn start_search(&self, tx: &mpsc::Sender<AppEvent>, query: String) {
        log::info!("searching places for {query:?}");
        let client = self.clients.geocode.clone();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let outcome = FetchOutcome::from(client.search(&query).await);
            let _ = tx2.send(AppEvent::SearchFinished(outcome)).await;
        });
    }

    pub(crate) async fn refetch_all(&mut self, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        self.start_fetch(tx).await?;
        if self.view == View::FiveDay {
            self.start_five_day_fetch(tx);
        }
        Ok(())
    }
}
