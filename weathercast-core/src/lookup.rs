use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tracing::warn;

use crate::{
    client::{ForecastClient, GeocodeClient, http_client},
    config::Config,
    error::LookupError,
    model::{ForecastResult, LookupState},
};

/// Controller for one lookup surface.
///
/// Owns the shared [`LookupState`]; nothing outside [`ForecastLookup::run`]
/// mutates it. The render layer reads snapshots via [`ForecastLookup::state`].
///
/// State machine: `Idle --run--> Loading --> Success | Failure`, and both
/// settled states accept a new `run` that re-enters `Loading`. There is no
/// terminal state.
#[derive(Debug)]
pub struct ForecastLookup {
    geocode: GeocodeClient,
    forecast: ForecastClient,
    state: Mutex<LookupState>,
    generation: AtomicU64,
}

impl ForecastLookup {
    pub fn new(config: &Config) -> Result<Self, LookupError> {
        let http = http_client()?;

        Ok(Self {
            geocode: GeocodeClient::new(http.clone(), &config.geocode_url),
            forecast: ForecastClient::new(http, &config.weather_url),
            state: Mutex::new(LookupState::Idle),
            generation: AtomicU64::new(0),
        })
    }

    /// Snapshot of the current state for the render layer.
    pub fn state(&self) -> LookupState {
        self.state.lock().clone()
    }

    /// Run one lookup: geocode the query, fetch the hourly forecast for the
    /// resolved coordinates, and settle into `Success` or `Failure`.
    ///
    /// Callers pass a non-empty, trimmed query; the presentation layer
    /// enforces this. Overlapping runs each return their own outcome, but
    /// only the most recent invocation commits to the shared state, so a
    /// slow stale response cannot overwrite a newer result.
    pub async fn run(&self, query: &str) -> LookupState {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.commit(generation, LookupState::Loading);

        let outcome = match self.fetch(query).await {
            Ok(result) => LookupState::Success(result),
            Err(err) => {
                warn!("lookup for {query:?} failed: {err}");
                LookupState::Failure(err.to_string())
            }
        };

        // Replaces Loading on every exit path.
        self.commit(generation, outcome.clone());
        outcome
    }

    /// The two collaborator calls, strictly sequential: the forecast request
    /// is never issued when geocoding fails.
    async fn fetch(&self, query: &str) -> Result<ForecastResult, LookupError> {
        let location = self.geocode.resolve(query).await?;
        let series = self.forecast.hourly(location.latitude, location.longitude).await?;

        Ok(ForecastResult { location, series })
    }

    fn commit(&self, generation: u64, next: LookupState) {
        let mut state = self.state.lock();
        if self.generation.load(Ordering::SeqCst) == generation {
            *state = next;
        }
    }
}
