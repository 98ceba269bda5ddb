use tracing::debug;

use crate::domain::WeatherReport;
use crate::infra::weather::{WeatherClient, WeatherError};

/// Message the view renders whenever no report is available, regardless of
/// whether the provider said not-found or the request failed.
pub const NO_DATA_MESSAGE: &str = "No weather data available.";

/// What the weather view should render.
#[derive(Clone, Debug, PartialEq)]
pub enum WeatherStatus {
    /// No city chosen yet.
    Idle,
    /// A fetch for the current city is outstanding.
    Loading,
    Ready(WeatherReport),
    /// Provider reported not-found, or the request failed.
    Unavailable,
}

/// Weather view state.
///
/// Fetches are driven by the embedding UI: `set_city` hands out a generation
/// token, the UI awaits [`WeatherClient::fetch`] and feeds the outcome back
/// through [`apply`](Self::apply). A token minted before the city changed
/// again no longer matches and its outcome is dropped, so a slow response
/// can never overwrite a newer city's state.
pub struct WeatherScreen {
    city: Option<String>,
    status: WeatherStatus,
    generation: u64,
}

impl WeatherScreen {
    pub fn new(city: Option<String>) -> Self {
        let mut screen = Self {
            city: None,
            status: WeatherStatus::Idle,
            generation: 0,
        };
        if let Some(city) = city {
            screen.set_city(city);
        }
        screen
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn status(&self) -> &WeatherStatus {
        &self.status
    }

    /// Switches to `city` and invalidates any outstanding fetch. The
    /// returned token must accompany the fetch outcome in `apply`.
    pub fn set_city(&mut self, city: impl Into<String>) -> u64 {
        self.city = Some(city.into());
        self.status = WeatherStatus::Loading;
        self.generation += 1;
        self.generation
    }

    /// Applies a fetch outcome. Outcomes carrying a stale token are
    /// discarded: their requester has moved on.
    pub fn apply(&mut self, token: u64, outcome: Result<WeatherReport, WeatherError>) {
        if token != self.generation {
            debug!(token, current = self.generation, "discarding stale weather result");
            return;
        }
        self.status = match outcome {
            Ok(report) => WeatherStatus::Ready(report),
            Err(err) => {
                debug!(%err, "weather lookup failed");
                WeatherStatus::Unavailable
            }
        };
    }

    /// One fetch plus apply for the current city, for callers that can
    /// await in place. Without a city this is a no-op and the view stays
    /// idle.
    pub async fn refresh(&mut self, client: &WeatherClient) {
        let Some(city) = self.city.clone() else {
            return;
        };
        self.status = WeatherStatus::Loading;
        let token = self.generation;
        let outcome = client.fetch(&city).await;
        self.apply(token, outcome);
    }
}
