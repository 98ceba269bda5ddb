//! Top-level wiring: one storage handle and one weather client shared by
//! every screen controller. Navigation between screens stays with the
//! embedding UI, which passes the optional destination city forward.

use crate::infra::weather::{WeatherClient, WeatherError};
use crate::screens::{BudgetScreen, DestinationsScreen, PackingScreen, WeatherScreen};
use crate::util::persistence::{Storage, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Weather(#[from] WeatherError),
}

pub struct Planner {
    storage: Storage,
    weather: WeatherClient,
}

impl Planner {
    /// Planner over the platform-default storage directory.
    pub fn new(weather_api_key: impl Into<String>) -> Result<Self, PlannerError> {
        let storage = Storage::open_default()?;
        Ok(Self::with_storage(storage, weather_api_key)?)
    }

    /// Planner over an explicit storage root (tests, portable installs).
    pub fn with_storage(
        storage: Storage,
        weather_api_key: impl Into<String>,
    ) -> Result<Self, WeatherError> {
        Ok(Self {
            storage,
            weather: WeatherClient::new(weather_api_key)?,
        })
    }

    pub fn weather_client(&self) -> &WeatherClient {
        &self.weather
    }

    pub fn budget(&self) -> BudgetScreen {
        BudgetScreen::load(self.storage.clone())
    }

    pub fn packing_list(&self, city: Option<String>) -> PackingScreen {
        PackingScreen::load(self.storage.clone(), city)
    }

    pub fn destinations(&self) -> DestinationsScreen {
        DestinationsScreen::load(self.storage.clone())
    }

    pub fn weather(&self, city: Option<String>) -> WeatherScreen {
        WeatherScreen::new(city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screens_share_one_storage_root() {
        let dir = tempfile::tempdir().unwrap();
        let planner = Planner::with_storage(Storage::with_root(dir.path()), "test-key").unwrap();

        let mut budget = planner.budget();
        budget.submit("Hotel", "500").unwrap();

        let mut packing = planner.packing_list(Some("Oslo".to_string()));
        packing.submit("Socks").unwrap();

        // A fresh controller over the same root sees the persisted data.
        assert_eq!(planner.budget().summary().spent_total, 500.0);
        assert_eq!(planner.packing_list(None).items().len(), 1);
        // The two collections live under separate keys.
        assert!(planner.destinations().destinations().is_empty());
    }
}
