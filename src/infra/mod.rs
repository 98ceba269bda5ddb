//! Infrastructure: the persisted collection store and the weather provider
//! client.

pub mod store;
pub mod weather;

pub use store::ListStore;
pub use weather::{WeatherClient, WeatherError};
