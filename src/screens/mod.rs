//! Headless controllers backing each screen. Rendering and navigation stay
//! with the embedding UI; these own the load/mutate/persist cycle and the
//! add-vs-edit form state.

pub mod budget;
pub mod destinations;
pub mod packing;
pub mod weather;

pub use budget::BudgetScreen;
pub use destinations::DestinationsScreen;
pub use packing::PackingScreen;
pub use weather::{WeatherScreen, WeatherStatus, NO_DATA_MESSAGE};
