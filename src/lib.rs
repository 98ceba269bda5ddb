//! Headless travel-planning toolkit: persisted packing lists, destination
//! stops, a budget tracker with a derived spent total, and current-weather
//! lookups for a destination city.
//!
//! Rendering, navigation, and styling belong to the embedding UI. This crate
//! owns the load/mutate/persist cycle behind each screen plus the single
//! outbound weather call, and degrades every failure to an empty or
//! unchanged view instead of surfacing it as fatal.

pub mod app;
pub mod domain;
pub mod infra;
pub mod screens;
pub mod util;

pub use app::{Planner, PlannerError};
