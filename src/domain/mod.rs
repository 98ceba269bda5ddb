//! Domain types and pure logic for the travel planner.

pub mod budget;
pub mod entities;
pub mod session;
pub mod validate;

pub use budget::{classify, remaining, spent_total, summarize, BudgetStatus, BudgetSummary};
pub use entities::{Destination, Expense, ListEntry, PackingItem, WeatherReport};
pub use session::{EditSession, SubmitAction};
pub use validate::ValidationError;
