//! The round engine: lifecycle, action handlers, history, and projections.

pub mod engine;
pub mod history;
pub mod projection;

pub use engine::{Phase, RoundEngine, RoundSummary, SeatSummary};
pub use history::{ActionKind, ActionRecord, History};
pub use projection::{PlayerView, TableView, MASKED_SLOT};
