//! Core engine types: seats, RNG, configuration, errors.
//!
//! These are the building blocks the round engine is assembled from; none
//! of them knows about lifecycle or turn order.

pub mod config;
pub mod error;
pub mod rng;
pub mod seat;

pub use config::{RevealMode, RoundConfig};
pub use error::ActionError;
pub use rng::{EngineRng, RngState};
pub use seat::{Player, SeatId};
