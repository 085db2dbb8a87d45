//! Seeded MCTS planner over the core game model, plus an episode driver
//! that plays real games and records what happened.

mod config;
mod error;
mod mcts;
mod stats;
mod trace;

pub use config::*;
pub use error::*;
pub use mcts::*;
pub use stats::*;
pub use trace::*;
