//! Core game model. Keep this crate free of IO and platform concerns.

pub mod action;
pub mod cards;
pub mod config;
pub mod rng;
pub mod run;
pub mod state;
pub mod world;

pub use action::*;
pub use cards::*;
pub use config::*;
pub use rng::*;
pub use run::*;
pub use state::*;
pub use world::*;
