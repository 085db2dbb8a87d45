use serde::{Deserialize, Serialize};

/// Rule parameters that vary between game variants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rules {
    pub epidemic_cards: usize,
    pub initial_hand: usize,
    pub initial_infections: usize,
    /// Infection draws per end-of-turn resolution.
    pub infection_rate: usize,
    /// Player-pile draws per end-of-turn resolution.
    pub player_draws: usize,
    pub hand_limit: usize,
    /// Matching city cards consumed by a cure.
    pub cure_cards: usize,
    pub outbreak_limit: u32,
    pub station_at_start: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            epidemic_cards: 4,
            initial_hand: 4,
            initial_infections: 9,
            infection_rate: 2,
            player_draws: 2,
            hand_limit: 7,
            cure_cards: 4,
            outbreak_limit: 10,
            station_at_start: true,
        }
    }
}
