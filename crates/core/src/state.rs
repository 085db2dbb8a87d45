use crate::{InfectPile, LocationId, PlayerCard, PlayerPile, Rules, RngState, WorldMap};
use serde::{Deserialize, Serialize};

pub const OUTBREAK_THRESHOLD: u8 = 3;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LossReason {
    OutOfCards,
    TooManyOutbreaks,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost(LossReason),
}

/// The full mutable game position. A plain value: cloning deep-copies
/// every pile and counter, so rollouts can mutate copies freely.
/// Randomness lives outside in [`RngState`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameState {
    pub cubes: Vec<u8>,
    pub stations: Vec<bool>,
    pub cures: [bool; 4],
    pub hand: Vec<LocationId>,
    pub player_pile: PlayerPile,
    pub infect_pile: InfectPile,
    pub location: LocationId,
    pub outbreaks: u32,
    pub status: Status,
}

impl GameState {
    /// Sets up a fresh game: shuffled piles, opening hand, initial
    /// infections. Epidemic sentinels never enter the opening hand; a deal
    /// containing one goes back for a full reshuffle.
    pub fn new(world: &WorldMap, rules: &Rules, start: LocationId, rng: &mut RngState) -> Self {
        let count = world.city_count();
        let mut stations = vec![false; count];
        if rules.station_at_start {
            stations[start] = true;
        }

        let mut player_pile = PlayerPile::build(count, rules.epidemic_cards, rng);
        let mut hand = Vec::with_capacity(rules.initial_hand);
        loop {
            let mut dealt = Vec::with_capacity(rules.initial_hand);
            for _ in 0..rules.initial_hand {
                if let Some(card) = player_pile.draw() {
                    dealt.push(card);
                }
            }
            if dealt.iter().any(|card| matches!(card, PlayerCard::Epidemic)) {
                player_pile.return_and_shuffle(dealt, rng);
                continue;
            }
            for card in dealt {
                if let PlayerCard::City(id) = card {
                    hand.push(id);
                }
            }
            break;
        }

        let mut state = Self {
            cubes: vec![0; count],
            stations,
            cures: [false; 4],
            hand,
            player_pile,
            infect_pile: InfectPile::build(count, rng),
            location: start,
            outbreaks: 0,
            status: Status::InProgress,
        };
        for _ in 0..rules.initial_infections {
            if state.status != Status::InProgress {
                break;
            }
            state.infection_draw(world, rules, 1);
        }
        state
    }

    pub fn is_over(&self) -> bool {
        self.status != Status::InProgress
    }

    pub fn cures_found(&self) -> usize {
        self.cures.iter().filter(|&&cured| cured).count()
    }

    pub fn total_cubes(&self) -> u32 {
        self.cubes.iter().map(|&c| c as u32).sum()
    }

    pub(crate) fn count_in_hand(&self, target: LocationId) -> usize {
        self.hand.iter().filter(|&&card| card == target).count()
    }
}
