use crate::{LocationId, RngState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PlayerCard {
    City(LocationId),
    Epidemic,
}

/// Player draw pile: one card per city plus the epidemic sentinels.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerPile {
    draw: Vec<PlayerCard>,
}

impl PlayerPile {
    pub fn build(city_count: usize, epidemic_cards: usize, rng: &mut RngState) -> Self {
        let mut draw = Vec::with_capacity(city_count + epidemic_cards);
        for id in 0..city_count {
            draw.push(PlayerCard::City(id));
        }
        for _ in 0..epidemic_cards {
            draw.push(PlayerCard::Epidemic);
        }
        rng.shuffle(&mut draw);
        Self { draw }
    }

    /// A pile with fixed contents, bottom first: draws come from the back.
    pub fn stacked(draw: Vec<PlayerCard>) -> Self {
        Self { draw }
    }

    pub fn draw(&mut self) -> Option<PlayerCard> {
        self.draw.pop()
    }

    pub fn remaining(&self) -> usize {
        self.draw.len()
    }

    /// Returns cards to the pile and reshuffles.
    pub fn return_and_shuffle(&mut self, mut cards: Vec<PlayerCard>, rng: &mut RngState) {
        self.draw.append(&mut cards);
        rng.shuffle(&mut self.draw);
    }
}

/// Infection pile and its discard.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InfectPile {
    draw: Vec<LocationId>,
    discard: Vec<LocationId>,
}

impl InfectPile {
    pub fn build(city_count: usize, rng: &mut RngState) -> Self {
        let mut draw: Vec<LocationId> = (0..city_count).collect();
        rng.shuffle(&mut draw);
        Self {
            draw,
            discard: Vec::new(),
        }
    }

    /// A pile with fixed contents, bottom first: draws come from the back.
    pub fn stacked(draw: Vec<LocationId>) -> Self {
        Self {
            draw,
            discard: Vec::new(),
        }
    }

    pub fn draw(&mut self) -> Option<LocationId> {
        let card = self.draw.pop()?;
        self.discard.push(card);
        Some(card)
    }

    pub fn remaining(&self) -> usize {
        self.draw.len()
    }

    pub fn discard_count(&self) -> usize {
        self.discard.len()
    }

    /// Shuffles the discard and places it on top of the remaining draw
    /// pile, so old discards come back out before fresh cards.
    pub fn intensify(&mut self, rng: &mut RngState) {
        if self.discard.is_empty() {
            return;
        }
        rng.shuffle(&mut self.discard);
        self.draw.append(&mut self.discard);
    }
}
