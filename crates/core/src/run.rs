use crate::{
    Action, GameState, LocationId, LossReason, PlayerCard, Rules, RngState, Status, WorldMap,
    OUTBREAK_THRESHOLD,
};
use std::collections::VecDeque;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("game is already over")]
    GameOver,
    #[error("invalid action: {0}")]
    InvalidAction(String),
}

// Immediate rewards. Resource-unavailable actions are defined no-ops with
// a small penalty, not errors; losses surface through Status.
const REWARD_TREAT: f64 = 1.0;
const REWARD_BUILD: f64 = 2.0;
const REWARD_CURE: f64 = 10.0;
const PENALTY_NO_EFFECT: f64 = -1.0;
const PENALTY_LOSS: f64 = -50.0;

impl GameState {
    /// Applies one action and returns its immediate reward. Bad Move/Fly
    /// targets and acting on a finished game are errors.
    pub fn apply(&mut self, world: &WorldMap, rules: &Rules, action: Action) -> Result<f64, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        match action {
            Action::Move(target) => {
                if !world.neighbors(self.location).contains(&target) {
                    return Err(GameError::InvalidAction(format!(
                        "{target} is not adjacent to {}",
                        self.location
                    )));
                }
                self.location = target;
                Ok(0.0)
            }
            Action::Fly(target) => {
                let Some(index) = self.hand.iter().position(|&card| card == target) else {
                    return Err(GameError::InvalidAction(format!("no card for {target} in hand")));
                };
                self.hand.remove(index);
                self.location = target;
                Ok(0.0)
            }
            Action::Treat => {
                let here = self.location;
                if self.cubes[here] == 0 {
                    return Ok(PENALTY_NO_EFFECT);
                }
                // A cured disease is cleared from the city in one action.
                let removed = if self.cures[world.disease(here).index()] {
                    std::mem::take(&mut self.cubes[here])
                } else {
                    self.cubes[here] -= 1;
                    1
                };
                Ok(f64::from(removed) * REWARD_TREAT)
            }
            Action::Build => {
                let here = self.location;
                if self.stations[here] {
                    return Ok(PENALTY_NO_EFFECT);
                }
                let Some(index) = self.hand.iter().position(|&card| card == here) else {
                    return Ok(PENALTY_NO_EFFECT);
                };
                self.hand.remove(index);
                self.stations[here] = true;
                Ok(REWARD_BUILD)
            }
            Action::Cure => self.cure(world, rules),
        }
    }

    fn cure(&mut self, world: &WorldMap, rules: &Rules) -> Result<f64, GameError> {
        let here = self.location;
        let color = world.disease(here);
        if !self.stations[here] || self.cures[color.index()] {
            return Ok(PENALTY_NO_EFFECT);
        }
        let matching: Vec<usize> = self
            .hand
            .iter()
            .enumerate()
            .filter(|(_, &card)| world.disease(card) == color)
            .map(|(index, _)| index)
            .collect();
        if matching.len() < rules.cure_cards {
            return Ok(PENALTY_NO_EFFECT);
        }
        // Spend the highest hand indices first so removal order is stable.
        for &index in matching.iter().rev().take(rules.cure_cards) {
            self.hand.remove(index);
        }
        self.cures[color.index()] = true;
        if self.cures.iter().all(|&cured| cured) {
            self.status = Status::Won;
        }
        Ok(REWARD_CURE)
    }

    /// End-of-turn resolution: infection draws, then player draws with
    /// epidemic handling and hand-limit discards. Processing stops the
    /// moment a terminal condition fires.
    pub fn end_of_turn(
        &mut self,
        world: &WorldMap,
        rules: &Rules,
        rng: &mut RngState,
    ) -> Result<f64, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        for _ in 0..rules.infection_rate {
            self.infection_draw(world, rules, 1);
            if self.is_over() {
                return Ok(PENALTY_LOSS);
            }
        }
        for _ in 0..rules.player_draws {
            let Some(card) = self.player_pile.draw() else {
                self.status = Status::Lost(LossReason::OutOfCards);
                return Ok(PENALTY_LOSS);
            };
            match card {
                PlayerCard::Epidemic => {
                    self.epidemic(world, rules, rng);
                    if self.is_over() {
                        return Ok(PENALTY_LOSS);
                    }
                }
                PlayerCard::City(id) => {
                    self.hand.push(id);
                    let excess = self.hand.len().saturating_sub(rules.hand_limit);
                    if excess > 0 {
                        for index in rng.sample_indices(self.hand.len(), excess) {
                            self.hand.remove(index);
                        }
                    }
                }
            }
        }
        Ok(0.0)
    }

    /// One infection-pile draw placing `magnitude` cubes. An empty pile
    /// loses the game; pushing a city past the threshold cascades.
    pub fn infection_draw(&mut self, world: &WorldMap, rules: &Rules, magnitude: u8) {
        let Some(card) = self.infect_pile.draw() else {
            self.status = Status::Lost(LossReason::OutOfCards);
            return;
        };
        let total = self.cubes[card] + magnitude;
        if total > OUTBREAK_THRESHOLD {
            self.cubes[card] = OUTBREAK_THRESHOLD;
            self.outbreak_cascade(world, rules, card);
        } else {
            self.cubes[card] = total;
        }
    }

    /// Intensify, then a triple infection of the newly exposed top card.
    pub fn epidemic(&mut self, world: &WorldMap, rules: &Rules, rng: &mut RngState) {
        self.infect_pile.intensify(rng);
        self.infection_draw(world, rules, 3);
    }

    /// Breadth-first outbreak cascade; the processed set breaks cycles and
    /// a city bumps the counter at most once. Pending outbreaks live in the
    /// queue, never as counts above the threshold, so cubes stay in bounds
    /// even when the limit ends the game mid-cascade.
    pub fn outbreak_cascade(&mut self, world: &WorldMap, rules: &Rules, origin: LocationId) {
        let mut processed = vec![false; world.city_count()];
        let mut queue = VecDeque::from([origin]);
        while let Some(site) = queue.pop_front() {
            if processed[site] {
                continue;
            }
            processed[site] = true;
            self.cubes[site] = OUTBREAK_THRESHOLD;
            self.outbreaks += 1;
            if self.outbreaks >= rules.outbreak_limit {
                self.status = Status::Lost(LossReason::TooManyOutbreaks);
                return;
            }
            for &neighbor in world.neighbors(site) {
                if processed[neighbor] {
                    continue;
                }
                if self.cubes[neighbor] >= OUTBREAK_THRESHOLD {
                    queue.push_back(neighbor);
                } else {
                    self.cubes[neighbor] += 1;
                }
            }
        }
    }

    /// One Move per neighbor, one Fly per distinct held card, and
    /// Treat/Build/Cure only when they would have an effect.
    pub fn legal_actions(&self, world: &WorldMap, rules: &Rules) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.is_over() {
            return actions;
        }
        for &neighbor in world.neighbors(self.location) {
            actions.push(Action::Move(neighbor));
        }
        let mut seen: Vec<LocationId> = Vec::new();
        for &card in &self.hand {
            if card != self.location && !seen.contains(&card) {
                seen.push(card);
                actions.push(Action::Fly(card));
            }
        }
        if self.cubes[self.location] > 0 {
            actions.push(Action::Treat);
        }
        if !self.stations[self.location] && self.count_in_hand(self.location) > 0 {
            actions.push(Action::Build);
        }
        let color = world.disease(self.location);
        if self.stations[self.location] && !self.cures[color.index()] {
            let matching = self
                .hand
                .iter()
                .filter(|&&card| world.disease(card) == color)
                .count();
            if matching >= rules.cure_cards {
                actions.push(Action::Cure);
            }
        }
        actions
    }
}
