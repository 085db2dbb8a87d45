use contagion_core::{Action, GameState, LocationId};
use std::collections::HashMap;

/// State fingerprint used as the table key: cube vector plus position.
/// States differing only elsewhere (hand, piles) deliberately share
/// statistics; the coarsening keeps the tables small enough to revisit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateKey {
    cubes: Vec<u8>,
    location: LocationId,
}

impl StateKey {
    pub fn of(state: &GameState) -> Self {
        Self {
            cubes: state.cubes.clone(),
            location: state.location,
        }
    }
}

/// Shared search tables: per-(state, action) visit counts and running-mean
/// values, plus per-state visit totals for the UCT bonus.
#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    visits: HashMap<(StateKey, Action), u32>,
    values: HashMap<(StateKey, Action), f64>,
    state_visits: HashMap<StateKey, u32>,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.visits.clear();
        self.values.clear();
        self.state_visits.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    pub fn visit_count(&self, key: &StateKey, action: Action) -> u32 {
        self.visits
            .get(&(key.clone(), action))
            .copied()
            .unwrap_or(0)
    }

    pub fn value(&self, key: &StateKey, action: Action) -> f64 {
        self.values
            .get(&(key.clone(), action))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn state_visit_count(&self, key: &StateKey) -> u32 {
        self.state_visits.get(key).copied().unwrap_or(0)
    }

    /// UCT selection. Unvisited actions carry an infinite bonus; ties go
    /// to the first-encountered maximum.
    pub fn select_uct(&self, key: &StateKey, actions: &[Action], exploration_c: f64) -> Action {
        let total = self.state_visit_count(key).max(1) as f64;
        let mut best = actions[0];
        let mut best_score = f64::NEG_INFINITY;
        for &action in actions {
            let visits = self.visit_count(key, action);
            let score = if visits == 0 {
                f64::INFINITY
            } else {
                self.value(key, action) + exploration_c * (total.ln() / visits as f64).sqrt()
            };
            if score > best_score {
                best_score = score;
                best = action;
            }
        }
        best
    }

    /// Folds `value` into the running mean for the (state, action) pair.
    pub fn record(&mut self, key: StateKey, action: Action, value: f64) {
        *self.state_visits.entry(key.clone()).or_insert(0) += 1;
        let visits = self.visits.entry((key.clone(), action)).or_insert(0);
        *visits += 1;
        let mean = self.values.entry((key, action)).or_insert(0.0);
        *mean += (value - *mean) / f64::from(*visits);
    }

    /// Greedy pick over visited candidates; `None` when nothing was visited.
    pub fn best_action(&self, key: &StateKey, actions: &[Action]) -> Option<Action> {
        let mut best = None;
        let mut best_value = f64::NEG_INFINITY;
        for &action in actions {
            if self.visit_count(key, action) == 0 {
                continue;
            }
            let value = self.value(key, action);
            if value > best_value {
                best_value = value;
                best = Some(action);
            }
        }
        best
    }
}
