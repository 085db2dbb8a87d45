use crate::{PlanConfig, PlanError, SearchStats, StateKey};
use contagion_core::{Action, GameState, RngState, Rules, WorldMap};

/// UCT planner. Owns the shared search tables and its own randomness;
/// every rollout works on a clone, the real game state is only read.
#[derive(Debug, Clone)]
pub struct Planner {
    config: PlanConfig,
    stats: SearchStats,
    rng: RngState,
}

impl Planner {
    pub fn new(config: PlanConfig) -> Self {
        Self {
            config,
            stats: SearchStats::new(),
            rng: RngState::from_seed(config.seed),
        }
    }

    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Runs the simulation budget and returns the greedy root action.
    pub fn plan(
        &mut self,
        world: &WorldMap,
        rules: &Rules,
        state: &GameState,
    ) -> Result<Action, PlanError> {
        if state.is_over() {
            return Err(PlanError::TerminalRoot);
        }
        let actions = state.legal_actions(world, rules);
        if actions.is_empty() {
            return Err(PlanError::NoLegalAction);
        }
        if !self.config.retain_stats {
            self.stats.clear();
        }
        for _ in 0..self.config.simulations {
            self.simulate(world, rules, state, self.config.rollout_depth)?;
        }
        let key = StateKey::of(state);
        Ok(self.stats.best_action(&key, &actions).unwrap_or(actions[0]))
    }

    fn simulate(
        &mut self,
        world: &WorldMap,
        rules: &Rules,
        state: &GameState,
        depth: u32,
    ) -> Result<f64, PlanError> {
        if depth == 0 || state.is_over() {
            return Ok(0.0);
        }
        let actions = state.legal_actions(world, rules);
        if actions.is_empty() {
            return Ok(0.0);
        }
        let key = StateKey::of(state);
        let action = self
            .stats
            .select_uct(&key, &actions, self.config.exploration_c);

        let mut next = state.clone();
        let mut reward = next.apply(world, rules, action)?;
        if !next.is_over() {
            reward += next.end_of_turn(world, rules, &mut self.rng)?;
        }
        let future = self.simulate(world, rules, &next, depth - 1)?;
        let value = reward + self.config.discount * future;
        self.stats.record(key, action, value);
        Ok(value)
    }
}
