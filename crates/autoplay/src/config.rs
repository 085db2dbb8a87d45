use serde::{Deserialize, Serialize};

/// Planner tunables. The exploration weight is sized for the core reward
/// scale; variants with a different scale should retune it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlanConfig {
    pub seed: u64,
    pub simulations: u32,
    /// Depth budget per rollout, in whole turns.
    pub rollout_depth: u32,
    pub exploration_c: f64,
    pub discount: f64,
    /// Keep statistics across real turns instead of resetting per plan.
    pub retain_stats: bool,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            seed: 0xC0FFEE,
            simulations: 64,
            rollout_depth: 12,
            exploration_c: 100.0,
            discount: 0.9,
            retain_stats: false,
        }
    }
}
