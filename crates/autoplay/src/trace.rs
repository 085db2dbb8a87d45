use crate::{PlanConfig, PlanError, Planner};
use contagion_core::{city, GameState, LocationId, LossReason, RngState, Rules, Status, WorldMap};
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EpisodeStatus {
    Won,
    Lost(LossReason),
    MaxTurns,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnRecord {
    pub turn: u32,
    pub action: String,
    pub reward: f64,
    pub location: LocationId,
    pub total_cubes: u32,
    pub outbreaks: u32,
    pub cures_found: usize,
    pub hand_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStats {
    pub turns: u32,
    pub total_simulations: u64,
    pub wall_time_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeResult {
    pub status: EpisodeStatus,
    pub score: i64,
    pub turns: Vec<TurnRecord>,
    pub summary: SummaryStats,
}

impl EpisodeResult {
    pub fn to_json_pretty(&self) -> Result<String, PlanError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_text_report(&self) -> String {
        let mut lines = vec![
            format!("status: {}", status_label(&self.status)),
            format!("score: {}", self.score),
            format!(
                "summary: turns={} simulations={} wall_ms={}",
                self.summary.turns, self.summary.total_simulations, self.summary.wall_time_ms
            ),
            String::new(),
        ];
        for record in &self.turns {
            lines.push(format!(
                "  turn {:>3} | {:<10} reward {:>6.1} | at {:<16} cubes {:>3} outbreaks {} cures {} hand {}",
                record.turn,
                record.action,
                record.reward,
                location_label(record.location),
                record.total_cubes,
                record.outbreaks,
                record.cures_found,
                record.hand_size
            ));
        }
        lines.join("\n")
    }
}

/// Standard-board city name, falling back to the raw id off-board.
fn location_label(location: LocationId) -> String {
    match city::NAMES.get(location) {
        Some(name) => (*name).to_string(),
        None => location.to_string(),
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EpisodeConfig {
    pub plan: PlanConfig,
    /// Seed for the game's own shuffles, independent of the planner seed.
    pub game_seed: u64,
    pub start: LocationId,
    pub max_turns: u32,
}

impl Default for EpisodeConfig {
    fn default() -> Self {
        Self {
            plan: PlanConfig::default(),
            game_seed: 0x5EED,
            start: city::ATLANTA,
            max_turns: 60,
        }
    }
}

/// Reporting convenience only; the planner never sees this number.
pub fn report_score(state: &GameState) -> i64 {
    let cubes = i64::from(state.total_cubes());
    let outbreaks = i64::from(state.outbreaks);
    -(cubes * outbreaks) + 100 * state.cures_found() as i64
}

/// Plays one full game: plan, commit to the live state, resolve the end
/// of turn, repeat until a terminal status or the turn cap.
pub fn run_episode(
    world: &WorldMap,
    rules: &Rules,
    config: &EpisodeConfig,
) -> Result<EpisodeResult, PlanError> {
    let started_at = Instant::now();
    let mut rng = RngState::from_seed(config.game_seed);
    let mut state = GameState::new(world, rules, config.start, &mut rng);
    let mut planner = Planner::new(config.plan);
    let mut records = Vec::new();
    let mut total_simulations = 0u64;

    for turn in 0..config.max_turns {
        if state.is_over() {
            break;
        }
        let action = planner.plan(world, rules, &state)?;
        total_simulations += u64::from(config.plan.simulations);

        let mut reward = state.apply(world, rules, action)?;
        if !state.is_over() {
            reward += state.end_of_turn(world, rules, &mut rng)?;
        }
        records.push(TurnRecord {
            turn,
            action: action.label(),
            reward,
            location: state.location,
            total_cubes: state.total_cubes(),
            outbreaks: state.outbreaks,
            cures_found: state.cures_found(),
            hand_size: state.hand.len(),
        });
    }

    let status = match state.status {
        Status::Won => EpisodeStatus::Won,
        Status::Lost(reason) => EpisodeStatus::Lost(reason),
        Status::InProgress => EpisodeStatus::MaxTurns,
    };
    Ok(EpisodeResult {
        status,
        score: report_score(&state),
        summary: SummaryStats {
            turns: records.len() as u32,
            total_simulations,
            wall_time_ms: started_at.elapsed().as_millis() as u64,
        },
        turns: records,
    })
}

fn status_label(status: &EpisodeStatus) -> &'static str {
    match status {
        EpisodeStatus::Won => "Won",
        EpisodeStatus::Lost(LossReason::OutOfCards) => "Lost (out of cards)",
        EpisodeStatus::Lost(LossReason::TooManyOutbreaks) => "Lost (too many outbreaks)",
        EpisodeStatus::MaxTurns => "MaxTurns",
    }
}
