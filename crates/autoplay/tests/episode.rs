use contagion_autoplay::{run_episode, report_score, EpisodeConfig, EpisodeStatus, PlanConfig};
use contagion_core::{city, GameState, RngState, Rules, WorldMap};

fn quick_config() -> EpisodeConfig {
    EpisodeConfig {
        plan: PlanConfig {
            simulations: 8,
            rollout_depth: 4,
            ..PlanConfig::default()
        },
        game_seed: 17,
        start: city::ATLANTA,
        max_turns: 10,
    }
}

#[test]
fn episode_runs_to_a_status_within_the_turn_cap() {
    let world = WorldMap::standard();
    let rules = Rules::default();
    let result = run_episode(&world, &rules, &quick_config()).unwrap();

    assert!(result.summary.turns <= 10);
    assert_eq!(result.turns.len() as u32, result.summary.turns);
    assert_eq!(result.summary.total_simulations, 8 * u64::from(result.summary.turns));
    if result.status == EpisodeStatus::MaxTurns {
        assert_eq!(result.summary.turns, 10);
    }
}

#[test]
fn episode_is_reproducible_for_a_seed_pair() {
    let world = WorldMap::standard();
    let rules = Rules::default();
    let first = run_episode(&world, &rules, &quick_config()).unwrap();
    let second = run_episode(&world, &rules, &quick_config()).unwrap();

    assert_eq!(first.status, second.status);
    assert_eq!(first.score, second.score);
    let actions: Vec<&str> = first.turns.iter().map(|t| t.action.as_str()).collect();
    let replay: Vec<&str> = second.turns.iter().map(|t| t.action.as_str()).collect();
    assert_eq!(actions, replay);
}

#[test]
fn text_report_names_standard_board_cities() {
    let world = WorldMap::standard();
    let rules = Rules::default();
    let result = run_episode(&world, &rules, &quick_config()).unwrap();
    let report = result.to_text_report();

    let first = result.turns.first().expect("at least one turn is played");
    assert!(report.contains(city::NAMES[first.location]));
}

#[test]
fn episode_result_serializes_to_json() {
    let world = WorldMap::standard();
    let rules = Rules::default();
    let result = run_episode(&world, &rules, &quick_config()).unwrap();

    let body = result.to_json_pretty().unwrap();
    assert!(body.contains("\"status\""));
    assert!(body.contains("\"score\""));
}

#[test]
fn report_score_rewards_cures_and_punishes_outbreaks() {
    let world = WorldMap::standard();
    let rules = Rules::default();
    let mut rng = RngState::from_seed(4);
    let mut state = GameState::new(&world, &rules, city::ATLANTA, &mut rng);

    let baseline = report_score(&state);
    assert_eq!(baseline, 0); // no outbreaks yet, no cures

    state.cures = [true, false, false, false];
    assert_eq!(report_score(&state), 100);

    state.outbreaks = 2;
    let cubes = i64::from(state.total_cubes());
    assert_eq!(report_score(&state), 100 - cubes * 2);
}
