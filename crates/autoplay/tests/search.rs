use contagion_autoplay::{PlanConfig, PlanError, Planner, SearchStats, StateKey};
use contagion_core::{
    city, Action, Disease, GameState, InfectPile, PlayerPile, RngState, Rules, Status, WorldMap,
};

fn tiny_world() -> WorldMap {
    WorldMap::from_edges(vec![Disease::Blue; 3], &[(0, 1), (1, 2)])
}

fn blank(world: &WorldMap) -> GameState {
    GameState {
        cubes: vec![0; world.city_count()],
        stations: vec![false; world.city_count()],
        cures: [false; 4],
        hand: Vec::new(),
        player_pile: PlayerPile::default(),
        infect_pile: InfectPile::default(),
        location: 0,
        outbreaks: 0,
        status: Status::InProgress,
    }
}

fn fresh_game(seed: u64) -> (WorldMap, Rules, GameState) {
    let world = WorldMap::standard();
    let rules = Rules::default();
    let mut rng = RngState::from_seed(seed);
    let state = GameState::new(&world, &rules, city::ATLANTA, &mut rng);
    (world, rules, state)
}

#[test]
fn unvisited_action_always_selected_first() {
    let world = tiny_world();
    let state = blank(&world);
    let key = StateKey::of(&state);
    let mut stats = SearchStats::new();
    for _ in 0..10 {
        stats.record(key.clone(), Action::Move(1), 1_000.0);
    }

    let picked = stats.select_uct(&key, &[Action::Move(1), Action::Move(2)], 100.0);
    assert_eq!(picked, Action::Move(2));
}

#[test]
fn record_keeps_a_running_mean() {
    let world = tiny_world();
    let state = blank(&world);
    let key = StateKey::of(&state);
    let mut stats = SearchStats::new();

    stats.record(key.clone(), Action::Treat, 1.0);
    stats.record(key.clone(), Action::Treat, 3.0);

    assert_eq!(stats.visit_count(&key, Action::Treat), 2);
    assert_eq!(stats.state_visit_count(&key), 2);
    assert!((stats.value(&key, Action::Treat) - 2.0).abs() < 1e-9);
}

#[test]
fn exploration_weight_flips_the_uct_choice() {
    let world = tiny_world();
    let state = blank(&world);
    let key = StateKey::of(&state);
    let mut stats = SearchStats::new();
    for _ in 0..4 {
        stats.record(key.clone(), Action::Move(1), 1.0);
    }
    stats.record(key.clone(), Action::Move(2), 0.0);

    let candidates = [Action::Move(1), Action::Move(2)];
    // Greedy at zero exploration, drawn to the rarely-visited arm as the
    // bonus weight grows.
    assert_eq!(stats.select_uct(&key, &candidates, 0.0), Action::Move(1));
    assert_eq!(stats.select_uct(&key, &candidates, 100.0), Action::Move(2));
}

#[test]
fn best_action_ties_break_to_the_first_candidate() {
    let world = tiny_world();
    let state = blank(&world);
    let key = StateKey::of(&state);
    let mut stats = SearchStats::new();
    stats.record(key.clone(), Action::Move(1), 2.5);
    stats.record(key.clone(), Action::Treat, 2.5);

    let best = stats.best_action(&key, &[Action::Move(1), Action::Treat]);
    assert_eq!(best, Some(Action::Move(1)));
}

#[test]
fn states_sharing_a_fingerprint_share_statistics() {
    let world = tiny_world();
    let a = blank(&world);
    let mut b = blank(&world);
    b.hand = vec![2, 2, 2];

    // Same cubes and location, different hand: same table key.
    assert_eq!(StateKey::of(&a), StateKey::of(&b));

    let mut c = blank(&world);
    c.cubes[1] = 1;
    assert_ne!(StateKey::of(&a), StateKey::of(&c));
}

#[test]
fn planning_leaves_the_real_state_untouched() {
    let (world, rules, state) = fresh_game(21);
    let snapshot = state.clone();
    let mut planner = Planner::new(PlanConfig {
        simulations: 40,
        ..PlanConfig::default()
    });

    planner.plan(&world, &rules, &state).unwrap();
    assert_eq!(state, snapshot);
}

#[test]
fn planner_returns_a_legal_action() {
    let (world, rules, state) = fresh_game(33);
    let mut planner = Planner::new(PlanConfig::default());

    let action = planner.plan(&world, &rules, &state).unwrap();
    assert!(state.legal_actions(&world, &rules).contains(&action));
}

#[test]
fn planner_is_deterministic_under_a_fixed_seed() {
    let (world, rules, state) = fresh_game(55);
    let config = PlanConfig {
        seed: 9,
        simulations: 48,
        ..PlanConfig::default()
    };
    let mut first = Planner::new(config);
    let mut second = Planner::new(config);

    assert_eq!(
        first.plan(&world, &rules, &state).unwrap(),
        second.plan(&world, &rules, &state).unwrap()
    );
}

#[test]
fn planning_a_finished_game_is_an_error() {
    let (world, rules, mut state) = fresh_game(8);
    state.status = Status::Won;
    let mut planner = Planner::new(PlanConfig::default());

    assert!(matches!(
        planner.plan(&world, &rules, &state),
        Err(PlanError::TerminalRoot)
    ));
}

#[test]
fn stats_reset_or_persist_per_the_config() {
    let (world, rules, state) = fresh_game(13);
    let key = StateKey::of(&state);

    let mut resetting = Planner::new(PlanConfig {
        simulations: 16,
        retain_stats: false,
        ..PlanConfig::default()
    });
    resetting.plan(&world, &rules, &state).unwrap();
    resetting.plan(&world, &rules, &state).unwrap();
    // Every rollout records the root exactly once.
    assert_eq!(resetting.stats().state_visit_count(&key), 16);

    let mut retaining = Planner::new(PlanConfig {
        simulations: 16,
        retain_stats: true,
        ..PlanConfig::default()
    });
    retaining.plan(&world, &rules, &state).unwrap();
    retaining.plan(&world, &rules, &state).unwrap();
    assert_eq!(retaining.stats().state_visit_count(&key), 32);
}
