use contagion_autoplay::{run_episode, EpisodeConfig, EpisodeResult, EpisodeStatus};
use contagion_core::{Rules, WorldMap};
use std::env;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy)]
struct CliOptions {
    games: u32,
    json: bool,
    episode: EpisodeConfig,
    rules: Rules,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            games: 1,
            json: false,
            episode: EpisodeConfig::default(),
            rules: Rules::default(),
        }
    }
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => options.json = true,
            "--help" | "-h" => return Err(usage()),
            "--seed" => options.episode.plan.seed = parse_value(arg, iter.next())?,
            "--game-seed" => options.episode.game_seed = parse_value(arg, iter.next())?,
            "--sims" => options.episode.plan.simulations = parse_value(arg, iter.next())?,
            "--depth" => options.episode.plan.rollout_depth = parse_value(arg, iter.next())?,
            "--turns" => options.episode.max_turns = parse_value(arg, iter.next())?,
            "--games" => options.games = parse_value(arg, iter.next())?,
            "--cure-cards" => options.rules.cure_cards = parse_value(arg, iter.next())?,
            "--infection-rate" => options.rules.infection_rate = parse_value(arg, iter.next())?,
            other => return Err(format!("unknown option: {other}\n{}", usage())),
        }
    }
    Ok(options)
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
    let Some(raw) = value else {
        return Err(format!("{flag} expects a value"));
    };
    raw.parse()
        .map_err(|_| format!("{flag}: cannot parse {raw:?}"))
}

fn usage() -> String {
    [
        "contagion-cli [options]",
        "  --seed N            planner seed",
        "  --game-seed N       game shuffle seed",
        "  --sims N            rollouts per turn",
        "  --depth N           rollout depth in turns",
        "  --turns N           turn cap per game",
        "  --games N           number of games to play",
        "  --cure-cards N      matching cards required per cure",
        "  --infection-rate N  infection draws per turn",
        "  --json              dump episode records as JSON",
    ]
    .join("\n")
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let world = WorldMap::standard();
    let mut results: Vec<EpisodeResult> = Vec::with_capacity(options.games as usize);
    for game in 0..options.games {
        let mut config = options.episode;
        config.plan.seed = config.plan.seed.wrapping_add(u64::from(game));
        config.game_seed = config.game_seed.wrapping_add(u64::from(game));
        match run_episode(&world, &options.rules, &config) {
            Ok(result) => {
                if !options.json {
                    if options.games > 1 {
                        println!(
                            "game {:>3}: {:<26} score {:>6} turns {:>3}",
                            game + 1,
                            format!("{:?}", result.status),
                            result.score,
                            result.summary.turns
                        );
                    } else {
                        println!("{}", result.to_text_report());
                    }
                }
                results.push(result);
            }
            Err(err) => {
                eprintln!("game {}: {err}", game + 1);
                return ExitCode::FAILURE;
            }
        }
    }

    if options.json {
        match serde_json::to_string_pretty(&results) {
            Ok(body) => println!("{body}"),
            Err(err) => {
                eprintln!("serialize error: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else if options.games > 1 {
        let wins = results
            .iter()
            .filter(|r| r.status == EpisodeStatus::Won)
            .count();
        let average: f64 =
            results.iter().map(|r| r.score as f64).sum::<f64>() / results.len() as f64;
        println!("wins: {wins}/{}", results.len());
        println!("average score: {average:.1}");
    }
    ExitCode::SUCCESS
}
