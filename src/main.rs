use clap::{Parser, Subcommand, ValueEnum};
use flotilla::{init_logging, run_duel, Difficulty, Side};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about = "Battleship targeting engine driver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Tier {
    Easy,
    Medium,
    Hard,
}

impl From<Tier> for Difficulty {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Easy => Difficulty::Easy,
            Tier::Medium => Difficulty::Medium,
            Tier::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single AI vs AI match and print the report.
    Duel {
        #[arg(long, value_enum, default_value_t = Tier::Hard)]
        one: Tier,
        #[arg(long, value_enum, default_value_t = Tier::Medium)]
        two: Tier,
        #[arg(long, help = "Fix RNG seed for a reproducible match (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Run many matches and print a JSON summary.
    Bench {
        #[arg(long, default_value_t = 100)]
        games: usize,
        #[arg(long, value_enum, default_value_t = Tier::Hard)]
        one: Tier,
        #[arg(long, value_enum, default_value_t = Tier::Medium)]
        two: Tier,
        #[arg(long, help = "Fix RNG seed for a reproducible run")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Duel { one, two, seed } => {
            let mut rng = make_rng(seed);
            let report = run_duel(&mut rng, one.into(), two.into());
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Bench {
            games,
            one,
            two,
            seed,
        } => {
            let mut rng = make_rng(seed);
            let mut wins = [0usize; 2];
            let mut stalemates = 0usize;
            let mut total_shots = [0usize; 2];
            for _ in 0..games {
                let report = run_duel(&mut rng, one.into(), two.into());
                match report.winner {
                    Some(Side::One) => wins[0] += 1,
                    Some(Side::Two) => wins[1] += 1,
                    None => stalemates += 1,
                }
                total_shots[0] += report.shots[0];
                total_shots[1] += report.shots[1];
            }
            let summary = json!({
                "games": games,
                "one": {
                    "difficulty": format!("{:?}", Difficulty::from(one)),
                    "wins": wins[0],
                    "avg_shots": total_shots[0] as f64 / games as f64,
                },
                "two": {
                    "difficulty": format!("{:?}", Difficulty::from(two)),
                    "wins": wins[1],
                    "avg_shots": total_shots[1] as f64 / games as f64,
                },
                "stalemates": stalemates,
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}
