use std::path::PathBuf;

use battleship::{AbilityCode, CombatMove, GameState, Placement, ShipKind};
use battleship_bot_utils::{initialize_logging, place_with_fallback, random_target, Bot};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
struct Args {
    /// Path to the JSON game state
    state_file: PathBuf,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.log_level);
    let seed = args.seed.unwrap_or_else(rand::random);
    let rng = StdRng::seed_from_u64(seed);

    RandomBot { rng }.run(&args.state_file)
}

struct RandomBot {
    rng: StdRng,
}

impl Bot for RandomBot {
    fn select_abilities(&mut self, _state: &GameState) -> [AbilityCode; 2] {
        [AbilityCode::SonarPulse, AbilityCode::Hailstorm]
    }

    fn place_ship(&mut self, ship: ShipKind, state: &GameState) -> Placement {
        place_with_fallback(&mut self.rng, ship, state)
    }

    fn combat(&mut self, state: &GameState) -> CombatMove {
        CombatMove::single(random_target(&mut self.rng, &state.opponent_grid))
    }
}
