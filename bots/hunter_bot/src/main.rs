use std::path::PathBuf;

use battleship::{visualize_grid, AbilityCode, CombatMove, GameState, Placement, ShipKind};
use battleship_bot_utils::{initialize_logging, place_with_fallback, plan_combat_move, Bot};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
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
    info!(seed);
    let rng = StdRng::seed_from_u64(seed);

    HunterBot { rng }.run(&args.state_file)
}

/// Hunts down the first damaged ship it finds, with Rapid Fire when available.
struct HunterBot {
    rng: StdRng,
}

impl Bot for HunterBot {
    fn select_abilities(&mut self, _state: &GameState) -> [AbilityCode; 2] {
        [AbilityCode::SonarPulse, AbilityCode::RapidFire]
    }

    fn place_ship(&mut self, ship: ShipKind, state: &GameState) -> Placement {
        place_with_fallback(&mut self.rng, ship, state)
    }

    fn combat(&mut self, state: &GameState) -> CombatMove {
        let available = state.available_abilities();
        let combat_move = plan_combat_move(&mut self.rng, &state.opponent_grid, &available);
        debug!(
            "Opponent grid:\n{}",
            visualize_grid(&state.opponent_grid, &[combat_move.cell])
        );
        combat_move
    }
}
