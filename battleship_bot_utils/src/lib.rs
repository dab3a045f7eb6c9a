mod combat;
pub use combat::*;

use std::io::Write;
use std::path::Path;

use battleship::{
    propose_placement, AbilityCode, CombatMove, GameState, Phase, Placement, Response, ShipKind,
};
use rand::Rng;
use tracing::{debug, warn};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// A trait to simplify writing bots.
///
/// Each invocation of a bot answers exactly one [`GameState`]. Implement the
/// three decisions and call [`Bot::run`] from `main`.
pub trait Bot {
    fn select_abilities(&mut self, state: &GameState) -> [AbilityCode; 2];
    fn place_ship(&mut self, ship: ShipKind, state: &GameState) -> Placement;
    fn combat(&mut self, state: &GameState) -> CombatMove;

    fn decide(&mut self, state: &GameState) -> Response {
        let phase = state.phase();
        debug!(?phase, "Deciding");
        match phase {
            Phase::AbilitySelection => Response::AbilitySelect(self.select_abilities(state)),
            Phase::Placement(ship) => Response::Placement(self.place_ship(ship, state)),
            Phase::Combat => Response::Combat(self.combat(state)),
        }
    }

    fn run(&mut self, state_path: &Path) -> anyhow::Result<()> {
        // The decision goes to stdout, which must contain nothing else.
        // Stderr can be used for logging.
        let state = GameState::load(state_path)?;
        let response = self.decide(&state);
        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer(&mut stdout, &response)?;
        writeln!(stdout)?;
        stdout.flush()?;
        Ok(())
    }
}

/// Samples a placement for `ship` that keeps clear of the ships already in
/// `state`, or falls back to [`Placement::fallback`].
pub fn place_with_fallback<R: Rng + ?Sized>(
    rng: &mut R,
    ship: ShipKind,
    state: &GameState,
) -> Placement {
    let occupied = state.placed_coordinates();
    let placed: Vec<_> = state.placed_ships().into_iter().cloned().collect();
    match propose_placement(rng, ship, &occupied, &placed) {
        Some(placement) => placement,
        None => {
            warn!(%ship, "No valid placement found, using the fallback");
            Placement::fallback(ship)
        }
    }
}

/// Sets up logging to stderr, so that stdout stays reserved for the decision.
pub fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use battleship::{check_placement, AbilityRecord, Coord, ShipRecord, FLEET};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    struct FixedBot;

    impl Bot for FixedBot {
        fn select_abilities(&mut self, _state: &GameState) -> [AbilityCode; 2] {
            [AbilityCode::Shield, AbilityCode::Hailstorm]
        }

        fn place_ship(&mut self, ship: ShipKind, _state: &GameState) -> Placement {
            Placement::fallback(ship)
        }

        fn combat(&mut self, _state: &GameState) -> CombatMove {
            CombatMove::single(Coord::new(4, 4))
        }
    }

    #[test]
    fn decide_dispatches_on_phase() {
        let mut state = GameState::default();
        assert_eq!(
            FixedBot.decide(&state),
            Response::AbilitySelect([AbilityCode::Shield, AbilityCode::Hailstorm])
        );

        state.player_abilities = vec![AbilityRecord::unused(AbilityCode::Shield)];
        assert_eq!(
            FixedBot.decide(&state),
            Response::Placement(Placement::fallback(ShipKind::Ship1x4))
        );

        state.player_ships = FLEET
            .into_iter()
            .enumerate()
            .map(|(i, ship)| ShipRecord::new(ship, vec![Coord::new(i as i8 * 2, 0)]))
            .collect();
        assert_eq!(
            FixedBot.decide(&state),
            Response::Combat(CombatMove::single(Coord::new(4, 4)))
        );
    }

    #[test]
    fn placement_keeps_clear_of_placed_ships() {
        let state = GameState {
            player_ships: vec![ShipRecord::new(
                ShipKind::Ship1x4,
                ShipKind::Ship1x4.cells(Coord::new(0, 0), battleship::Orientation::Horizontal),
            )],
            ..GameState::default()
        };
        let placed: Vec<ShipRecord> = state.player_ships.clone();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let placement = place_with_fallback(&mut rng, ShipKind::Ship1x3, &state);
            assert!(check_placement(&placement, &state.placed_coordinates(), &placed).is_ok());
        }
    }

    #[test]
    fn crowded_board_uses_fallback() {
        // Every row is taken, so nothing fits
        let state = GameState {
            player_ships: (0..8)
                .map(|row| {
                    ShipRecord::new(
                        ShipKind::Ship1x4,
                        (0..8).map(|col| Coord::new(row, col)).collect(),
                    )
                })
                .collect(),
            ..GameState::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            place_with_fallback(&mut rng, ShipKind::Ship1x2, &state),
            Placement::fallback(ShipKind::Ship1x2)
        );
    }

    #[test]
    fn off_board_ship_coordinates_are_tolerated() {
        let state: GameState = serde_json::from_value(serde_json::json!({
            "player_ships": [{"name": "ship_1x4", "coordinates": [[127, 0], [-128, 127]]}]
        }))
        .unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let placement = place_with_fallback(&mut rng, ShipKind::Ship1x3, &state);
        assert!(placement.cells().iter().all(Coord::in_bounds));
    }
}
