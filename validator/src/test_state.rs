use battleship::{
    AbilityCode, AbilityRecord, CellState, Coord, GameState, Grid, ShipKind, ShipRecord,
    BOARD_SIZE,
};
use rand::Rng;

use crate::ValidationPhase;

fn ship(name: ShipKind, coordinates: &[[i8; 2]], hits: &[[i8; 2]]) -> ShipRecord {
    ShipRecord {
        name,
        coordinates: coordinates.iter().copied().map(Coord::from).collect(),
        hits: hits.iter().copied().map(Coord::from).collect(),
    }
}

fn scatter<R: Rng + ?Sized>(rng: &mut R, grid: &mut Grid, state: CellState) {
    let coord = Coord::new(rng.gen_range(0..BOARD_SIZE), rng.gen_range(0..BOARD_SIZE));
    grid.set(coord, state);
}

/// A synthetic game state that asks for the decision of `phase`.
pub fn create_test_state<R: Rng + ?Sized>(phase: ValidationPhase, rng: &mut R) -> GameState {
    match phase {
        ValidationPhase::AbilitySelection => GameState::default(),
        // One ship is already placed
        ValidationPhase::Placement => GameState {
            player_ships: vec![ship(
                ShipKind::Ship1x4,
                &[[0, 0], [0, 1], [0, 2], [0, 3]],
                &[],
            )],
            ..GameState::default()
        },
        ValidationPhase::Combat => {
            let mut player_grid = Grid::new();
            let mut opponent_grid = Grid::new();
            // Some random hits and misses for realism
            for _ in 0..5 {
                scatter(rng, &mut player_grid, CellState::Hit);
                scatter(rng, &mut opponent_grid, CellState::Hit);
            }
            for _ in 0..7 {
                scatter(rng, &mut player_grid, CellState::Miss);
                scatter(rng, &mut opponent_grid, CellState::Miss);
            }
            for _ in 0..2 {
                scatter(rng, &mut player_grid, CellState::Blocked);
            }

            GameState {
                player_ships: vec![
                    ship(
                        ShipKind::Ship1x4,
                        &[[0, 0], [0, 1], [0, 2], [0, 3]],
                        &[[0, 1]],
                    ),
                    ship(ShipKind::Ship1x3, &[[2, 2], [3, 2], [4, 2]], &[]),
                    ship(
                        ShipKind::Ship2x3,
                        &[[5, 0], [5, 1], [5, 2], [6, 0], [6, 1], [6, 2]],
                        &[],
                    ),
                    ship(ShipKind::Ship1x2, &[[7, 5], [7, 6]], &[]),
                ],
                player_grid,
                opponent_grid,
                player_abilities: vec![
                    AbilityRecord::unused(AbilityCode::SonarPulse),
                    AbilityRecord::unused(AbilityCode::RapidFire),
                ],
                opponent_abilities: vec![
                    AbilityRecord::unused(AbilityCode::Shield),
                    AbilityRecord::unused(AbilityCode::Hailstorm),
                ],
            }
        }
    }
}
