use battleship::{
    select_targets, AbilityCode, AbilityUse, CombatMove, Coord, Grid, TargetMode, BOARD_SIZE,
};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// A uniformly random not-fired cell, or any cell if everything has been fired at.
pub fn random_target<R: Rng + ?Sized>(rng: &mut R, grid: &Grid) -> Coord {
    grid.available_cells()
        .choose(rng)
        .copied()
        .unwrap_or_else(|| Coord::new(rng.gen_range(0..BOARD_SIZE), rng.gen_range(0..BOARD_SIZE)))
}

/// Follows up on the first cluster of hits, using Rapid Fire for two shots
/// when it is among the `available` abilities.
pub fn plan_combat_move<R: Rng + ?Sized>(
    rng: &mut R,
    opponent_grid: &Grid,
    available: &[AbilityCode],
) -> CombatMove {
    if available.contains(&AbilityCode::RapidFire) {
        if let [first, second] = select_targets(rng, opponent_grid, TargetMode::Dual)[..] {
            debug!(%first, %second, "Rapid fire");
            return CombatMove {
                cell: first,
                ability: AbilityUse::RapidFire { cell: second },
            };
        }
    }
    let cell = match select_targets(rng, opponent_grid, TargetMode::Single).first() {
        Some(&cell) => {
            debug!(%cell, "Following up on a hit");
            cell
        }
        None => random_target(rng, opponent_grid),
    };
    CombatMove::single(cell)
}
