use crate::{all_coords, CellState, Coord, Grid};

/// A random opponent grid. Mostly unfired, with hits clumped often enough to
/// form clusters.
#[derive(Clone, Debug)]
pub struct ArbitraryGrid(pub Grid);

impl quickcheck::Arbitrary for ArbitraryGrid {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let mut grid = Grid::new();
        for coord in all_coords() {
            let state = *g
                .choose(&[
                    CellState::NotFired,
                    CellState::NotFired,
                    CellState::NotFired,
                    CellState::NotFired,
                    CellState::Hit,
                    CellState::Miss,
                    CellState::Miss,
                    CellState::Blocked,
                ])
                .unwrap();
            grid.set(coord, state);
        }
        ArbitraryGrid(grid)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // Reset one fired cell at a time
        let grid = self.0.clone();
        let fired: Vec<Coord> = grid
            .iter()
            .filter(|&(_, state)| state != CellState::NotFired)
            .map(|(coord, _)| coord)
            .collect();
        Box::new(
            fired
                .into_iter()
                .map(move |coord| ArbitraryGrid(grid.clone().with(coord, CellState::NotFired))),
        )
    }
}
