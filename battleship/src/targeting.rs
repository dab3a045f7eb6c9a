use std::collections::{BTreeSet, VecDeque};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::{CellState, Coord, Grid};

/// How many cells the caller wants to fire at this turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TargetMode {
    Single,
    /// Two cells, for Rapid Fire.
    Dual,
}

/// The first group of orthogonally connected hits, scanning in row-major order.
///
/// The cells are in breadth-first order starting from the first hit found.
/// Empty if there are no hits on the grid.
pub fn find_cluster(grid: &Grid) -> Vec<Coord> {
    let Some((start, _)) = grid.iter().find(|&(_, state)| state == CellState::Hit) else {
        return Vec::new();
    };

    let mut visited = BTreeSet::from([start]);
    let mut queue = VecDeque::from([start]);
    let mut cluster = Vec::new();
    while let Some(cell) = queue.pop_front() {
        cluster.push(cell);
        for neighbor in cell.orthogonal_neighbors() {
            if grid.is(neighbor, CellState::Hit) && visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }
    cluster
}

/// Not-fired cells orthogonally adjacent to the `cluster`, without duplicates,
/// in the order they are first reached.
pub fn frontier(grid: &Grid, cluster: &[Coord]) -> Vec<Coord> {
    let mut seen = BTreeSet::new();
    cluster
        .iter()
        .flat_map(|cell| cell.orthogonal_neighbors())
        .filter(|&neighbor| grid.is(neighbor, CellState::NotFired) && seen.insert(neighbor))
        .collect()
}

/// Picks follow-up shots around the first cluster of hits.
///
/// Returns nothing if there is no cluster or it is fully surrounded. In
/// [`TargetMode::Dual`], a lone frontier cell is paired with a random other
/// not-fired cell, or with itself if there is none.
pub fn select_targets<R: Rng + ?Sized>(rng: &mut R, grid: &Grid, mode: TargetMode) -> Vec<Coord> {
    let candidates = frontier(grid, &find_cluster(grid));
    match (mode, candidates.as_slice()) {
        (_, []) => Vec::new(),
        (TargetMode::Single, [first, ..]) => vec![*first],
        (TargetMode::Dual, [first, second, ..]) => vec![*first, *second],
        (TargetMode::Dual, [only]) => {
            let others: Vec<Coord> = grid
                .available_cells()
                .into_iter()
                .filter(|cell| cell != only)
                .collect();
            let partner = others.choose(rng).copied().unwrap_or(*only);
            vec![*only, partner]
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::{quickcheck, TestResult};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::arbitrary::ArbitraryGrid;

    fn grid_with(cells: &[(i8, i8, CellState)]) -> Grid {
        cells
            .iter()
            .fold(Grid::new(), |grid, &(row, col, state)| {
                grid.with(Coord::new(row, col), state)
            })
    }

    quickcheck! {
        fn no_hits_no_targets(input: ArbitraryGrid, seed: u64) -> bool {
            let mut grid = input.0;
            for (coord, state) in grid.clone().iter() {
                if state == CellState::Hit {
                    grid.set(coord, CellState::Miss);
                }
            }
            let mut rng = StdRng::seed_from_u64(seed);
            select_targets(&mut rng, &grid, TargetMode::Single).is_empty()
                && select_targets(&mut rng, &grid, TargetMode::Dual).is_empty()
        }
    }

    quickcheck! {
        fn cluster_is_connected_hits(input: ArbitraryGrid) -> bool {
            let grid = input.0;
            let cluster = find_cluster(&grid);
            let all_hits = cluster.iter().all(|&c| grid.is(c, CellState::Hit));
            // Closed: every hit next to a cluster cell is in the cluster
            let closed = cluster.iter().all(|c| {
                c.orthogonal_neighbors()
                    .filter(|&n| grid.is(n, CellState::Hit))
                    .all(|n| cluster.contains(&n))
            });
            all_hits && closed
        }
    }

    quickcheck! {
        fn targets_are_not_fired(input: ArbitraryGrid, seed: u64) -> bool {
            let grid = input.0;
            let mut rng = StdRng::seed_from_u64(seed);
            let single = select_targets(&mut rng, &grid, TargetMode::Single);
            let dual = select_targets(&mut rng, &grid, TargetMode::Dual);
            single.len() <= 1
                && (dual.is_empty() || dual.len() == 2)
                && single.iter().chain(dual.iter()).all(|&c| grid.is(c, CellState::NotFired))
        }
    }

    quickcheck! {
        fn repeated_calls_agree(input: ArbitraryGrid) -> bool {
            let grid = input.0;
            let cluster = find_cluster(&grid);
            cluster == find_cluster(&grid)
                && frontier(&grid, &cluster) == frontier(&grid, &find_cluster(&grid))
        }
    }

    #[test]
    fn lone_hit_targets_a_neighbor() {
        let grid = grid_with(&[(3, 3, CellState::Hit)]);
        let mut rng = StdRng::seed_from_u64(0);
        let targets = select_targets(&mut rng, &grid, TargetMode::Single);
        assert_eq!(targets.len(), 1);
        assert!([(2, 3), (4, 3), (3, 2), (3, 4)]
            .map(|(r, c)| Coord::new(r, c))
            .contains(&targets[0]));
        assert_eq!(
            frontier(&grid, &find_cluster(&grid)),
            vec![
                Coord::new(2, 3),
                Coord::new(4, 3),
                Coord::new(3, 2),
                Coord::new(3, 4)
            ]
        );
    }

    #[test]
    fn only_the_first_cluster_counts() {
        let grid = grid_with(&[
            (1, 1, CellState::Hit),
            (1, 2, CellState::Hit),
            (6, 6, CellState::Hit),
        ]);
        let cluster = find_cluster(&grid);
        assert_eq!(cluster, vec![Coord::new(1, 1), Coord::new(1, 2)]);
        assert!(!frontier(&grid, &cluster).contains(&Coord::new(5, 6)));
    }

    #[test]
    fn frontier_skips_resolved_cells() {
        let grid = grid_with(&[
            (0, 0, CellState::Hit),
            (0, 1, CellState::Miss),
            (1, 0, CellState::Hit),
            (2, 0, CellState::Blocked),
        ]);
        assert_eq!(
            frontier(&grid, &find_cluster(&grid)),
            vec![Coord::new(1, 1)]
        );
    }

    #[test]
    fn surrounded_cluster_gives_nothing() {
        let grid = grid_with(&[
            (0, 0, CellState::Hit),
            (0, 1, CellState::Miss),
            (1, 0, CellState::Miss),
        ]);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(select_targets(&mut rng, &grid, TargetMode::Single).is_empty());
        assert!(select_targets(&mut rng, &grid, TargetMode::Dual).is_empty());
    }

    #[test]
    fn dual_takes_first_two_candidates() {
        let grid = grid_with(&[(3, 3, CellState::Hit)]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            select_targets(&mut rng, &grid, TargetMode::Dual),
            vec![Coord::new(2, 3), Coord::new(4, 3)]
        );
    }

    quickcheck! {
        fn dual_pairs_lone_candidate_with_another_cell(input: ArbitraryGrid, seed: u64) -> TestResult {
            let grid = input.0;
            let candidates = frontier(&grid, &find_cluster(&grid));
            if candidates.len() != 1 || grid.available_cells().len() < 2 {
                return TestResult::discard();
            }
            let mut rng = StdRng::seed_from_u64(seed);
            let targets = select_targets(&mut rng, &grid, TargetMode::Dual);
            TestResult::from_bool(
                targets.len() == 2
                    && targets[0] == candidates[0]
                    && targets[0] != targets[1]
                    && grid.is(targets[1], CellState::NotFired),
            )
        }
    }

    #[test]
    fn dual_pairs_lone_corner_candidate() {
        let grid = grid_with(&[
            (0, 0, CellState::Hit),
            (0, 1, CellState::Miss),
        ]);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let targets = select_targets(&mut rng, &grid, TargetMode::Dual);
            assert_eq!(targets.len(), 2);
            assert_eq!(targets[0], Coord::new(1, 0));
            assert_ne!(targets[0], targets[1]);
        }
    }

    #[test]
    fn dual_repeats_lone_candidate_on_an_exhausted_board() {
        let mut grid = Grid::new();
        for coord in crate::all_coords() {
            grid.set(coord, CellState::Miss);
        }
        grid.set(Coord::new(4, 4), CellState::Hit);
        grid.set(Coord::new(4, 5), CellState::NotFired);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            select_targets(&mut rng, &grid, TargetMode::Dual),
            vec![Coord::new(4, 5), Coord::new(4, 5)]
        );
    }
}
