use serde::{Deserialize, Serialize};

/// Side length of the square board.
pub const BOARD_SIZE: i8 = 8;

/// The four orthogonal directions, in the order up, down, left, right.
pub const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// All eight directions, including diagonals.
pub const SURROUNDING: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A cell on the board.
///
/// Serialized as a `[row, col]` pair. Coordinates coming from the outside are
/// not necessarily in bounds, see [`Coord::in_bounds`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "[i8; 2]", into = "[i8; 2]")]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(&self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// Saturates instead of overflowing, so far-off coordinates stay off the
    /// board.
    pub fn offset(&self, (d_row, d_col): (i8, i8)) -> Coord {
        Coord::new(
            self.row.saturating_add(d_row),
            self.col.saturating_add(d_col),
        )
    }

    /// Orthogonal neighbors that lie on the board.
    pub fn orthogonal_neighbors(self) -> impl Iterator<Item = Coord> {
        ORTHOGONAL
            .into_iter()
            .map(move |dir| self.offset(dir))
            .filter(Coord::in_bounds)
    }

    /// Orthogonal and diagonal neighbors that lie on the board.
    pub fn surrounding(self) -> impl Iterator<Item = Coord> {
        SURROUNDING
            .into_iter()
            .map(move |dir| self.offset(dir))
            .filter(Coord::in_bounds)
    }
}

impl From<[i8; 2]> for Coord {
    fn from([row, col]: [i8; 2]) -> Self {
        Coord::new(row, col)
    }
}

impl From<Coord> for [i8; 2] {
    fn from(coord: Coord) -> Self {
        [coord.row, coord.col]
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// What is known about a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Nobody has fired at this cell yet.
    #[default]
    #[serde(rename = "N")]
    NotFired,
    #[serde(rename = "H")]
    Hit,
    #[serde(rename = "M")]
    Miss,
    /// The cell cannot be fired at.
    #[serde(rename = "B")]
    Blocked,
}

/// An 8×8 board of [`CellState`]s, indexed `[row][col]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid(pub [[CellState; BOARD_SIZE as usize]; BOARD_SIZE as usize]);

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `None` for coordinates off the board.
    pub fn get(&self, coord: Coord) -> Option<CellState> {
        coord
            .in_bounds()
            .then(|| self.0[coord.row as usize][coord.col as usize])
    }

    /// Panics if `coord` is off the board.
    pub fn set(&mut self, coord: Coord, state: CellState) {
        assert!(coord.in_bounds(), "{} is not on the board", coord);
        self.0[coord.row as usize][coord.col as usize] = state;
    }

    /// Builder-style variant of [`Grid::set`].
    pub fn with(mut self, coord: Coord, state: CellState) -> Self {
        self.set(coord, state);
        self
    }

    /// All cells with their state, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        self.0.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &state)| (Coord::new(row as i8, col as i8), state))
        })
    }

    pub fn is(&self, coord: Coord, state: CellState) -> bool {
        self.get(coord) == Some(state)
    }

    /// Cells in the given state, in row-major order.
    pub fn cells_in_state(&self, state: CellState) -> Vec<Coord> {
        self.iter()
            .filter(|&(_, s)| s == state)
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Cells that can still be fired at.
    pub fn available_cells(&self) -> Vec<Coord> {
        self.cells_in_state(CellState::NotFired)
    }
}

/// Every coordinate on the board, in row-major order.
pub fn all_coords() -> impl Iterator<Item = Coord> {
    (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::new(row, col)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_grid_codes() {
        let mut rows = vec![vec!["N"; 8]; 8];
        rows[0][1] = "H";
        rows[2][3] = "M";
        rows[7][7] = "B";
        let grid: Grid = serde_json::from_value(serde_json::json!(rows)).unwrap();
        assert_eq!(grid.get(Coord::new(0, 1)), Some(CellState::Hit));
        assert_eq!(grid.get(Coord::new(2, 3)), Some(CellState::Miss));
        assert_eq!(grid.get(Coord::new(7, 7)), Some(CellState::Blocked));
        assert_eq!(grid.get(Coord::new(0, 0)), Some(CellState::NotFired));
        assert_eq!(grid.get(Coord::new(8, 0)), None);
        assert_eq!(grid.available_cells().len(), 61);
    }

    #[test]
    fn grid_must_be_eight_by_eight() {
        let rows = vec![vec!["N"; 7]; 8];
        assert!(serde_json::from_value::<Grid>(serde_json::json!(rows)).is_err());
    }

    #[test]
    fn coord_as_pair() {
        let coord: Coord = serde_json::from_str("[3, 5]").unwrap();
        assert_eq!(coord, Coord::new(3, 5));
        assert_eq!(serde_json::to_string(&coord).unwrap(), "[3,5]");
    }

    #[test]
    fn neighbors_are_clipped() {
        assert_eq!(Coord::new(0, 0).orthogonal_neighbors().count(), 2);
        assert_eq!(Coord::new(0, 0).surrounding().count(), 3);
        assert_eq!(Coord::new(3, 3).surrounding().count(), 8);
        assert_eq!(
            Coord::new(3, 3).orthogonal_neighbors().collect::<Vec<_>>(),
            vec![
                Coord::new(2, 3),
                Coord::new(4, 3),
                Coord::new(3, 2),
                Coord::new(3, 4)
            ]
        );
    }

    #[test]
    fn far_off_coords_saturate() {
        assert_eq!(Coord::new(127, -128).offset((1, -1)), Coord::new(127, -128));
        assert_eq!(Coord::new(127, 0).surrounding().count(), 0);
        assert_eq!(Coord::new(8, 3).orthogonal_neighbors().collect::<Vec<_>>(), vec![Coord::new(7, 3)]);
    }
}
