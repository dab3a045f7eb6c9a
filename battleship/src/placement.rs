use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Coord, Orientation, ShipKind, ShipRecord, BOARD_SIZE};

/// How many candidates [`propose_placement`] draws before giving up.
pub const PLACEMENT_ATTEMPTS: usize = 100;

/// Probability of drawing a vertical candidate.
pub const VERTICAL_PROBABILITY: f64 = 0.6;

/// Anchor rows and columns allowed for ships of length 3 or less.
const SMALL_SHIP_OFFSETS: [i8; 4] = [1, 2, 5, 6];

/// Ships of length 3 or less must stay within rows and columns `0..=6`.
const SMALL_SHIP_MAX_INDEX: i8 = 6;

/// Where to put a ship. Serialized in the shape of a placement decision.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    #[serde(rename = "name")]
    pub ship: ShipKind,
    /// The top-left cell of the ship.
    #[serde(rename = "cell")]
    pub anchor: Coord,
    #[serde(rename = "direction")]
    pub orientation: Orientation,
}

impl Placement {
    /// The placement used when no valid one could be found: top-left corner,
    /// horizontal. It is not checked and may overlap other ships.
    pub fn fallback(ship: ShipKind) -> Self {
        Self {
            ship,
            anchor: Coord::new(0, 0),
            orientation: Orientation::Horizontal,
        }
    }

    pub fn cells(&self) -> Vec<Coord> {
        self.ship.cells(self.anchor, self.orientation)
    }
}

/// Why [`check_placement`] refused a placement.
#[derive(Debug, PartialEq, Eq)]
pub enum PlacementRejection {
    OutOfBounds { cell: Coord },
    Overlaps { cell: Coord },
    /// The placement touches more than one border cell of an existing ship.
    TooClose { other: ShipKind, shared_border_cells: usize },
}

impl std::error::Error for PlacementRejection {}

impl std::fmt::Display for PlacementRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementRejection::OutOfBounds { cell } =>
                write!(f, "Ship would cover {}, which is off the board", cell),
            PlacementRejection::Overlaps { cell } =>
                write!(f, "Ship would cover {}, which is already occupied", cell),
            PlacementRejection::TooClose { other, shared_border_cells } =>
                write!(f, "Ship would touch {} border cells of {}, at most one is allowed", shared_border_cells, other),
        }
    }
}

/// Checks a placement against the board bounds, the cells already `occupied`,
/// and the border rule against each of the `placed` ships.
///
/// Returns the covered cells if the placement is valid.
pub fn check_placement(
    placement: &Placement,
    occupied: &BTreeSet<Coord>,
    placed: &[ShipRecord],
) -> Result<Vec<Coord>, PlacementRejection> {
    let cells = placement.cells();
    if let Some(&cell) = cells.iter().find(|c| !c.in_bounds()) {
        return Err(PlacementRejection::OutOfBounds { cell });
    }
    if let Some(&cell) = cells.iter().find(|c| occupied.contains(c)) {
        return Err(PlacementRejection::Overlaps { cell });
    }
    // Each ship is checked on its own: touching one border cell of every
    // other ship is fine, touching two of the same ship is not.
    for other in placed.iter().filter(|s| s.is_placed()) {
        let border = other.border();
        let shared_border_cells = cells.iter().filter(|c| border.contains(c)).count();
        if shared_border_cells > 1 {
            return Err(PlacementRejection::TooClose {
                other: other.name,
                shared_border_cells,
            });
        }
    }
    Ok(cells)
}

/// Rejection-samples a valid placement for `ship`.
///
/// Returns `None` if none was found within [`PLACEMENT_ATTEMPTS`] draws; callers
/// are expected to fall back to [`Placement::fallback`].
pub fn propose_placement<R: Rng + ?Sized>(
    rng: &mut R,
    ship: ShipKind,
    occupied: &BTreeSet<Coord>,
    placed: &[ShipRecord],
) -> Option<Placement> {
    let small = ship.length() <= 3;
    for _ in 0..PLACEMENT_ATTEMPTS {
        let orientation = if rng.gen_bool(VERTICAL_PROBABILITY) {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        let anchor = if small {
            Coord::new(
                *SMALL_SHIP_OFFSETS.choose(rng)?,
                *SMALL_SHIP_OFFSETS.choose(rng)?,
            )
        } else {
            Coord::new(rng.gen_range(0..BOARD_SIZE), rng.gen_range(0..BOARD_SIZE))
        };
        let candidate = Placement {
            ship,
            anchor,
            orientation,
        };
        if small
            && candidate
                .cells()
                .iter()
                .any(|c| c.row > SMALL_SHIP_MAX_INDEX || c.col > SMALL_SHIP_MAX_INDEX)
        {
            continue;
        }
        if check_placement(&candidate, occupied, placed).is_ok() {
            return Some(candidate);
        }
    }
    None
}
