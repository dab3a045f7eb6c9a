use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::Coord;

/// The ship types of the fleet. The name encodes the shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShipKind {
    #[serde(rename = "ship_1x4")]
    Ship1x4,
    #[serde(rename = "ship_1x3")]
    Ship1x3,
    /// A block of two rows of three cells.
    #[serde(rename = "ship_2x3")]
    Ship2x3,
    #[serde(rename = "ship_1x2")]
    Ship1x2,
}

/// The whole fleet, in the order the ships are placed.
pub const FLEET: [ShipKind; 4] = [
    ShipKind::Ship1x4,
    ShipKind::Ship1x3,
    ShipKind::Ship2x3,
    ShipKind::Ship1x2,
];

impl ShipKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShipKind::Ship1x4 => "ship_1x4",
            ShipKind::Ship1x3 => "ship_1x3",
            ShipKind::Ship2x3 => "ship_2x3",
            ShipKind::Ship1x2 => "ship_1x2",
        }
    }

    pub fn from_name(name: &str) -> Option<ShipKind> {
        FLEET.into_iter().find(|kind| kind.name() == name)
    }

    /// The long side of the ship.
    pub fn length(&self) -> i8 {
        match self {
            ShipKind::Ship1x4 => 4,
            ShipKind::Ship1x3 | ShipKind::Ship2x3 => 3,
            ShipKind::Ship1x2 => 2,
        }
    }

    /// The short side of the ship.
    pub fn width(&self) -> i8 {
        match self {
            ShipKind::Ship2x3 => 2,
            _ => 1,
        }
    }

    /// The cells covered when the top-left cell is at `anchor`, in row-major order.
    ///
    /// The cells are not checked against the board bounds.
    pub fn cells(&self, anchor: Coord, orientation: Orientation) -> Vec<Coord> {
        let (rows, cols) = match orientation {
            Orientation::Horizontal => (self.width(), self.length()),
            Orientation::Vertical => (self.length(), self.width()),
        };
        (0..rows)
            .flat_map(|d_row| (0..cols).map(move |d_col| anchor.offset((d_row, d_col))))
            .collect()
    }
}

impl std::fmt::Display for ShipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Which way the long side of a ship runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Along a row.
    #[serde(rename = "H")]
    Horizontal,
    /// Along a column.
    #[serde(rename = "V")]
    Vertical,
}

/// A ship as reported in the game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipRecord {
    pub name: ShipKind,
    /// Empty while the ship has not been placed.
    #[serde(default)]
    pub coordinates: Vec<Coord>,
    /// The subset of `coordinates` that has been hit.
    #[serde(default)]
    pub hits: Vec<Coord>,
}

impl ShipRecord {
    pub fn new(name: ShipKind, coordinates: Vec<Coord>) -> Self {
        Self {
            name,
            coordinates,
            hits: Vec::new(),
        }
    }

    pub fn is_placed(&self) -> bool {
        !self.coordinates.is_empty()
    }

    /// See [`border`].
    pub fn border(&self) -> BTreeSet<Coord> {
        border(&self.coordinates)
    }
}

/// All on-board cells touching `cells` orthogonally or diagonally, excluding
/// `cells` themselves.
pub fn border(cells: &[Coord]) -> BTreeSet<Coord> {
    let mut border: BTreeSet<Coord> = cells.iter().flat_map(|c| c.surrounding()).collect();
    for cell in cells {
        border.remove(cell);
    }
    border
}
