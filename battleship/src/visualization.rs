use crate::{CellState, Coord, Grid, BOARD_SIZE};

/// Draws a grid with row and column numbers, optionally marking some cells
/// (e.g. the chosen targets) with `◎`.
pub fn visualize_grid(grid: &Grid, marked: &[Coord]) -> String {
    let mut result = String::from("   ");
    for col in 0..BOARD_SIZE {
        result += &format!(" {}", col);
    }
    result += "\n  ╭";
    for _ in 0..BOARD_SIZE {
        result += "──";
    }
    result += "─╮\n";
    for row in 0..BOARD_SIZE {
        result += &format!("{:>2}│", row);
        for col in 0..BOARD_SIZE {
            let coord = Coord::new(row, col);
            let symbol = if marked.contains(&coord) {
                '◎'
            } else {
                match grid.get(coord).unwrap_or_default() {
                    CellState::NotFired => '·',
                    CellState::Hit => '✕',
                    CellState::Miss => '○',
                    CellState::Blocked => '█',
                }
            };
            result += &format!(" {}", symbol);
        }
        result += " │\n";
    }
    result += "  ╰";
    for _ in 0..BOARD_SIZE {
        result += "──";
    }
    result += "─╯";
    result
}
