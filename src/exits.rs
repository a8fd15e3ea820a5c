use std::error;
use std::fmt;

use crate::cells::{CellKind, GridCoordinate};
use crate::grid::Grid;

/// Why a grid has no solution before any wave is sent out.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Unsolvable {
    /// A maze needs exactly two exits, holds the number found.
    WrongExitCount(usize),
    /// Walls on every side of the exit inside the grid.
    ExitEnclosed(GridCoordinate),
}

impl fmt::Display for Unsolvable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Unsolvable::WrongExitCount(count) => write!(f, "expected 2 exits, found {}", count),
            Unsolvable::ExitEnclosed(coord) => {
                write!(f, "exit at row {} column {} is walled in", coord.row, coord.col)
            }
        }
    }
}

impl error::Error for Unsolvable {}

/// All exit positions in row-major scan order.
pub fn find_exits(grid: &Grid) -> Vec<GridCoordinate> {
    grid.iter()
        .filter(|coord| grid.get(*coord) == Some(CellKind::Exit))
        .collect()
}

/// Is every neighbour of `coord` that lies inside the grid a wall?
///
/// Positions past the grid edges count neither way, so a corner exit is enclosed when its
/// two in-grid neighbours are walls.
pub fn is_enclosed(grid: &Grid, coord: GridCoordinate) -> bool {
    Grid::neighbours4(coord)
        .iter()
        .filter_map(|neighbour| grid.get(*neighbour))
        .all(|kind| kind == CellKind::Wall)
}

/// Check the grid has two exits that are not walled in, returning them as (start, end) in
/// scan order.
pub fn validate(grid: &Grid) -> Result<(GridCoordinate, GridCoordinate), Unsolvable> {
    let exits = find_exits(grid);
    if exits.len() != 2 {
        return Err(Unsolvable::WrongExitCount(exits.len()));
    }

    let (start, end) = (exits[0], exits[1]);
    for exit in &[start, end] {
        if is_enclosed(grid, *exit) {
            return Err(Unsolvable::ExitEnclosed(*exit));
        }
    }

    Ok((start, end))
}
