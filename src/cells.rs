use smallvec::SmallVec;
use std::convert::From;

use crate::units::{ColumnIndex, RowIndex};

/// The terrain at one grid position.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum CellKind {
    Wall,
    Open,
    Exit,
}

impl CellKind {
    /// Can the wave travel through a cell of this kind?
    #[inline]
    pub fn is_passable(self) -> bool {
        match self {
            CellKind::Wall => false,
            CellKind::Open | CellKind::Exit => true,
        }
    }

    /// Symbol written by the text format.
    pub fn symbol(self) -> char {
        match self {
            CellKind::Wall => '■',
            CellKind::Open => ' ',
            CellKind::Exit => 'X',
        }
    }

    /// Inverse of `symbol`, also accepting the ascii friendly `#` and `.` for walls and passages.
    pub fn from_symbol(symbol: char) -> Option<CellKind> {
        match symbol {
            '■' | '#' => Some(CellKind::Wall),
            ' ' | '.' => Some(CellKind::Open),
            'X' => Some(CellKind::Exit),
            _ => None,
        }
    }
}

/// Zero based (row, column) grid position.
///
/// The derived ordering is row-major, the same order a grid scan visits positions in.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub row: usize,
    pub col: usize,
}

impl GridCoordinate {
    pub fn new(row: usize, col: usize) -> GridCoordinate {
        GridCoordinate { row, col }
    }

    pub fn from_row_column_indices(row_index: RowIndex, col_index: ColumnIndex) -> GridCoordinate {
        GridCoordinate::new(row_index.0, col_index.0)
    }

    /// Are the two coordinates exactly one step apart along a single axis?
    pub fn is_adjacent(self, other: GridCoordinate) -> bool {
        let row_diff = if self.row > other.row { self.row - other.row } else { other.row - self.row };
        let col_diff = if self.col > other.col { self.col - other.col } else { other.col - self.col };
        row_diff + col_diff == 1
    }
}

impl From<(usize, usize)> for GridCoordinate {
    fn from(row_col_pair: (usize, usize)) -> GridCoordinate {
        GridCoordinate::new(row_col_pair.0, row_col_pair.1)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

/// Neighbour check order: right, down, left, up.
pub const NEIGHBOUR_DIRECTIONS: [CompassPrimary; 4] = [CompassPrimary::East,
                                                       CompassPrimary::South,
                                                       CompassPrimary::West,
                                                       CompassPrimary::North];

pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;

/// Creates a new coordinate offset 1 cell away in the given direction.
/// Returns None if the coordinate is not representable (a negative row or column), there is
/// no check against any grid's dimensions.
pub fn offset_coordinate(coord: GridCoordinate, dir: CompassPrimary) -> Option<GridCoordinate> {
    let GridCoordinate { row, col } = coord;
    match dir {
        CompassPrimary::North => row.checked_sub(1).map(|r| GridCoordinate::new(r, col)),
        CompassPrimary::South => row.checked_add(1).map(|r| GridCoordinate::new(r, col)),
        CompassPrimary::East => col.checked_add(1).map(|c| GridCoordinate::new(row, c)),
        CompassPrimary::West => col.checked_sub(1).map(|c| GridCoordinate::new(row, c)),
    }
}

/// The up/down/left/right positions around `coord` in `NEIGHBOUR_DIRECTIONS` order.
///
/// Positions outside of a grid are kept, filtering them is the caller's job.
pub fn neighbours4(coord: GridCoordinate) -> CoordinateSmallVec {
    NEIGHBOUR_DIRECTIONS.iter()
        .filter_map(|dir| offset_coordinate(coord, *dir))
        .collect()
}
