use error_chain::bail;
use std::fmt;

use crate::cells::{self, CellKind, CoordinateSmallVec, GridCoordinate};
use crate::errors::*;
use crate::grid_iterators::{GridCellIter, GridRowIter};
use crate::units::{ColumnsCount, RowsCount};


/// Rectangular terrain of `CellKind`s addressed by zero based (row, column) coordinates.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<CellKind>,
    rows: RowsCount,
    columns: ColumnsCount,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: rows: {:?}, columns: {:?}, cells: {:?}",
               self.rows, self.columns, self.cells)
    }
}

impl Grid {
    /// A rows x columns grid of walls.
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<Grid> {
        let (RowsCount(rows_count), ColumnsCount(columns_count)) = (rows, columns);
        if rows_count < 1 || columns_count < 1 {
            bail!(ErrorKind::InvalidDimensions(rows_count, columns_count));
        }

        Ok(Grid {
            cells: vec![CellKind::Wall; rows_count * columns_count],
            rows,
            columns,
        })
    }

    /// Build a grid from rows of cells, e.g. the output of some external loader.
    ///
    /// Every row must have the same length as the first.
    pub fn from_rows(rows: Vec<Vec<CellKind>>) -> Result<Grid> {
        let rows_count = rows.len();
        let columns_count = rows.first().map_or(0, |first_row| first_row.len());
        if rows_count < 1 || columns_count < 1 {
            bail!(ErrorKind::InvalidDimensions(rows_count, columns_count));
        }

        let mut cells = Vec::with_capacity(rows_count * columns_count);
        for (row_index, row) in rows.into_iter().enumerate() {
            if row.len() != columns_count {
                bail!(ErrorKind::RaggedRows(row_index, columns_count, row.len()));
            }
            cells.extend(row);
        }

        Ok(Grid {
            cells,
            rows: RowsCount(rows_count),
            columns: ColumnsCount(columns_count),
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    /// The cell kind at `coord`, None when `coord` lies outside of the grid.
    #[inline]
    pub fn get(&self, coord: GridCoordinate) -> Option<CellKind> {
        self.coordinate_to_index(coord).map(|index| self.cells[index])
    }

    /// Write `kind` at `coord`.
    ///
    /// Writes outside of the grid are ignored. Carving code relies on being able to write
    /// blindly at the maze edges.
    #[inline]
    pub fn set(&mut self, coord: GridCoordinate, kind: CellKind) {
        if let Some(index) = self.coordinate_to_index(coord) {
            self.cells[index] = kind;
        }
    }

    /// Cell positions that are to the East, South, West or North of `coord`, in that order.
    /// They are not necessarily inside the grid.
    #[inline]
    pub fn neighbours4(coord: GridCoordinate) -> CoordinateSmallVec {
        cells::neighbours4(coord)
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        coord.row < self.rows.0 && coord.col < self.columns.0
    }

    /// Convert a grid coordinate to a one dimensional row-major index in the range 0...grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.row * self.columns.0 + coord.col)
        } else {
            None
        }
    }

    #[inline]
    pub fn iter(&self) -> GridCellIter {
        GridCellIter::new(self.rows, self.columns)
    }

    #[inline]
    pub fn iter_row(&self) -> GridRowIter {
        GridRowIter::new(self.rows, self.columns)
    }

    /// Count of the cells with the given kind.
    pub fn count_kind(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }
}
