use std::fmt;

use crate::cells::GridCoordinate;
use crate::units::{ColumnIndex, ColumnsCount, RowIndex, RowsCount};

/// Visits every coordinate of a rows x columns grid in row-major order.
#[derive(Copy, Clone)]
pub struct GridCellIter {
    columns: ColumnsCount,
    current_cell_number: usize,
    cells_count: usize,
}

impl GridCellIter {
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> GridCellIter {
        GridCellIter {
            columns,
            current_cell_number: 0,
            cells_count: rows.0 * columns.0,
        }
    }
}

impl fmt::Debug for GridCellIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "CellIter :: current_cell_number: {:?}, cells_count: {:?}",
               self.current_cell_number,
               self.cells_count)
    }
}

impl ExactSizeIterator for GridCellIter {} // default impl using size_hint()
impl Iterator for GridCellIter {
    type Item = GridCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let ColumnsCount(columns) = self.columns;
            let coord = GridCoordinate::new(self.current_cell_number / columns,
                                            self.current_cell_number % columns);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

/// Yields the coordinates of one grid row at a time, top row first.
#[derive(Debug, Copy, Clone)]
pub struct GridRowIter {
    current_index: usize,
    rows_size: RowsCount,
    row_length: ColumnsCount,
}

impl GridRowIter {
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> GridRowIter {
        GridRowIter {
            current_index: 0,
            rows_size: rows,
            row_length: columns,
        }
    }
}

impl ExactSizeIterator for GridRowIter {}
impl Iterator for GridRowIter {
    type Item = Vec<GridCoordinate>;
    fn next(&mut self) -> Option<Self::Item> {
        let RowsCount(count) = self.rows_size;
        if self.current_index < count {
            let ColumnsCount(length) = self.row_length;
            let coords = (0..length)
                .map(|i: usize| {
                    GridCoordinate::from_row_column_indices(RowIndex(self.current_index),
                                                            ColumnIndex(i))
                })
                .collect();
            self.current_index += 1;
            Some(coords)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rows_size.0 - self.current_index;
        (remaining, Some(remaining))
    }
}
