use std::fmt;

use itertools::Itertools;
use miette::Diagnostic;
use thiserror::Error;

use crate::coord::Coordinate;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum GridError {
    #[error("row index {index} out of bounds for a grid with {rows} rows")]
    #[diagnostic(code(grid::row_out_of_bounds))]
    RowOutOfBounds { index: isize, rows: usize },

    #[error("column index {index} out of bounds for a grid with {cols} columns")]
    #[diagnostic(code(grid::column_out_of_bounds))]
    ColumnOutOfBounds { index: isize, cols: usize },

    #[error("row has {found} cells but the grid is {expected} columns wide")]
    #[diagnostic(
        code(grid::malformed_row),
        help("every row of a grid must have the same length")
    )]
    MalformedRow { expected: usize, found: usize },

    #[error("column has {found} cells but the grid is {expected} rows tall")]
    #[diagnostic(code(grid::malformed_column))]
    MalformedColumn { expected: usize, found: usize },
}

/// Widens an unsigned index for error reporting.
fn signed(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}

/// A dense, rectangular, row-major grid.
///
/// The grid starts empty and grows one row (or column) at a time; the first
/// row fixes the width. Every accessor is bounds-checked and reports a
/// [`GridError`] instead of panicking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Grid<T> {
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Builds a grid by appending `rows` in order, failing on the first row
    /// whose width disagrees with the first one.
    pub fn from_rows<I>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = Vec<T>>,
    {
        let mut grid = Self::new();
        for row in rows {
            grid.append_row(row)?;
        }
        Ok(grid)
    }

    pub fn row_size(&self) -> usize {
        self.rows
    }

    pub fn col_size(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    fn check_row(&self, row: usize) -> Result<(), GridError> {
        if row >= self.rows {
            return Err(GridError::RowOutOfBounds {
                index: signed(row),
                rows: self.rows,
            });
        }
        Ok(())
    }

    fn check_col(&self, col: usize) -> Result<(), GridError> {
        if col >= self.cols {
            return Err(GridError::ColumnOutOfBounds {
                index: signed(col),
                cols: self.cols,
            });
        }
        Ok(())
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize, GridError> {
        self.check_row(row)?;
        self.check_col(col)?;
        Ok(row * self.cols + col)
    }

    fn coord_offset(&self, coord: Coordinate) -> Result<usize, GridError> {
        let row = usize::try_from(coord.row).map_err(|_| GridError::RowOutOfBounds {
            index: coord.row,
            rows: self.rows,
        })?;
        let col = usize::try_from(coord.col).map_err(|_| GridError::ColumnOutOfBounds {
            index: coord.col,
            cols: self.cols,
        })?;
        self.offset(row, col)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<&T, GridError> {
        let offset = self.offset(row, col)?;
        Ok(&self.cells[offset])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, GridError> {
        let offset = self.offset(row, col)?;
        Ok(&mut self.cells[offset])
    }

    pub fn set(&mut self, row: usize, col: usize, item: T) -> Result<(), GridError> {
        *self.get_mut(row, col)? = item;
        Ok(())
    }

    pub fn get_by_coord(&self, coord: Coordinate) -> Result<&T, GridError> {
        let offset = self.coord_offset(coord)?;
        Ok(&self.cells[offset])
    }

    pub fn set_by_coord(&mut self, coord: Coordinate, item: T) -> Result<(), GridError> {
        let offset = self.coord_offset(coord)?;
        self.cells[offset] = item;
        Ok(())
    }

    /// Whether [`Grid::get_by_coord`] would succeed for `coord`.
    pub fn coord_in_grid(&self, coord: Coordinate) -> bool {
        self.coord_offset(coord).is_ok()
    }

    pub fn get_row(&self, index: usize) -> Result<&[T], GridError> {
        self.check_row(index)?;
        let start = index * self.cols;
        Ok(&self.cells[start..start + self.cols])
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |row| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Every in-grid coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.cols).map(move |col| Coordinate::new(signed(row), signed(col)))
        })
    }

    /// Inserts `row` before `index`; `index == row_size()` appends.
    pub fn insert_row(&mut self, index: usize, row: Vec<T>) -> Result<(), GridError> {
        if index > self.rows {
            return Err(GridError::RowOutOfBounds {
                index: signed(index),
                rows: self.rows,
            });
        }
        if self.rows == 0 {
            self.cols = row.len();
        } else if row.len() != self.cols {
            return Err(GridError::MalformedRow {
                expected: self.cols,
                found: row.len(),
            });
        }

        let at = index * self.cols;
        self.cells.splice(at..at, row);
        self.rows += 1;
        Ok(())
    }

    pub fn append_row(&mut self, row: Vec<T>) -> Result<(), GridError> {
        self.insert_row(self.rows, row)
    }

    /// Inserts `column` before column `index`; `index == col_size()` appends.
    ///
    /// On an empty grid the column becomes a one-wide grid of
    /// `column.len()` rows.
    pub fn insert_column(&mut self, index: usize, column: Vec<T>) -> Result<(), GridError> {
        if index > self.cols {
            return Err(GridError::ColumnOutOfBounds {
                index: signed(index),
                cols: self.cols,
            });
        }
        if self.rows == 0 {
            if !column.is_empty() {
                self.rows = column.len();
                self.cols = 1;
                self.cells = column;
            }
            return Ok(());
        }
        if column.len() != self.rows {
            return Err(GridError::MalformedColumn {
                expected: self.rows,
                found: column.len(),
            });
        }

        // Last row first so the offsets of earlier rows stay valid.
        for (row, item) in column.into_iter().enumerate().rev() {
            self.cells.insert(row * self.cols + index, item);
        }
        self.cols += 1;
        Ok(())
    }

    pub fn append_column(&mut self, column: Vec<T>) -> Result<(), GridError> {
        self.insert_column(self.cols, column)
    }

    /// A grid of the same shape with `f` applied to every cell.
    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            cells: self.cells.iter().map(f).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<T: Clone> Grid<T> {
    pub fn get_column(&self, index: usize) -> Result<Vec<T>, GridError> {
        self.check_col(index)?;
        Ok(self
            .cells
            .iter()
            .skip(index)
            .step_by(self.cols)
            .cloned()
            .collect())
    }

    pub fn set_row(&mut self, index: usize, row: &[T]) -> Result<(), GridError> {
        self.check_row(index)?;
        if row.len() != self.cols {
            return Err(GridError::MalformedRow {
                expected: self.cols,
                found: row.len(),
            });
        }
        let start = index * self.cols;
        self.cells[start..start + self.cols].clone_from_slice(row);
        Ok(())
    }

    pub fn set_column(&mut self, index: usize, column: &[T]) -> Result<(), GridError> {
        self.check_col(index)?;
        if column.len() != self.rows {
            return Err(GridError::MalformedColumn {
                expected: self.rows,
                found: column.len(),
            });
        }
        for (row, item) in column.iter().enumerate() {
            self.cells[row * self.cols + index] = item.clone();
        }
        Ok(())
    }
}

impl<T: PartialEq> Grid<T> {
    /// `false` when `index` is not a row of the grid.
    pub fn row_contains(&self, index: usize, item: &T) -> bool {
        self.get_row(index)
            .map(|row| row.contains(item))
            .unwrap_or(false)
    }

    /// `false` when `index` is not a column of the grid.
    pub fn col_contains(&self, index: usize, item: &T) -> bool {
        if index >= self.cols {
            return false;
        }
        self.cells.iter().skip(index).step_by(self.cols).any(|cell| cell == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.cells.contains(item)
    }

    /// Coordinates of every cell equal to `item`, in row-major order.
    pub fn search(&self, item: &T) -> Vec<Coordinate> {
        self.coords()
            .zip(&self.cells)
            .filter(|(_, cell)| *cell == item)
            .map(|(coord, _)| coord)
            .collect()
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row.iter().join(""))?;
        }
        Ok(())
    }
}
