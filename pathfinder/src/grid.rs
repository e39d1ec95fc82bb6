use std::fmt;

use log::debug;
use rand::Rng;
use thiserror::Error;

use crate::cell::Cell;

pub const MAX_COST: u32 = 99;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("you can't have a row size of 0")]
    ZeroRows,
    #[error("you can't have a column size of 0")]
    ZeroColumns,
    #[error("max value must be between 1 and 99, got {0}")]
    MaxValueOutOfRange(u32),
    #[error("grid has no cells")]
    Empty,
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Rectangular matrix of cell costs. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    costs: Vec<Vec<u32>>,
}

impl Grid {
    /// Wraps explicit rows. Only shape is checked; corner costs are taken as given.
    pub fn from_rows(costs: Vec<Vec<u32>>) -> Result<Self, GridError> {
        let expected = costs.first().map(Vec::len).unwrap_or(0);
        if expected == 0 {
            return Err(GridError::Empty);
        }
        if let Some((row, r)) = costs.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(GridError::Ragged {
                row,
                expected,
                found: r.len(),
            });
        }
        Ok(Self { costs })
    }

    pub fn rows(&self) -> usize {
        self.costs.len()
    }

    pub fn columns(&self) -> usize {
        self.costs[0].len()
    }

    pub fn start(&self) -> Cell {
        Cell::origin()
    }

    pub fn end(&self) -> Cell {
        Cell::new(self.rows() - 1, self.columns() - 1)
    }

    /// Cost of `cell`. Panics if the cell lies outside the grid.
    pub fn cost(&self, cell: Cell) -> u32 {
        self.costs[cell.row][cell.column]
    }

    pub fn as_rows(&self) -> &[Vec<u32>] {
        &self.costs
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.costs {
            for val in row {
                write!(f, "{} ", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Builds a `rows` x `columns` grid. Start and end cost 0; every other cell
/// gets an independent uniform draw from `1..=max_value`.
///
/// Arguments are not validated beyond debug assertions; go through
/// [`GridSpec`] when they come from outside.
pub fn build_grid<R: Rng>(
    rows: usize,
    columns: usize,
    max_value: u32,
    rng: &mut R,
) -> Grid {
    debug_assert!(rows >= 1 && columns >= 1);
    debug_assert!((1..=MAX_COST).contains(&max_value));

    let end = Cell::new(rows - 1, columns - 1);
    let costs: Vec<Vec<u32>> = (0..rows)
        .map(|r| {
            (0..columns)
                .map(|c| {
                    let cell = Cell::new(r, c);
                    if cell.is_origin() || cell == end {
                        0
                    } else {
                        rng.random_range(1..=max_value)
                    }
                })
                .collect()
        })
        .collect();

    debug!("built {rows}x{columns} grid with costs in 1..={max_value}");
    Grid { costs }
}

/// Validated grid dimensions and cost bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSpec {
    rows: usize,
    columns: usize,
    max_value: u32,
}

impl GridSpec {
    pub fn new(rows: usize, columns: usize, max_value: u32) -> Result<Self, GridError> {
        if rows == 0 {
            return Err(GridError::ZeroRows);
        }
        if columns == 0 {
            return Err(GridError::ZeroColumns);
        }
        if !(1..=MAX_COST).contains(&max_value) {
            return Err(GridError::MaxValueOutOfRange(max_value));
        }
        Ok(Self {
            rows,
            columns,
            max_value,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    pub fn build<R: Rng>(&self, rng: &mut R) -> Grid {
        build_grid(self.rows, self.columns, self.max_value, rng)
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            rows: 5,
            columns: 5,
            max_value: 9,
        }
    }
}
