use log::trace;
use serde::Serialize;

use crate::{cell::Cell, grid::Grid};

/// Monotone (right/down) sequence of cells from the start of a grid to its end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn start(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    pub fn end(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Sum of the costs of every cell on the path, start and end included.
    pub fn total_cost(&self, grid: &Grid) -> u64 {
        self.iter().map(|&c| u64::from(grid.cost(c))).sum()
    }

    /// True if the path runs from `grid`'s start to its end in unit right/down steps.
    pub fn is_valid_for(&self, grid: &Grid) -> bool {
        self.start() == Some(grid.start())
            && self.end() == Some(grid.end())
            && self.cells.windows(2).all(|w| {
                let (a, b) = (w[0], w[1]);
                (b.row == a.row && b.column == a.column + 1)
                    || (b.column == a.column && b.row == a.row + 1)
            })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }
}

/// Predecessor of `cell` on a backward walk. First row always steps left,
/// first column always steps up. Elsewhere the step goes up only when the
/// left neighbour weighs strictly more than the one above; ties go left.
/// The origin is its own predecessor.
pub(crate) fn step_back(cell: Cell, weight: impl Fn(Cell) -> u64) -> Cell {
    match (cell.above(), cell.left()) {
        (None, None) => cell,
        (None, Some(left)) => left,
        (Some(above), None) => above,
        (Some(above), Some(left)) => {
            if weight(left) > weight(above) {
                above
            } else {
                left
            }
        }
    }
}

/// Walks back from `end` to the origin with [`step_back`] and returns the
/// cells in start-to-end order.
pub(crate) fn walk_back(end: Cell, weight: impl Fn(Cell) -> u64) -> Path {
    let mut cells = Vec::with_capacity(end.rank() + 1);
    let mut cell = end;
    cells.push(cell);

    // rank drops by exactly one per step
    while !cell.is_origin() {
        cell = step_back(cell, &weight);
        trace!("stepped back to {cell}");
        cells.push(cell);
    }

    cells.reverse();
    Path { cells }
}
