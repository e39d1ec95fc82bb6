//! Minimum-cost path resolution.
//!
//! A forward pass records, for every cell, the cheapest accumulated cost of
//! reaching it from the start. The backward walk then uses those totals in
//! place of the direct neighbour costs, which makes the result globally
//! minimal.

use log::debug;

use crate::{
    cell::Cell,
    grid::Grid,
    path::{self, Path},
};

/// `acc[r][c]` is the cheapest total cost of any monotone path from the
/// start to `(r, c)`, counting both ends.
pub fn accumulated_costs(grid: &Grid) -> Vec<Vec<u64>> {
    let (rows, columns) = (grid.rows(), grid.columns());
    let mut acc = vec![vec![0u64; columns]; rows];

    for r in 0..rows {
        for c in 0..columns {
            let cell = Cell::new(r, c);
            let best_prev = match (cell.above(), cell.left()) {
                (None, None) => 0,
                (Some(a), None) => acc[a.row][a.column],
                (None, Some(l)) => acc[l.row][l.column],
                (Some(a), Some(l)) => acc[a.row][a.column].min(acc[l.row][l.column]),
            };
            acc[r][c] = best_prev + u64::from(grid.cost(cell));
        }
    }
    acc
}

pub fn resolve_optimal_path(grid: &Grid) -> Path {
    let acc = accumulated_costs(grid);
    let path = path::walk_back(grid.end(), |c| acc[c.row][c.column]);
    debug!(
        "optimal path of {} cells, cost {}",
        path.len(),
        path.total_cost(grid)
    );
    path
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MinCostDp;

impl MinCostDp {
    pub fn solve(&self, grid: &Grid) -> Path {
        resolve_optimal_path(grid)
    }
}
