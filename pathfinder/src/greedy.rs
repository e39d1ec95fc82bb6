//! Backward greedy path resolution.
//!
//! Each step looks only at the direct cost of the two neighbours it could
//! have come from, not at what it took to reach them. The result is always
//! a valid monotone path but not necessarily the cheapest one; see
//! [`crate::optimal`] for that.

use log::debug;

use crate::{
    cell::Cell,
    grid::Grid,
    path::{self, Path},
};

/// Predecessor of `cell` using direct neighbour costs.
pub fn choose_predecessor(grid: &Grid, cell: Cell) -> Cell {
    path::step_back(cell, |c| u64::from(grid.cost(c)))
}

/// Resolves a path from the grid's end back to its start, one cheapest
/// neighbour at a time, and returns it start-to-end.
pub fn resolve_path(grid: &Grid) -> Path {
    let path = path::walk_back(grid.end(), |c| u64::from(grid.cost(c)));
    debug!(
        "greedy path of {} cells, cost {}",
        path.len(),
        path.total_cost(grid)
    );
    path
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyBacktracking;

impl GreedyBacktracking {
    pub fn solve(&self, grid: &Grid) -> Path {
        resolve_path(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: Vec<Vec<u32>>) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    fn cells(coords: &[(usize, usize)]) -> Vec<Cell> {
        coords.iter().map(|&(r, c)| Cell::new(r, c)).collect()
    }

    #[test]
    fn two_by_two_goes_left_then_up() {
        let g = grid(vec![vec![0, 5], vec![3, 0]]);
        assert_eq!(choose_predecessor(&g, Cell::new(1, 1)), Cell::new(1, 0));
        assert_eq!(choose_predecessor(&g, Cell::new(1, 0)), Cell::new(0, 0));
        assert_eq!(
            resolve_path(&g).cells(),
            cells(&[(0, 0), (1, 0), (1, 1)]).as_slice()
        );
    }

    #[test]
    fn two_by_two_goes_up_when_left_is_dearer() {
        let g = grid(vec![vec![0, 3], vec![5, 0]]);
        assert_eq!(
            resolve_path(&g).cells(),
            cells(&[(0, 0), (0, 1), (1, 1)]).as_slice()
        );
    }

    #[test]
    fn tie_picks_left() {
        let g = grid(vec![vec![0, 4], vec![4, 0]]);
        assert_eq!(choose_predecessor(&g, Cell::new(1, 1)), Cell::new(1, 0));
    }

    #[test]
    fn single_cell() {
        let g = grid(vec![vec![0]]);
        assert_eq!(resolve_path(&g).cells(), &[Cell::origin()]);
        assert_eq!(resolve_path(&g).total_cost(&g), 0);
    }

    #[test]
    fn single_row_takes_every_cell() {
        let g = grid(vec![vec![0, 9, 1, 9, 0]]);
        assert_eq!(
            resolve_path(&g).cells(),
            cells(&[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]).as_slice()
        );
    }

    #[test]
    fn single_column_takes_every_cell() {
        let g = grid(vec![vec![0], vec![7], vec![2], vec![0]]);
        assert_eq!(
            resolve_path(&g).cells(),
            cells(&[(0, 0), (1, 0), (2, 0), (3, 0)]).as_slice()
        );
    }

    #[test]
    fn compares_direct_costs_only() {
        let g = grid(vec![vec![0, 1, 50], vec![2, 50, 1], vec![9, 9, 0]]);
        let path = resolve_path(&g);
        assert_eq!(
            path.cells(),
            cells(&[(0, 0), (0, 1), (1, 1), (1, 2), (2, 2)]).as_slice()
        );
        assert_eq!(path.total_cost(&g), 52);
    }

    #[test]
    fn repeated_calls_agree() {
        let g = grid(vec![vec![0, 3, 8], vec![6, 2, 2], vec![1, 7, 0]]);
        assert_eq!(resolve_path(&g), resolve_path(&g));
    }
}
