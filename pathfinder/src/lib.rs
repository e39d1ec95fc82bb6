//! Random cost grids and right/down paths through them.

pub mod cell;
pub mod greedy;
pub mod grid;
pub mod optimal;
pub mod path;
pub mod solver;

pub use cell::Cell;
pub use greedy::resolve_path;
pub use grid::{Grid, GridError, GridSpec, MAX_COST, build_grid};
pub use optimal::resolve_optimal_path;
pub use path::Path;
pub use solver::{Kind, SolverEngine};
