use clap::Parser;
use pathfinder::{GridError, GridSpec, Kind};

/// Each cell of the grid gets a random cost. Start at the upper-left cell,
/// end at the bottom-right one, moving only down or right.
#[derive(Parser, Debug)]
#[command(name = "cheapest-path", version, about, long_about = None)]
pub struct Args {
    /// Number of rows in the grid
    #[arg(short, long, default_value_t = 5)]
    pub rows: usize,

    /// Number of columns in the grid
    #[arg(short, long, default_value_t = 5)]
    pub columns: usize,

    /// Max value of each cell, between 1 and 99
    #[arg(short, long, default_value_t = 9)]
    pub max_value: u32,

    /// How the path is resolved: greedy or optimal
    #[arg(short, long, default_value_t = Kind::Greedy)]
    pub strategy: Kind,

    /// Seed for the cost generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print a JSON record instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl Args {
    pub fn grid_spec(&self) -> Result<GridSpec, GridError> {
        GridSpec::new(self.rows, self.columns, self.max_value)
    }
}
