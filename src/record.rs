use pathfinder::{Grid, GridSpec, Kind, Path};
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct JsonRecord<'a> {
    pub schema: &'static str,
    pub rows: usize,
    pub columns: usize,
    pub max_value: u32,
    pub strategy: Kind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub grid: &'a [Vec<u32>],
    pub path: &'a Path,
    pub total_cost: u64,
}

impl<'a> JsonRecord<'a> {
    pub fn new(
        spec: &GridSpec,
        strategy: Kind,
        seed: Option<u64>,
        grid: &'a Grid,
        path: &'a Path,
    ) -> Self {
        Self {
            schema: "v1",
            rows: spec.rows(),
            columns: spec.columns(),
            max_value: spec.max_value(),
            strategy,
            seed,
            grid: grid.as_rows(),
            path,
            total_cost: path.total_cost(grid),
        }
    }
}
