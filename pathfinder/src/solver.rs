use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::{greedy::GreedyBacktracking, grid::Grid, optimal::MinCostDp, path::Path};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    #[default]
    Greedy,
    Optimal,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Greedy => "greedy",
            Kind::Optimal => "optimal",
        })
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown strategy `{0}`, expected `greedy` or `optimal`")]
pub struct UnknownKind(String);

impl FromStr for Kind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "greedy" => Ok(Kind::Greedy),
            "optimal" => Ok(Kind::Optimal),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

// One variant per resolver; both are stateless
enum SolverEnum {
    Greedy(GreedyBacktracking),
    Optimal(MinCostDp),
}

impl SolverEnum {
    fn solve(&self, grid: &Grid) -> Path {
        match self {
            SolverEnum::Greedy(a) => a.solve(grid),
            SolverEnum::Optimal(a) => a.solve(grid),
        }
    }
}

/// Resolves paths with the strategy picked by [`Kind`].
pub struct SolverEngine {
    kind: Kind,
    alg: SolverEnum,
}

impl SolverEngine {
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            alg: match kind {
                Kind::Greedy => SolverEnum::Greedy(GreedyBacktracking),
                Kind::Optimal => SolverEnum::Optimal(MinCostDp),
            },
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn solve(&self, grid: &Grid) -> Path {
        self.alg.solve(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{greedy::resolve_path, optimal::resolve_optimal_path};

    #[test]
    fn kind_parses_and_prints() {
        assert_eq!("greedy".parse::<Kind>(), Ok(Kind::Greedy));
        assert_eq!("Optimal".parse::<Kind>(), Ok(Kind::Optimal));
        assert!("dijkstra".parse::<Kind>().is_err());
        assert_eq!(Kind::Optimal.to_string(), "optimal");
        assert_eq!(Kind::default(), Kind::Greedy);
    }

    #[test]
    fn engine_dispatches_by_kind() {
        let g = Grid::from_rows(vec![vec![0, 1, 50], vec![2, 50, 1], vec![9, 9, 0]]).unwrap();

        let greedy = SolverEngine::new(Kind::Greedy);
        let optimal = SolverEngine::new(Kind::Optimal);

        assert_eq!(greedy.kind(), Kind::Greedy);
        assert_eq!(greedy.solve(&g), resolve_path(&g));
        assert_eq!(optimal.solve(&g), resolve_optimal_path(&g));
    }

    #[test]
    fn engine_solves_through_shared_reference() {
        let g = Grid::from_rows(vec![vec![0, 3, 8], vec![6, 2, 2], vec![1, 7, 0]]).unwrap();
        let engine = SolverEngine::new(Kind::Optimal);
        let shared = &engine;
        assert_eq!(shared.solve(&g), shared.solve(&g));
    }
}
