use anyhow::Context;
use clap::Parser;
use log::{debug, info};
use pathfinder::SolverEngine;
use rand::{SeedableRng, rngs::SmallRng};

use crate::{
    args::Args,
    record::JsonRecord,
    render::{GridTable, RenderCfg, SolutionTable},
};

mod args;
mod record;
mod render;

fn main() -> anyhow::Result<()> {
    let env = env_logger::Env::new()
        .filter_or("CHEAPEST_PATH_LOG", "warn")
        .write_style("CHEAPEST_PATH_LOG_STYLE");
    env_logger::init_from_env(env);

    let args = Args::parse();
    debug!("options: {:?}", args);

    let spec = args.grid_spec().context("invalid grid options")?;
    let kind = args.strategy;

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let grid = spec.build(&mut rng);

    let eng = SolverEngine::new(kind);
    let path = eng.solve(&grid);
    info!(
        "{kind} path through {}x{} grid costs {}",
        spec.rows(),
        spec.columns(),
        path.total_cost(&grid)
    );

    if args.json {
        let rec = JsonRecord::new(&spec, kind, args.seed, &grid, &path);
        println!("{}", serde_json::to_string(&rec)?);
        return Ok(());
    }

    let cfg = RenderCfg::default();
    println!(
        "\nYou requested a {} x {} grid for this brain teaser.",
        spec.rows(),
        spec.columns()
    );
    println!("{}", GridTable { grid: &grid, cfg: &cfg });
    println!(
        "{}",
        SolutionTable {
            grid: &grid,
            path: &path,
            cfg: &cfg
        }
    );

    Ok(())
}
