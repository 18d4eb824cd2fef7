use pursuit_ai::config::{Cli, Config};
use pursuit_ai::maze::Maze;
use pursuit_ai::problem::{PositionSearchProblem, SearchProblem};
use pursuit_ai::search::{
    a_star_search, breadth_first_search, depth_first_search, manhattan_heuristic, null_heuristic,
    uniform_cost_search,
};
use pursuit_ai::stat::Stats;

use anyhow::{bail, Context};
use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::time::Instant;
use tracing::{info, Level};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .init();
    let cli = Cli::parse();

    let config = if let Some(config_file) = cli.config.as_ref() {
        let config_str = std::fs::read_to_string(config_file)?;
        Config::from_yaml_str(&config_str)
            .with_context(|| format!("error with config file: {config_file}"))?
    } else {
        info!("No config file specified, using default config");
        Config::default()
    }
    .override_from_command_line(&cli)?;

    let maze = Maze::from_file(&config.layout_path)
        .with_context(|| format!("error loading layout: {}", config.layout_path))?;
    let start = maze.player_spawn().context("layout has no player spawn")?;
    let goal = match config.goal {
        Some(goal) => goal,
        None => {
            let mut rng = StdRng::seed_from_u64(config.seed);
            *maze
                .food()
                .choose(&mut rng)
                .context("layout has no food to use as a goal")?
        }
    };
    info!(
        "searching {:?} -> {:?} with {}",
        start, goal, config.algorithm
    );

    let problem = PositionSearchProblem::new(maze, start, goal);
    let mut stats = Stats::default();
    let solve_start = Instant::now();
    let plan = match config.algorithm.as_str() {
        "dfs" => depth_first_search(&problem, &mut stats),
        "bfs" => breadth_first_search(&problem, &mut stats),
        "ucs" => uniform_cost_search(&problem, &mut stats),
        "astar" => match config.heuristic.as_str() {
            "manhattan" => a_star_search(&problem, manhattan_heuristic, &mut stats),
            _ => a_star_search(&problem, null_heuristic::<PositionSearchProblem>, &mut stats),
        },
        _ => unreachable!(),
    };
    stats.time_us = solve_start.elapsed().as_micros() as usize;

    if plan.is_empty() && !problem.is_goal(&problem.start_state()) {
        bail!("no plan from {start:?} to {goal:?}");
    }
    stats.plan_cost = problem.cost_of_path(&plan);
    if !stats.plan_cost.is_finite() {
        bail!("planned actions walk into a wall");
    }

    info!("plan: {plan:?}");
    stats.print();
    Ok(())
}
