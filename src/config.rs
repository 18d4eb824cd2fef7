use anyhow::anyhow;
use clap::Parser;
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(
    name = "Pursuit AI",
    about = "Graph search and adversarial decision algorithms over grid pursuit layouts.",
    version = "1.0"
)]
pub struct Cli {
    #[arg(long, help = "Path to a YAML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Path to the ASCII layout file")]
    pub layout_path: Option<String>,

    #[arg(long, help = "Search algorithm to run (dfs, bfs, ucs, astar)")]
    pub algorithm: Option<String>,

    #[arg(long, help = "Heuristic for astar (null, manhattan)")]
    pub heuristic: Option<String>,

    #[arg(long, help = "Goal row (defaults to a random food cell)")]
    pub goal_row: Option<i32>,

    #[arg(long, help = "Goal column (defaults to a random food cell)")]
    pub goal_col: Option<i32>,

    #[arg(long, help = "Seed for the random number generator")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub layout_path: String,
    pub algorithm: String,
    pub heuristic: String,
    pub goal: Option<(i32, i32)>,
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            layout_path: "layouts/medium.lay".to_string(),
            algorithm: "bfs".to_string(),
            heuristic: "null".to_string(),
            goal: None,
            seed: 0,
        }
    }
}

impl Config {
    pub fn from_yaml_str(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    pub fn override_from_command_line(mut self, cli: &Cli) -> anyhow::Result<Self> {
        if let Some(layout_path) = &cli.layout_path {
            self.layout_path = layout_path.clone();
        }
        if let Some(algorithm) = &cli.algorithm {
            self.algorithm = algorithm.clone();
        }
        if let Some(heuristic) = &cli.heuristic {
            self.heuristic = heuristic.clone();
        }
        match (cli.goal_row, cli.goal_col) {
            (Some(row), Some(col)) => self.goal = Some((row, col)),
            (None, None) => {}
            _ => return Err(anyhow!("--goal-row and --goal-col must be given together")),
        }
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        match self.algorithm.as_str() {
            "dfs" | "bfs" | "ucs" | "astar" => {}
            other => return Err(anyhow!("unknown algorithm {other:?}")),
        }
        match self.heuristic.as_str() {
            "null" | "manhattan" => {}
            other => return Err(anyhow!("unknown heuristic {other:?}")),
        }
        Ok(())
    }
}
