mod scene_format;

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use routeplan_core::{plan_tour, AlgorithmChoice, PlanningConfig, RouteAtom};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "routeplan")]
#[command(about = "Plans an obstacle-avoiding tour over a scene file", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a tour over a persisted scene file and print the result.
    Plan {
        /// Path to a `|`-delimited scene file.
        scene: PathBuf,

        /// Which TSP strategy to run.
        #[arg(long, value_enum, default_value = "branch-and-bound")]
        algorithm: Algorithm,

        /// Path to a TOML file overriding `PlanningConfig` tolerances.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Algorithm {
    BruteForce,
    BranchAndBound,
}

impl From<Algorithm> for AlgorithmChoice {
    fn from(value: Algorithm) -> Self {
        match value {
            Algorithm::BruteForce => AlgorithmChoice::BruteForce,
            Algorithm::BranchAndBound => AlgorithmChoice::BranchAndBound,
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<PlanningConfig> {
    match path {
        None => Ok(PlanningConfig::default()),
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
        }
    }
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Plan { scene, algorithm, config } => {
                let text = std::fs::read_to_string(&scene).with_context(|| format!("reading scene {}", scene.display()))?;
                let planning_config = load_config(config.as_ref())?;
                let parsed = scene_format::parse_scene(&text, planning_config.epsilon_point)
                    .with_context(|| format!("parsing scene {}", scene.display()))?;

                tracing::info!(
                    control_points = parsed.control_points.len(),
                    obstacles = parsed.obstacles.len(),
                    "scene loaded"
                );

                let result = plan_tour(&parsed, algorithm.into(), &planning_config)?;

                println!("tour: {}", format_tour(&result.tour_indices));
                println!("total length: {:.6}", result.total_length);
                println!("atoms:");
                for atom in result.route.atoms() {
                    match atom {
                        RouteAtom::Segment(s) => {
                            println!(
                                "  segment ({:.3}, {:.3}) -> ({:.3}, {:.3}), length {:.6}",
                                s.start.x,
                                s.start.y,
                                s.end.x,
                                s.end.y,
                                s.length()
                            );
                        }
                        RouteAtom::Arc(a) => {
                            println!(
                                "  arc center ({:.3}, {:.3}) radius {:.3}, length {:.6}",
                                a.center.x,
                                a.center.y,
                                a.radius,
                                a.length()
                            );
                        }
                    }
                }
                Ok(())
            }
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("routeplan=info".parse().unwrap()))
        .init();

    Cli::parse().run()
}

fn format_tour(indices: &[usize]) -> String {
    let mut out = String::new();
    for (i, idx) in indices.iter().enumerate() {
        if i > 0 {
            out.push_str(" -> ");
        }
        let _ = write!(out, "{idx}");
    }
    out
}
