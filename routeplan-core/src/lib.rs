pub mod config;
pub mod connectivity;
pub mod distance_table;
pub mod error;
pub mod geometry;
pub mod multi_vehicle;
pub mod plan;
pub mod route;
pub mod scene;
pub mod shortest_path;
pub mod tsp;
pub mod visibility;

pub use config::PlanningConfig;
pub use error::{Error, Result};
pub use plan::{plan_tour, PlanResult};
pub use route::{Route, RouteAtom};
pub use scene::Scene;
pub use tsp::AlgorithmChoice;
