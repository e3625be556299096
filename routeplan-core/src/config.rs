/// Tolerances and coordinate-window limits threaded through construction and
/// predicates instead of hard-coded constants.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlanningConfig {
    /// Absolute tolerance for coordinate/point equality.
    pub epsilon_point: f64,
    /// Slack subtracted from a disk's radius when testing segment clearance.
    pub epsilon_clear: f64,
    /// Coordinates are expected to lie within `[-coordinate_bound, coordinate_bound]`.
    pub coordinate_bound: f64,
    /// Largest disk radius the scene validator accepts.
    pub max_radius: f64,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        PlanningConfig {
            epsilon_point: 1e-5,
            epsilon_clear: 1e-4,
            coordinate_bound: 1000.0,
            max_radius: 1000.0,
        }
    }
}
