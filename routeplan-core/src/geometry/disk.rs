use serde::{Deserialize, Serialize};

use super::point::Point;
use crate::error::{Error, Result};

/// A circular obstacle. Invariant: `radius > 0`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Disk {
    pub center: Point,
    pub radius: f64,
}

impl Disk {
    pub fn new(center: Point, radius: f64) -> Result<Self> {
        if !(radius > 0.0) {
            return Err(Error::invalid_geometry(format!(
                "disk radius must be positive, got {radius}"
            )));
        }
        Ok(Disk { center, radius })
    }
}

/// A disk's identity, used to annotate visibility nodes that sit on a disk
/// boundary. Disks are compared by position within the scene's obstacle
/// list, not by value, since two disks may coincide geometrically.
pub type DiskId = usize;
