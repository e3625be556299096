use serde::{Deserialize, Serialize};

use crate::geometry::{Arc, Segment};

/// A single piece of a route: either a straight run or a detour along a
/// disk's boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RouteAtom {
    Segment(Segment),
    Arc(Arc),
}

impl RouteAtom {
    pub fn length(&self) -> f64 {
        match self {
            RouteAtom::Segment(s) => s.length(),
            RouteAtom::Arc(a) => a.length(),
        }
    }
}

/// An ordered sequence of atoms between two points. `Route::unreachable`
/// represents the sentinel used when no finite-length path exists; its
/// `length()` is `f64::INFINITY` regardless of its (empty) atom list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    atoms: Vec<RouteAtom>,
    reachable: bool,
}

impl Route {
    pub fn empty() -> Self {
        Route {
            atoms: Vec::new(),
            reachable: true,
        }
    }

    pub fn unreachable() -> Self {
        Route {
            atoms: Vec::new(),
            reachable: false,
        }
    }

    pub fn from_atoms(atoms: Vec<RouteAtom>) -> Self {
        Route {
            atoms,
            reachable: true,
        }
    }

    pub fn atoms(&self) -> &[RouteAtom] {
        &self.atoms
    }

    pub fn is_reachable(&self) -> bool {
        self.reachable
    }

    pub fn length(&self) -> f64 {
        if !self.reachable {
            return f64::INFINITY;
        }
        self.atoms.iter().map(RouteAtom::length).sum()
    }

    /// Concatenates `other` onto the end of this route. Used when stitching
    /// pairwise routes into the final closed tour.
    pub fn extend(&mut self, other: &Route) {
        if !other.reachable {
            self.reachable = false;
            self.atoms.clear();
            return;
        }
        self.atoms.extend(other.atoms.iter().cloned());
    }
}
