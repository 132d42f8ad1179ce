//! Planarity, connectivity and layout services.
//!
//! Purpose
//! - The Greenberg check consumes these only through the traits below, so callers
//!   can plug in their own planarity or connectivity engine.
//! - Default implementations run in process:
//!   - `PathAddition`: path-addition planarity test that also returns a rotation system.
//!   - `Lowpoint`: Tarjan lowpoint DFS (articulation points, bridges, blocks).
//!   - `CircleLayout` / `FixedLayout`: coordinates for display only.
//!
//! The layout side never feeds the verdict; it only picks an outer face for display,
//! falling back to the largest face when the hull cannot be used.

mod connectivity;
mod layout;
mod planarity;

use std::collections::HashSet;

use crate::embedding::RotationSystem;
use crate::graph::{Edge, Graph};

pub(crate) use connectivity::lowpoint_scan;
pub use connectivity::Lowpoint;
pub use layout::{
    convex_hull, hull_outer_face, select_outer_face, CircleLayout, FixedLayout, LayoutError,
    LayoutOracle, OuterFace, OuterFaceSource, Positions,
};
pub use planarity::PathAddition;

/// Planarity test plus a combinatorial embedding when one exists.
pub trait PlanarityOracle {
    /// A planar rotation system, or `None` if the graph is not planar.
    fn embedding(&self, g: &Graph) -> Option<RotationSystem>;

    fn is_planar(&self, g: &Graph) -> bool {
        self.embedding(g).is_some()
    }
}

/// Connectivity queries used by the orchestrator.
pub trait ConnectivityOracle {
    fn is_connected(&self, g: &Graph) -> bool;
    fn is_biconnected(&self, g: &Graph) -> bool;
    fn bridges(&self, g: &Graph) -> HashSet<Edge>;
}
