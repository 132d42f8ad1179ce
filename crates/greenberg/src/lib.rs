//! Greenberg's condition for planar graphs: face extraction and partition search.
//!
//! Pipeline
//! - `graph`: simple undirected graph store with a memoized face list.
//! - `oracle`: planarity/embedding, connectivity and layout services behind traits,
//!   with in-process defaults (`PathAddition`, `Lowpoint`, `CircleLayout`).
//! - `embedding`: rotation systems and dart-traversal face extraction.
//! - `greenberg`: the partition solver and the orchestrator producing a `Verdict`.
//!
//! Satisfying the condition is evidence for a Hamiltonian cycle, never a proof.

pub mod api;
pub mod embedding;
pub mod graph;
pub mod greenberg;
pub mod oracle;

#[cfg(test)]
pub(crate) mod fixtures;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use embedding::{extract_faces, Face, FaceSet, RotationSystem};
pub use graph::{Edge, Graph, GraphError};
pub use greenberg::{check_greenberg, CheckError, Eligibility, Partition, Verdict};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::embedding::{extract_faces, EmbeddingError, Face, FaceSet, RotationSystem};
    pub use crate::graph::{Edge, Graph, GraphError};
    pub use crate::greenberg::{
        check_eligibility, check_greenberg, dirac_condition, ore_condition, CheckError,
        CheckReport, Eligibility, GreenbergChecker, Partition, SearchBudget, SolverCfg,
        Strategy, Verdict,
    };
    pub use crate::oracle::{
        select_outer_face, CircleLayout, ConnectivityOracle, FixedLayout, LayoutOracle,
        Lowpoint, OuterFace, PathAddition, PlanarityOracle, Positions,
    };
    pub use nalgebra::Vector2 as Vec2;
}
