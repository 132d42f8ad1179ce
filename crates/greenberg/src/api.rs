//! Curated surface for presentation layers (UNSTABLE).
//!
//! Important
//! - The crate is driven by whatever front end owns the `Graph`; this module groups
//!   the calls such a front end needs so it does not reach into submodules.
//! - Breaking changes are allowed when they improve the design.

// Graph store
pub use crate::graph::{Edge, Graph, GraphError};
// Embeddings and faces
pub use crate::embedding::{
    euler_characteristic, extract_faces, EmbeddingError, Face, FaceSet, RotationSystem,
};
// Oracles
pub use crate::oracle::{
    convex_hull, select_outer_face, CircleLayout, ConnectivityOracle, FixedLayout,
    LayoutError, LayoutOracle, Lowpoint, OuterFace, OuterFaceSource, PathAddition,
    PlanarityOracle, Positions,
};
// Greenberg condition
pub use crate::greenberg::{
    check_eligibility, check_greenberg, dirac_condition, ore_condition, solve_partition,
    AbortReason, CheckError, CheckReport, Eligibility, GreenbergChecker, Partition,
    SearchBudget, SearchStats, SolverCfg, SolverOutcome, Stage, Strategy, Verdict,
};
