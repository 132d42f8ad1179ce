//! Greenberg condition: partition solver and orchestrator.
//!
//! Purpose
//! - `solve_partition`: split a `FaceSet` into two groups with equal Σ(k − 2).
//! - `dirac_condition` / `ore_condition`: degree bounds that settle Hamiltonicity
//!   outright; `check_eligibility` consults them before the Greenberg check.
//! - `GreenbergChecker`: planarity → biconnectivity → faces → Σ(k − 2) → solver,
//!   stopping at the first failing stage with a named `Verdict`.
//!
//! Scalability
//! - The exhaustive search is exponential in the number of faces. It targets small,
//!   hand-built graphs (tens of vertices). `SearchBudget` bounds it, and
//!   `Strategy::SubsetSum` trades the enumeration order for a pseudo-polynomial DP.
//!
//! Layout
//! - `cfg.rs` (solver configuration), `types.rs` (verdicts, reports, errors),
//!   `util.rs` (combinations), `degree.rs`, `solver.rs`, `check.rs`.

mod cfg;
mod check;
mod degree;
mod solver;
mod types;
mod util;

pub use cfg::{SearchBudget, SolverCfg, Strategy};
pub use check::{check_eligibility, check_greenberg, GreenbergChecker};
pub use degree::{dirac_condition, ore_condition};
pub use solver::solve_partition;
pub use types::{
    AbortReason, CheckError, CheckReport, Eligibility, Partition, SearchStats, SolverOutcome,
    Stage, Verdict,
};

#[cfg(test)]
mod tests;
