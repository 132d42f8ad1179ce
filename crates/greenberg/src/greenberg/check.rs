//! Orchestrator: one linear pass from planarity to the partition search.

use crate::embedding::{
    euler_characteristic, extract_faces, EmbeddingError, FaceSet, RotationSystem,
};
use crate::graph::Graph;
use crate::oracle::{ConnectivityOracle, Lowpoint, PlanarityOracle};

use super::cfg::SolverCfg;
use super::degree::{dirac_condition, ore_condition};
use super::solver::solve_partition;
use super::types::{CheckError, CheckReport, Eligibility, Stage, Verdict};

/// Where the embedding comes from.
#[derive(Clone, Copy)]
enum Embedder<'a> {
    /// Default oracle through the graph's memoized faces.
    Builtin,
    External(&'a dyn PlanarityOracle),
}

/// Result of the planarity stage.
enum Planar<'g> {
    Cached(&'g FaceSet),
    Rotation(RotationSystem),
}

/// Runs the Greenberg check with a chosen set of oracles and solver settings.
///
/// Each call borrows the graph immutably for its whole duration, so edits cannot
/// interleave with a pass.
#[derive(Clone)]
pub struct GreenbergChecker<'a> {
    planarity: Embedder<'a>,
    connectivity: &'a dyn ConnectivityOracle,
    cfg: SolverCfg,
}

impl Default for GreenbergChecker<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> GreenbergChecker<'a> {
    /// Built-in oracles, default solver settings.
    pub fn new() -> Self {
        Self {
            planarity: Embedder::Builtin,
            connectivity: &Lowpoint,
            cfg: SolverCfg::default(),
        }
    }

    pub fn with_planarity(mut self, oracle: &'a dyn PlanarityOracle) -> Self {
        self.planarity = Embedder::External(oracle);
        self
    }

    pub fn with_connectivity(mut self, oracle: &'a dyn ConnectivityOracle) -> Self {
        self.connectivity = oracle;
        self
    }

    pub fn with_cfg(mut self, cfg: SolverCfg) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn cfg(&self) -> &SolverCfg {
        &self.cfg
    }

    pub fn check(&self, g: &Graph) -> Result<Verdict, CheckError> {
        self.run(g).map(|report| report.verdict)
    }

    /// Run every stage and keep the intermediate results.
    pub fn run(&self, g: &Graph) -> Result<CheckReport, CheckError> {
        let _span = tracing::debug_span!(
            "greenberg_check",
            vertices = g.vertex_count(),
            edges = g.edge_count()
        )
        .entered();

        let Some(planar) = self.planar(g)? else {
            tracing::debug!("graph is not planar");
            return Ok(stop(Verdict::Nonplanar, Stage::Planarity, None));
        };

        if g.vertex_count() < 3 || !self.connectivity.is_biconnected(g) {
            tracing::debug!("graph is not biconnected");
            return Ok(stop(Verdict::NonBiconnected, Stage::Biconnectivity, None));
        }

        let faces = match planar {
            Planar::Cached(faces) => faces.clone(),
            Planar::Rotation(rotation) => extract_faces(g, &rotation)?,
        };
        if faces.is_empty() {
            return Ok(stop(Verdict::NotSatisfied, Stage::Faces, Some(faces)));
        }
        let chi = euler_characteristic(g.vertex_count(), g.edge_count(), faces.len());
        if chi != 2 {
            return Err(EmbeddingError::NotPlanar {
                characteristic: chi,
            }
            .into());
        }
        tracing::debug!(faces = faces.len(), sizes = ?faces.sizes(), "faces extracted");

        let total = faces.greenberg_sum();
        if total == 0 || total % 2 == 1 {
            tracing::debug!(total, "greenberg sum is zero or odd");
            return Ok(stop(Verdict::NotSatisfied, Stage::GreenbergSum, Some(faces)));
        }

        let outcome = solve_partition(&faces, &self.cfg)?;
        let verdict = match outcome.partition {
            Some(partition) => Verdict::Satisfied(partition),
            None => Verdict::NotSatisfied,
        };
        tracing::debug!(verdict = verdict.name(), "greenberg check done");
        Ok(CheckReport {
            verdict,
            stage: Stage::Partition,
            faces: Some(faces),
            stats: Some(outcome.stats),
        })
    }

    fn planar<'g>(&self, g: &'g Graph) -> Result<Option<Planar<'g>>, CheckError> {
        Ok(match self.planarity {
            Embedder::Builtin => g.faces()?.map(Planar::Cached),
            Embedder::External(oracle) => oracle.embedding(g).map(Planar::Rotation),
        })
    }
}

fn stop(verdict: Verdict, stage: Stage, faces: Option<FaceSet>) -> CheckReport {
    CheckReport {
        verdict,
        stage,
        faces,
        stats: None,
    }
}

/// Greenberg check with the built-in oracles and an unbounded search.
pub fn check_greenberg(g: &Graph) -> Result<Verdict, CheckError> {
    GreenbergChecker::new().check(g)
}

/// Hamiltonicity eligibility.
///
/// Ore's condition (which covers Dirac's) answers `Guaranteed` without running the
/// checker. Otherwise the verdict decides; any error (for example an aborted search)
/// is `Unknown`.
pub fn check_eligibility(g: &Graph, checker: &GreenbergChecker<'_>) -> Eligibility {
    if ore_condition(g) {
        tracing::debug!(dirac = dirac_condition(g), "degree condition holds");
        return Eligibility::Guaranteed;
    }
    match checker.check(g) {
        Ok(verdict) => verdict.eligibility(),
        Err(e) => {
            tracing::debug!(error = %e, "eligibility unknown");
            Eligibility::Unknown
        }
    }
}
