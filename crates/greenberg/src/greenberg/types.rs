//! Verdicts, partitions, reports and errors of the Greenberg check.

use std::fmt;

use crate::embedding::{EmbeddingError, Face, FaceSet};

/// Two disjoint groups of faces whose union is the whole `FaceSet`.
///
/// `inside`/`outside` name the two sides a Hamiltonian cycle would separate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition {
    pub inside: Vec<Face>,
    pub outside: Vec<Face>,
}

impl Partition {
    pub fn inside_sum(&self) -> usize {
        self.inside.iter().map(Face::greenberg_weight).sum()
    }

    pub fn outside_sum(&self) -> usize {
        self.outside.iter().map(Face::greenberg_weight).sum()
    }

    /// Total number of faces on both sides.
    pub fn len(&self) -> usize {
        self.inside.len() + self.outside.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Outcome of the Greenberg check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Nonplanar,
    /// Fewer than three vertices, or not biconnected.
    NonBiconnected,
    Satisfied(Partition),
    NotSatisfied,
}

impl Verdict {
    pub fn is_satisfied(&self) -> bool {
        matches!(self, Verdict::Satisfied(_))
    }

    pub fn witness(&self) -> Option<&Partition> {
        match self {
            Verdict::Satisfied(p) => Some(p),
            _ => None,
        }
    }

    /// Stable lowercase name, used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Verdict::Nonplanar => "nonplanar",
            Verdict::NonBiconnected => "nonbiconnected",
            Verdict::Satisfied(_) => "satisfied",
            Verdict::NotSatisfied => "not_satisfied",
        }
    }

    /// What the verdict says about a Hamiltonian cycle.
    ///
    /// - `NonBiconnected`: a Hamiltonian cycle would make the graph 2-connected, and
    ///   graphs with fewer than three vertices have no cycle at all → `Excluded`.
    /// - `NotSatisfied`: the necessary condition fails → `Excluded`.
    /// - `Satisfied`: necessary condition holds, nothing proven → `Possible`.
    /// - `Nonplanar`: the theorem does not apply → `Unknown`.
    ///
    /// Never `Guaranteed`; only the degree conditions in `check_eligibility` give that.
    pub fn eligibility(&self) -> Eligibility {
        match self {
            Verdict::Nonplanar => Eligibility::Unknown,
            Verdict::NonBiconnected | Verdict::NotSatisfied => Eligibility::Excluded,
            Verdict::Satisfied(_) => Eligibility::Possible,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Satisfied(p) => write!(
                f,
                "satisfied ({} | {} faces, Σ(k-2) = {} each)",
                p.inside.len(),
                p.outside.len(),
                p.inside_sum()
            ),
            other => f.write_str(other.name()),
        }
    }
}

/// Hamiltonicity as far as the degree conditions and Greenberg's theorem can tell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Eligibility {
    /// Dirac's or Ore's condition holds, so a Hamiltonian cycle exists.
    Guaranteed,
    Possible,
    Excluded,
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbortReason {
    Cancelled,
    DeadlineExceeded,
    CandidateLimit,
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortReason::Cancelled => f.write_str("cancelled"),
            AbortReason::DeadlineExceeded => f.write_str("deadline exceeded"),
            AbortReason::CandidateLimit => f.write_str("candidate limit reached"),
        }
    }
}

/// Errors of the orchestrator and solver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckError {
    /// The planarity oracle returned a malformed or non-planar rotation system.
    InvalidEmbedding(EmbeddingError),
    /// The partition search stopped before reaching a verdict.
    SearchAborted { examined: u64, reason: AbortReason },
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::InvalidEmbedding(e) => write!(f, "invalid embedding: {e}"),
            CheckError::SearchAborted { examined, reason } => write!(
                f,
                "partition search aborted after {examined} candidates: {reason}"
            ),
        }
    }
}

impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckError::InvalidEmbedding(e) => Some(e),
            CheckError::SearchAborted { .. } => None,
        }
    }
}

impl From<EmbeddingError> for CheckError {
    fn from(e: EmbeddingError) -> Self {
        CheckError::InvalidEmbedding(e)
    }
}

/// Counters from one solver call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// S = Σ (k − 2) over all faces.
    pub greenberg_sum: usize,
    /// S / 2, set only when S is positive and even.
    pub target: Option<usize>,
    /// Candidates evaluated (DP rows for `Strategy::SubsetSum`).
    pub candidates: u64,
    /// True once the search proper started.
    pub searched: bool,
    /// True when the reachability pass ruled the target out.
    pub pruned: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverOutcome {
    pub partition: Option<Partition>,
    pub stats: SearchStats,
}

/// Last stage the orchestrator reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Planarity,
    Biconnectivity,
    Faces,
    GreenbergSum,
    Partition,
}

/// Verdict plus the intermediate results that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckReport {
    pub verdict: Verdict,
    pub stage: Stage,
    pub faces: Option<FaceSet>,
    /// `None` unless the solver ran.
    pub stats: Option<SearchStats>,
}
