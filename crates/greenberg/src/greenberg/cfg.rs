//! Solver configuration.
//!
//! Policy
//! - Defaults reproduce the plain exhaustive search with no limits; the reachability
//!   pre-pass only skips searches that cannot succeed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::types::AbortReason;

/// The exhaustive search polls the deadline once per this many candidates.
pub(crate) const DEADLINE_POLL: u64 = 256;

/// How the solver looks for a subset with sum = target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Subsets by increasing size, lexicographic within a size; first hit wins.
    #[default]
    Exhaustive,
    /// Subset-sum DP over achievable sums; reconstructs a smallest witness.
    SubsetSum,
}

impl Strategy {
    /// Candidates between two deadline polls.
    ///
    /// A subset-sum step fills a whole DP row of `target + 1` cells, so every
    /// step polls.
    pub(crate) fn deadline_poll(self) -> u64 {
        match self {
            Strategy::Exhaustive => DEADLINE_POLL,
            Strategy::SubsetSum => 1,
        }
    }
}

/// Limits checked between candidate evaluations.
#[derive(Clone, Debug, Default)]
pub struct SearchBudget {
    pub max_candidates: Option<u64>,
    pub deadline: Option<Instant>,
    /// Set to `true` from another thread to stop the search.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl SearchBudget {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Some(Instant::now() + timeout),
            ..Self::default()
        }
    }

    pub fn with_max_candidates(max: u64) -> Self {
        Self {
            max_candidates: Some(max),
            ..Self::default()
        }
    }

    /// `Err` if the search must stop before evaluating one more candidate.
    ///
    /// The clock is read only when `examined` is a multiple of `poll`.
    pub(crate) fn check(&self, examined: u64, poll: u64) -> Result<(), AbortReason> {
        if let Some(flag) = &self.cancel {
            if flag.load(Ordering::Relaxed) {
                return Err(AbortReason::Cancelled);
            }
        }
        if let Some(max) = self.max_candidates {
            if examined >= max {
                return Err(AbortReason::CandidateLimit);
            }
        }
        if let Some(deadline) = self.deadline {
            if examined % poll.max(1) == 0 && Instant::now() >= deadline {
                return Err(AbortReason::DeadlineExceeded);
            }
        }
        Ok(())
    }
}

/// Partition solver configuration.
#[derive(Clone, Debug)]
pub struct SolverCfg {
    pub strategy: Strategy,
    /// Run a bitset subset-sum pass first and skip the search if the target is unreachable.
    pub prune_unreachable: bool,
    pub budget: SearchBudget,
}

impl Default for SolverCfg {
    fn default() -> Self {
        Self {
            strategy: Strategy::Exhaustive,
            prune_unreachable: true,
            budget: SearchBudget::unlimited(),
        }
    }
}
