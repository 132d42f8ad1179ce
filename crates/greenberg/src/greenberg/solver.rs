//! Partition search: faces → two groups with equal Σ(k − 2).

use std::collections::BTreeSet;

use crate::embedding::{Face, FaceSet};

use super::cfg::{SearchBudget, SolverCfg, Strategy};
use super::types::{CheckError, Partition, SearchStats, SolverOutcome};
use super::util::Combinations;

/// Search for a partition of `faces` with equal Greenberg sums.
///
/// S = Σ (k − 2). Zero or odd S means no partition and no search.
/// Otherwise look for a subset with sum S / 2; the complement is the other side.
/// The exhaustive strategy takes the first hit over subsets by increasing size, so
/// the reported `inside` group is one of the smallest possible.
pub fn solve_partition(faces: &FaceSet, cfg: &SolverCfg) -> Result<SolverOutcome, CheckError> {
    let weights: Vec<usize> = faces.iter().map(Face::greenberg_weight).collect();
    let total: usize = weights.iter().sum();
    let mut stats = SearchStats {
        greenberg_sum: total,
        ..SearchStats::default()
    };
    if total == 0 || total % 2 == 1 {
        tracing::debug!(total, "greenberg sum is zero or odd; skipping search");
        return Ok(SolverOutcome {
            partition: None,
            stats,
        });
    }
    let target = total / 2;
    stats.target = Some(target);
    if cfg.prune_unreachable && !reachable(&weights, target) {
        tracing::debug!(target, "target unreachable by any subset");
        stats.pruned = true;
        return Ok(SolverOutcome {
            partition: None,
            stats,
        });
    }

    stats.searched = true;
    let chosen = match cfg.strategy {
        Strategy::Exhaustive => exhaustive(faces, &weights, target, &cfg.budget, &mut stats)?,
        Strategy::SubsetSum => subset_sum(faces, &weights, target, &cfg.budget, &mut stats)?,
    };
    tracing::debug!(
        faces = faces.len(),
        target,
        candidates = stats.candidates,
        found = chosen.is_some(),
        "partition search finished"
    );
    Ok(SolverOutcome {
        partition: chosen.map(|inside| split(faces, &inside)),
        stats,
    })
}

fn exhaustive(
    faces: &FaceSet,
    weights: &[usize],
    target: usize,
    budget: &SearchBudget,
    stats: &mut SearchStats,
) -> Result<Option<Vec<usize>>, CheckError> {
    let n = weights.len();
    for r in 1..n {
        for combo in Combinations::new(n, r) {
            charge(budget, stats, Strategy::Exhaustive)?;
            let sum: usize = combo.iter().map(|&i| weights[i]).sum();
            if sum == target && covers_all_sizes(faces, &combo) {
                return Ok(Some(combo));
            }
        }
    }
    Ok(None)
}

/// Min-cardinality subset with sum = target, via `dp[i][s]` = fewest of the first
/// `i` faces reaching `s`.
fn subset_sum(
    faces: &FaceSet,
    weights: &[usize],
    target: usize,
    budget: &SearchBudget,
    stats: &mut SearchStats,
) -> Result<Option<Vec<usize>>, CheckError> {
    let n = weights.len();
    let mut dp: Vec<Vec<Option<usize>>> = vec![vec![None; target + 1]; n + 1];
    dp[0][0] = Some(0);
    for (i, &w) in weights.iter().enumerate() {
        charge(budget, stats, Strategy::SubsetSum)?;
        for s in 0..=target {
            let skip = dp[i][s];
            let take = if s >= w {
                dp[i][s - w].map(|c| c + 1)
            } else {
                None
            };
            dp[i + 1][s] = match (skip, take) {
                (Some(a), Some(b)) => Some(a.min(b)),
                (a, b) => a.or(b),
            };
        }
    }
    if dp[n][target].is_none() {
        return Ok(None);
    }
    let mut s = target;
    let mut chosen = Vec::new();
    for i in (0..n).rev() {
        if dp[i + 1][s] == dp[i][s] {
            continue;
        }
        chosen.push(i);
        s -= weights[i];
    }
    chosen.reverse();
    Ok(covers_all_sizes(faces, &chosen).then_some(chosen))
}

/// Bitset subset-sum: can some subset of `weights` add up to `target`?
fn reachable(weights: &[usize], target: usize) -> bool {
    let mut reach = vec![false; target + 1];
    reach[0] = true;
    for &w in weights.iter().filter(|&&w| w > 0 && w <= target) {
        for s in (w..=target).rev() {
            if reach[s - w] {
                reach[s] = true;
            }
        }
    }
    reach[target]
}

fn charge(
    budget: &SearchBudget,
    stats: &mut SearchStats,
    strategy: Strategy,
) -> Result<(), CheckError> {
    budget
        .check(stats.candidates, strategy.deadline_poll())
        .map_err(|reason| CheckError::SearchAborted {
            examined: stats.candidates,
            reason,
        })?;
    stats.candidates += 1;
    Ok(())
}

/// Every face size of the set also occurs on one of the two sides.
///
/// The sides are a subset and its complement, so this always holds. It is the
/// remnant of a size-class formulation and stays on the accept path unchanged.
fn covers_all_sizes(faces: &FaceSet, inside: &[usize]) -> bool {
    let mut in_first = vec![false; faces.len()];
    for &i in inside {
        in_first[i] = true;
    }
    let first = faces
        .iter()
        .enumerate()
        .filter(|(i, _)| in_first[*i])
        .map(|(_, f)| f.size());
    let second = faces
        .iter()
        .enumerate()
        .filter(|(i, _)| !in_first[*i])
        .map(|(_, f)| f.size());
    let sides: BTreeSet<usize> = first.chain(second).collect();
    faces.iter().all(|f| sides.contains(&f.size()))
}

fn split(faces: &FaceSet, inside: &[usize]) -> Partition {
    let mut in_first = vec![false; faces.len()];
    for &i in inside {
        in_first[i] = true;
    }
    let (inside, outside): (Vec<(usize, &Face)>, Vec<(usize, &Face)>) =
        faces.iter().enumerate().partition(|(i, _)| in_first[*i]);
    Partition {
        inside: inside.into_iter().map(|(_, f)| f.clone()).collect(),
        outside: outside.into_iter().map(|(_, f)| f.clone()).collect(),
    }
}
