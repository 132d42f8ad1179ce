use super::*;
// proptest's prelude also exports a `Strategy`; the solver's wins.
use super::Strategy;
use crate::embedding::{EmbeddingError, FaceSet, RotationSystem};
use crate::fixtures::{
    bowtie, complete, complete_bipartite, cycle, faces_with_sizes, grid, path, petersen,
    sorted_walks, wheel,
};
use crate::graph::Graph;
use crate::oracle::PlanarityOracle;

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;

use proptest::prelude::*;

fn exhaustive_unpruned() -> SolverCfg {
    SolverCfg {
        prune_unreachable: false,
        ..SolverCfg::default()
    }
}

fn subset_sum() -> SolverCfg {
    SolverCfg {
        strategy: Strategy::SubsetSum,
        ..SolverCfg::default()
    }
}

fn assert_valid_witness(faces: &FaceSet, p: &Partition) {
    assert!(!p.inside.is_empty() && !p.outside.is_empty());
    assert_eq!(p.inside_sum(), p.outside_sum());
    assert_eq!(p.inside_sum() * 2, faces.greenberg_sum());
    assert_eq!(
        sorted_walks(p.inside.iter().chain(&p.outside)),
        sorted_walks(faces)
    );
}

// --- solver ----------------------------------------------------------------

#[test]
fn odd_sum_skips_the_search() {
    let faces = faces_with_sizes(&[3, 3, 3]);
    let out = solve_partition(&faces, &SolverCfg::default()).unwrap();
    assert_eq!(out.partition, None);
    assert_eq!(
        out.stats,
        SearchStats {
            greenberg_sum: 3,
            target: None,
            candidates: 0,
            searched: false,
            pruned: false,
        }
    );
}

#[test]
fn zero_sum_skips_the_search() {
    let out = solve_partition(&FaceSet::default(), &SolverCfg::default()).unwrap();
    assert_eq!(out.partition, None);
    assert!(!out.stats.searched);
}

#[test]
fn exhaustive_prefers_the_smallest_inside_group() {
    let faces = faces_with_sizes(&[3, 3, 4]);
    let p = solve_partition(&faces, &SolverCfg::default())
        .unwrap()
        .partition
        .unwrap();
    assert_eq!(p.inside, vec![faces.as_slice()[2].clone()]);
    assert_eq!(p.outside.len(), 2);
    assert_valid_witness(&faces, &p);
}

#[test]
fn both_strategies_find_a_single_face_witness() {
    let faces = faces_with_sizes(&[3, 3, 3, 3, 6]);
    for cfg in [SolverCfg::default(), subset_sum()] {
        let p = solve_partition(&faces, &cfg).unwrap().partition.unwrap();
        assert_eq!(p.inside, vec![faces.as_slice()[4].clone()]);
        assert_valid_witness(&faces, &p);
    }
}

#[test]
fn unreachable_target_is_pruned() {
    let faces = faces_with_sizes(&[4, 4, 4]);
    let out = solve_partition(&faces, &SolverCfg::default()).unwrap();
    assert_eq!(out.partition, None);
    assert_eq!(out.stats.target, Some(3));
    assert!(out.stats.pruned);
    assert!(!out.stats.searched);
    assert_eq!(out.stats.candidates, 0);
}

#[test]
fn unpruned_search_walks_every_proper_subset() {
    let faces = faces_with_sizes(&[4, 4, 4]);
    let out = solve_partition(&faces, &exhaustive_unpruned()).unwrap();
    assert_eq!(out.partition, None);
    assert!(out.stats.searched);
    assert_eq!(out.stats.candidates, 6);
}

#[test]
fn candidate_limit_aborts() {
    let faces = faces_with_sizes(&[4, 4, 4]);
    let cfg = SolverCfg {
        budget: SearchBudget::with_max_candidates(1),
        ..exhaustive_unpruned()
    };
    assert_eq!(
        solve_partition(&faces, &cfg),
        Err(CheckError::SearchAborted {
            examined: 1,
            reason: AbortReason::CandidateLimit
        })
    );
}

#[test]
fn cancel_flag_aborts_before_the_first_candidate() {
    let cfg = SolverCfg {
        budget: SearchBudget {
            cancel: Some(Arc::new(AtomicBool::new(true))),
            ..SearchBudget::unlimited()
        },
        ..SolverCfg::default()
    };
    let err = solve_partition(&faces_with_sizes(&[3, 3, 3, 3]), &cfg).unwrap_err();
    assert_eq!(
        err,
        CheckError::SearchAborted {
            examined: 0,
            reason: AbortReason::Cancelled
        }
    );
}

#[test]
fn past_deadline_aborts() {
    let cfg = SolverCfg {
        budget: SearchBudget {
            deadline: Some(Instant::now()),
            ..SearchBudget::unlimited()
        },
        ..subset_sum()
    };
    let err = solve_partition(&faces_with_sizes(&[3, 3, 3, 3]), &cfg).unwrap_err();
    assert!(matches!(
        err,
        CheckError::SearchAborted {
            reason: AbortReason::DeadlineExceeded,
            ..
        }
    ));
}

#[test]
fn subset_sum_polls_the_deadline_after_every_row() {
    let budget = SearchBudget {
        deadline: Some(Instant::now()),
        ..SearchBudget::unlimited()
    };
    let rows = Strategy::SubsetSum.deadline_poll();
    let combos = Strategy::Exhaustive.deadline_poll();
    for examined in 1..4 {
        assert_eq!(
            budget.check(examined, rows),
            Err(AbortReason::DeadlineExceeded)
        );
        assert_eq!(budget.check(examined, combos), Ok(()));
    }
    assert_eq!(
        budget.check(super::cfg::DEADLINE_POLL, combos),
        Err(AbortReason::DeadlineExceeded)
    );
}

proptest! {
    /// Both strategies agree on existence, and every witness is a real partition.
    #[test]
    fn strategies_agree(sizes in prop::collection::vec(3usize..9, 1..10)) {
        let faces = faces_with_sizes(&sizes);
        let a = solve_partition(&faces, &SolverCfg::default()).unwrap();
        let b = solve_partition(&faces, &subset_sum()).unwrap();
        prop_assert_eq!(a.partition.is_some(), b.partition.is_some());
        for p in a.partition.iter().chain(b.partition.iter()) {
            prop_assert_eq!(p.inside_sum(), p.outside_sum());
            prop_assert_eq!(p.len(), faces.len());
        }
        if let (Some(pa), Some(pb)) = (&a.partition, &b.partition) {
            prop_assert_eq!(pa.inside.len(), pb.inside.len());
        }
    }
}

// --- orchestrator ----------------------------------------------------------

#[test]
fn triangle_is_satisfied() {
    let g = Graph::from_edges([("A", "B"), ("B", "C"), ("C", "A")]);
    let verdict = check_greenberg(&g).unwrap();
    let p = verdict.witness().unwrap();
    assert_eq!((p.inside.len(), p.outside.len()), (1, 1));
    assert_eq!(verdict.eligibility(), Eligibility::Possible);
}

#[test]
fn k4_splits_two_and_two() {
    let g = complete(4);
    let report = GreenbergChecker::new().run(&g).unwrap();
    assert_eq!(report.stage, Stage::Partition);
    let faces = report.faces.unwrap();
    let p = report.verdict.witness().unwrap();
    assert_eq!((p.inside.len(), p.outside.len()), (2, 2));
    assert_valid_witness(&faces, p);
    let stats = report.stats.unwrap();
    assert_eq!(stats.greenberg_sum, 4);
    assert_eq!(stats.target, Some(2));
}

#[test]
fn hamiltonian_families_are_satisfied() {
    for g in [cycle(5), wheel(5), wheel(8), grid(2, 3, false), grid(3, 3, true)] {
        let verdict = check_greenberg(&g).unwrap();
        assert!(verdict.is_satisfied(), "graph:\n{g}");
    }
}

#[test]
fn k23_fails_the_condition() {
    let g = complete_bipartite(2, 3);
    let report = GreenbergChecker::new().run(&g).unwrap();
    assert_eq!(report.verdict, Verdict::NotSatisfied);
    assert_eq!(report.stage, Stage::Partition);
    assert!(report.stats.unwrap().pruned);
    assert_eq!(check_eligibility(&g, &GreenbergChecker::new()), Eligibility::Excluded);
}

#[test]
fn grid_3x3_fails_the_condition() {
    let g = grid(3, 3, false);
    let report = GreenbergChecker::new()
        .with_cfg(exhaustive_unpruned())
        .run(&g)
        .unwrap();
    assert_eq!(report.verdict, Verdict::NotSatisfied);
    let mut sizes = report.faces.unwrap().sizes();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![4, 4, 4, 4, 8]);
    assert_eq!(report.stats.unwrap().candidates, 30);
}

#[test]
fn nonplanar_graphs_stop_at_planarity() {
    for g in [complete(5), complete_bipartite(3, 3), petersen()] {
        let report = GreenbergChecker::new().run(&g).unwrap();
        assert_eq!(report.verdict, Verdict::Nonplanar);
        assert_eq!(report.stage, Stage::Planarity);
        assert_eq!(report.faces, None);
        assert_eq!(report.verdict.eligibility(), Eligibility::Unknown);
    }
}

#[test]
fn graphs_with_cut_vertices_or_few_vertices_are_nonbiconnected() {
    let mut broken = cycle(6);
    broken.remove_edge("v0", "v1");
    for g in [bowtie(), path(4), path(2), broken, Graph::new()] {
        let report = GreenbergChecker::new().run(&g).unwrap();
        assert_eq!(report.verdict, Verdict::NonBiconnected, "graph:\n{g}");
        assert_eq!(report.stage, Stage::Biconnectivity);
        assert_eq!(report.verdict.eligibility(), Eligibility::Excluded);
    }
}

#[test]
fn repeated_checks_reuse_cached_faces() {
    let g = wheel(6);
    assert!(!g.has_cached_faces());
    let first = check_greenberg(&g).unwrap();
    assert!(g.has_cached_faces());
    assert_eq!(check_greenberg(&g).unwrap(), first);
}

#[test]
fn verdict_tracks_graph_edits() {
    let mut g = cycle(4);
    assert!(check_greenberg(&g).unwrap().is_satisfied());
    g.add_edge("v0", "x", 1.0);
    assert_eq!(check_greenberg(&g).unwrap(), Verdict::NonBiconnected);
    g.add_edge("x", "v2", 1.0);
    assert_eq!(check_greenberg(&g).unwrap(), Verdict::NotSatisfied);
    g.remove_vertex("x").unwrap();
    assert!(check_greenberg(&g).unwrap().is_satisfied());
}

/// Hands out a fixed rotation regardless of the graph.
struct Fixed(RotationSystem);

impl PlanarityOracle for Fixed {
    fn embedding(&self, _: &Graph) -> Option<RotationSystem> {
        Some(self.0.clone())
    }
}

struct Never;

impl PlanarityOracle for Never {
    fn embedding(&self, _: &Graph) -> Option<RotationSystem> {
        None
    }
}

#[test]
fn toroidal_rotation_is_rejected() {
    let rot: RotationSystem = (0..4)
        .map(|i| {
            let ring: Vec<String> = (0..4).filter(|&j| j != i).map(|j| format!("v{j}")).collect();
            (format!("v{i}"), ring)
        })
        .collect();
    let oracle = Fixed(rot);
    let checker = GreenbergChecker::new().with_planarity(&oracle);
    assert_eq!(
        checker.check(&complete(4)),
        Err(CheckError::InvalidEmbedding(EmbeddingError::NotPlanar {
            characteristic: 0
        }))
    );
    // Ore settles K4 before the embedding is consulted.
    assert_eq!(check_eligibility(&complete(4), &checker), Eligibility::Guaranteed);
}

#[test]
fn malformed_rotation_is_rejected() {
    let oracle = Fixed([("v0", vec!["v1"])].into_iter().collect());
    let err = GreenbergChecker::new()
        .with_planarity(&oracle)
        .check(&cycle(3))
        .unwrap_err();
    assert!(matches!(
        err,
        CheckError::InvalidEmbedding(EmbeddingError::MissingNeighbor { .. })
    ));
}

#[test]
fn padded_rotation_labels_are_rejected() {
    let oracle = Fixed(
        [
            ("v0", vec![" v1", "v1", "v2"]),
            ("v1", vec!["v2", "v0"]),
            ("v2", vec!["v0", "v1"]),
        ]
        .into_iter()
        .collect(),
    );
    let checker = GreenbergChecker::new().with_planarity(&oracle);
    assert_eq!(
        checker.check(&cycle(3)),
        Err(CheckError::InvalidEmbedding(EmbeddingError::NotAdjacent {
            vertex: "v0".into(),
            neighbor: " v1".into()
        }))
    );
}

#[test]
fn external_oracle_decides_planarity() {
    let checker = GreenbergChecker::new().with_planarity(&Never);
    assert_eq!(checker.check(&cycle(4)), Ok(Verdict::Nonplanar));
}

#[test]
fn aborted_search_means_unknown_eligibility() {
    let checker = GreenbergChecker::new().with_cfg(SolverCfg {
        budget: SearchBudget::with_max_candidates(0),
        ..SolverCfg::default()
    });
    let g = cycle(6);
    assert!(matches!(
        checker.check(&g),
        Err(CheckError::SearchAborted { examined: 0, .. })
    ));
    assert_eq!(check_eligibility(&g, &checker), Eligibility::Unknown);
}

// --- degree conditions -----------------------------------------------------

/// K5 without the edges v0-v3 and v0-v4: deg(v0) = 2 < 5/2, yet every
/// non-adjacent pair sums to 5.
fn ore_not_dirac() -> Graph {
    let mut g = complete(5);
    g.remove_edge("v0", "v3");
    g.remove_edge("v0", "v4");
    g
}

#[test]
fn dense_graphs_meet_dirac() {
    for g in [complete(3), complete(4), complete(5), wheel(5)] {
        assert!(dirac_condition(&g), "graph:\n{g}");
        assert!(ore_condition(&g), "graph:\n{g}");
    }
}

#[test]
fn ore_is_checked_over_every_non_adjacent_pair() {
    let g = ore_not_dirac();
    assert!(!dirac_condition(&g));
    assert!(ore_condition(&g));

    // In K2,3 the pair a0, a1 sums to 6, but b0, b1 only to 4.
    let k23 = complete_bipartite(2, 3);
    assert!(!ore_condition(&k23));
    assert!(!dirac_condition(&k23));
}

#[test]
fn small_or_sparse_graphs_meet_neither() {
    for g in [path(2), path(4), cycle(5), grid(3, 3, false), petersen()] {
        assert!(!dirac_condition(&g), "graph:\n{g}");
        assert!(!ore_condition(&g), "graph:\n{g}");
    }
    let mut g = complete(4);
    g.add_vertex("lonely");
    assert!(!ore_condition(&g));
}

#[test]
fn degree_conditions_guarantee_eligibility() {
    let checker = GreenbergChecker::new();
    assert_eq!(check_eligibility(&wheel(5), &checker), Eligibility::Guaranteed);
    assert_eq!(check_eligibility(&ore_not_dirac(), &checker), Eligibility::Guaranteed);
    // Nonplanar, so Greenberg alone would say Unknown.
    assert_eq!(check_eligibility(&complete(5), &checker), Eligibility::Guaranteed);
    // Degree-2 vertices with non-adjacent neighbors do not exclude a cycle.
    assert_eq!(check_eligibility(&cycle(5), &checker), Eligibility::Possible);
}

#[test]
fn verdict_names_and_display() {
    assert_eq!(Verdict::Nonplanar.name(), "nonplanar");
    assert_eq!(Verdict::NotSatisfied.to_string(), "not_satisfied");
    let v = check_greenberg(&complete(4)).unwrap();
    assert_eq!(v.to_string(), "satisfied (2 | 2 faces, Σ(k-2) = 2 each)");
}

proptest! {
    #[test]
    fn cycles_are_always_satisfied(n in 3usize..40) {
        let verdict = check_greenberg(&cycle(n)).unwrap();
        let p = verdict.witness().unwrap();
        prop_assert_eq!(p.inside_sum(), n - 2);
        prop_assert_eq!(p.outside_sum(), n - 2);
    }
}
