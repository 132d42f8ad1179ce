//! Degree conditions that guarantee a Hamiltonian cycle.
//!
//! Both need at least three vertices. Dirac implies Ore, so `ore_condition` accepts
//! every graph `dirac_condition` accepts. Neither asks for planarity.

use crate::graph::Graph;

/// Dirac: every vertex has degree ≥ n / 2.
pub fn dirac_condition(g: &Graph) -> bool {
    let n = g.vertex_count();
    n >= 3 && g.adjacency().values().all(|nbrs| 2 * nbrs.len() >= n)
}

/// Ore: deg(u) + deg(v) ≥ n for every pair of non-adjacent vertices u ≠ v.
pub fn ore_condition(g: &Graph) -> bool {
    let n = g.vertex_count();
    if n < 3 {
        return false;
    }
    let adj = g.adjacency();
    for (i, nu) in adj.values().enumerate() {
        for (v, nv) in adj.iter().skip(i + 1) {
            if !nu.contains_key(v) && nu.len() + nv.len() < n {
                return false;
            }
        }
    }
    true
}
