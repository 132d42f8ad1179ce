//! Tarjan lowpoint DFS: components, articulation points, bridges, blocks.

use std::collections::HashSet;

use crate::graph::indexed::IndexedGraph;
use crate::graph::{Edge, Graph};

use super::ConnectivityOracle;

/// Result of one lowpoint pass over every component.
#[derive(Clone, Debug, Default)]
pub(crate) struct LowpointScan {
    pub components: usize,
    pub articulation: Vec<bool>,
    /// `(u, v)` with `u < v`.
    pub bridges: Vec<(usize, usize)>,
    /// Edge lists of the biconnected components; a bridge is a one-edge block.
    pub blocks: Vec<Vec<(usize, usize)>>,
}

pub(crate) fn lowpoint_scan(ig: &IndexedGraph) -> LowpointScan {
    let n = ig.len();
    let mut dfs = Dfs {
        adj: &ig.adj,
        disc: vec![None; n],
        low: vec![0; n],
        clock: 0,
        stack: Vec::new(),
        out: LowpointScan {
            articulation: vec![false; n],
            ..LowpointScan::default()
        },
    };
    for s in 0..n {
        if dfs.disc[s].is_none() {
            dfs.out.components += 1;
            dfs.visit(s, None);
        }
    }
    dfs.out
}

struct Dfs<'a> {
    adj: &'a [Vec<usize>],
    disc: Vec<Option<usize>>,
    low: Vec<usize>,
    clock: usize,
    stack: Vec<(usize, usize)>,
    out: LowpointScan,
}

impl<'a> Dfs<'a> {
    fn visit(&mut self, u: usize, parent: Option<usize>) {
        let d = self.clock;
        self.clock += 1;
        self.disc[u] = Some(d);
        self.low[u] = d;
        let mut children = 0usize;
        let adj = self.adj;
        for &v in &adj[u] {
            match self.disc[v] {
                None => {
                    children += 1;
                    self.stack.push((u, v));
                    self.visit(v, Some(u));
                    self.low[u] = self.low[u].min(self.low[v]);
                    if self.low[v] >= d {
                        if parent.is_some() {
                            self.out.articulation[u] = true;
                        }
                        let mut block = Vec::new();
                        while let Some((x, y)) = self.stack.pop() {
                            block.push((x.min(y), x.max(y)));
                            if (x, y) == (u, v) {
                                break;
                            }
                        }
                        block.sort_unstable();
                        self.out.blocks.push(block);
                    }
                    if self.low[v] > d {
                        self.out.bridges.push((u.min(v), u.max(v)));
                    }
                }
                // Back edge to a proper ancestor; pushed once, from the lower end.
                Some(dv) if Some(v) != parent && dv < d => {
                    self.stack.push((u, v));
                    self.low[u] = self.low[u].min(dv);
                }
                _ => {}
            }
        }
        if parent.is_none() && children > 1 {
            self.out.articulation[u] = true;
        }
    }
}

/// Connectivity oracle backed by one lowpoint DFS per query.
#[derive(Clone, Copy, Debug, Default)]
pub struct Lowpoint;

impl Lowpoint {
    /// Cut vertices in label order.
    pub fn articulation_points(&self, g: &Graph) -> Vec<String> {
        let ig = IndexedGraph::from_graph(g);
        let scan = lowpoint_scan(&ig);
        ig.labels
            .into_iter()
            .zip(scan.articulation)
            .filter_map(|(l, cut)| cut.then_some(l))
            .collect()
    }

    pub fn has_bridges(&self, g: &Graph) -> bool {
        let ig = IndexedGraph::from_graph(g);
        !lowpoint_scan(&ig).bridges.is_empty()
    }
}

impl ConnectivityOracle for Lowpoint {
    fn is_connected(&self, g: &Graph) -> bool {
        let ig = IndexedGraph::from_graph(g);
        ig.len() > 0 && lowpoint_scan(&ig).components == 1
    }

    /// Connected, at least two vertices, and no cut vertex (so `K2` counts).
    fn is_biconnected(&self, g: &Graph) -> bool {
        let ig = IndexedGraph::from_graph(g);
        if ig.len() < 2 {
            return false;
        }
        let scan = lowpoint_scan(&ig);
        scan.components == 1 && !scan.articulation.iter().any(|&cut| cut)
    }

    fn bridges(&self, g: &Graph) -> HashSet<Edge> {
        let ig = IndexedGraph::from_graph(g);
        lowpoint_scan(&ig)
            .bridges
            .into_iter()
            .map(|(u, v)| {
                let (lu, lv) = (&ig.labels[u], &ig.labels[v]);
                Edge::new(lu.clone(), lv.clone(), g.weight(lu, lv).unwrap_or(1.0))
            })
            .collect()
    }
}
