//! Dense index view of a `Graph` (labels ↔ `usize`).
//!
//! Indices follow label order, and each adjacency list is sorted ascending.

use std::collections::HashMap;

use super::Graph;

#[derive(Clone, Debug)]
pub(crate) struct IndexedGraph {
    pub labels: Vec<String>,
    pub index: HashMap<String, usize>,
    pub adj: Vec<Vec<usize>>,
    pub edge_count: usize,
}

impl IndexedGraph {
    pub fn from_graph(g: &Graph) -> Self {
        let labels: Vec<String> = g.adjacency().keys().cloned().collect();
        let index: HashMap<String, usize> = labels
            .iter()
            .enumerate()
            .map(|(i, l)| (l.clone(), i))
            .collect();
        let adj: Vec<Vec<usize>> = g
            .adjacency()
            .values()
            .map(|nbrs| nbrs.keys().map(|n| index[n.as_str()]).collect())
            .collect();
        let edge_count = adj.iter().map(Vec::len).sum::<usize>() / 2;
        Self {
            labels,
            index,
            adj,
            edge_count,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }
}
