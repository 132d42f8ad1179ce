//! The `Graph` store.

use std::cell::OnceCell;
use std::collections::BTreeMap;
use std::fmt;

use crate::embedding::{extract_faces, EmbeddingError, FaceSet};
use crate::oracle::{PathAddition, PlanarityOracle};

use super::types::{Edge, GraphError};

/// Simple undirected graph keyed by trimmed string labels.
///
/// Adjacency is kept in ordered maps so every traversal built on top of it
/// (embedding, faces, solver) is deterministic.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    adj: BTreeMap<String, BTreeMap<String, f64>>,
    /// Faces of the default embedding; `Some(None)` caches "nonplanar".
    faces: OnceCell<Option<FaceSet>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an edge list with unit weights.
    pub fn from_edges<'a, I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut g = Self::new();
        for (u, v) in edges {
            g.add_edge(u, v, 1.0);
        }
        g
    }

    /// Add a vertex (trimmed). Adding an existing label does nothing.
    pub fn add_vertex(&mut self, label: &str) {
        let label = label.trim();
        if !self.adj.contains_key(label) {
            self.adj.insert(label.to_string(), BTreeMap::new());
            self.invalidate();
        }
    }

    /// Add an edge between trimmed labels, creating missing endpoints.
    ///
    /// Self-loops are dropped without an error. Re-adding an edge overwrites its weight.
    pub fn add_edge(&mut self, u: &str, v: &str, weight: f64) {
        let (u, v) = (u.trim(), v.trim());
        if u == v {
            return;
        }
        self.adj
            .entry(u.to_string())
            .or_default()
            .insert(v.to_string(), weight);
        self.adj
            .entry(v.to_string())
            .or_default()
            .insert(u.to_string(), weight);
        self.invalidate();
    }

    /// Remove a vertex and its incident edges.
    pub fn remove_vertex(&mut self, label: &str) -> Result<(), GraphError> {
        let label = label.trim();
        let nbrs = self.adj.remove(label).ok_or_else(|| GraphError::NotFound {
            vertex: label.to_string(),
        })?;
        for n in nbrs.keys() {
            if let Some(back) = self.adj.get_mut(n) {
                back.remove(label);
            }
        }
        self.invalidate();
        Ok(())
    }

    /// Remove an edge; absent edges are ignored.
    pub fn remove_edge(&mut self, u: &str, v: &str) {
        let (u, v) = (u.trim(), v.trim());
        let removed = self
            .adj
            .get_mut(u)
            .map(|nbrs| nbrs.remove(v).is_some())
            .unwrap_or(false);
        if removed {
            if let Some(back) = self.adj.get_mut(v) {
                back.remove(u);
            }
            self.invalidate();
        }
    }

    pub fn has_edge(&self, u: &str, v: &str) -> bool {
        self.adj
            .get(u.trim())
            .is_some_and(|nbrs| nbrs.contains_key(v.trim()))
    }

    pub fn contains_vertex(&self, label: &str) -> bool {
        self.adj.contains_key(label.trim())
    }

    /// Vertex labels in label order.
    pub fn get_vertices(&self) -> Vec<String> {
        self.adj.keys().cloned().collect()
    }

    /// Every edge once, endpoints in label order.
    pub fn get_edges(&self) -> Vec<Edge> {
        self.adj
            .iter()
            .flat_map(|(u, nbrs)| {
                nbrs.iter()
                    .filter(move |(v, _)| u < *v)
                    .map(move |(v, w)| Edge::new(u.clone(), v.clone(), *w))
            })
            .collect()
    }

    pub fn weight(&self, u: &str, v: &str) -> Option<f64> {
        self.adj.get(u.trim())?.get(v.trim()).copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.values().map(BTreeMap::len).sum::<usize>() / 2
    }

    pub fn degree(&self, label: &str) -> Option<usize> {
        self.adj.get(label.trim()).map(BTreeMap::len)
    }

    /// Neighbors of `label` in label order (empty if absent).
    pub fn neighbors(&self, label: &str) -> impl Iterator<Item = &str> + '_ {
        self.adj
            .get(label.trim())
            .into_iter()
            .flat_map(|nbrs| nbrs.keys().map(String::as_str))
    }

    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// Faces of the default (`PathAddition`) embedding, memoized until the next mutation.
    ///
    /// Returns `Ok(None)` when the graph is not planar.
    pub fn faces(&self) -> Result<Option<&FaceSet>, EmbeddingError> {
        if let Some(cached) = self.faces.get() {
            return Ok(cached.as_ref());
        }
        let computed = match PathAddition.embedding(self) {
            Some(rotation) => Some(extract_faces(self, &rotation)?),
            None => None,
        };
        Ok(self.faces.get_or_init(|| computed).as_ref())
    }

    /// True while a face list from an earlier `faces()` call is still cached.
    pub fn has_cached_faces(&self) -> bool {
        self.faces.get().is_some()
    }

    pub(crate) fn adjacency(&self) -> &BTreeMap<String, BTreeMap<String, f64>> {
        &self.adj
    }

    fn invalidate(&mut self) {
        self.faces.take();
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, nbrs) in &self.adj {
            let listed: Vec<String> = nbrs.iter().map(|(n, w)| format!("{n}:{w}")).collect();
            writeln!(f, "{v}: [{}]", listed.join(", "))?;
        }
        Ok(())
    }
}
