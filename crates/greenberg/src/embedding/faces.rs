//! Dart traversal: rotation system → faces.

use std::collections::{HashMap, HashSet};

use crate::graph::indexed::IndexedGraph;
use crate::graph::Graph;

use super::types::{EmbeddingError, Face, FaceSet, RotationSystem};

/// Trace all faces of `rotation` on `g`.
///
/// Algorithm
/// - `next[(v, u)]` = neighbor following `u` in `v`'s rotation.
/// - For each unvisited dart (u, v): append `u`, mark the dart, step to
///   `(v, next[(v, u)])`, and stop when the start dart comes around again.
///
/// Starting darts are taken in vertex-label order, then rotation order.
pub fn extract_faces(g: &Graph, rotation: &RotationSystem) -> Result<FaceSet, EmbeddingError> {
    rotation.validate(g)?;
    let ig = IndexedGraph::from_graph(g);
    let mut next: HashMap<(usize, usize), usize> = HashMap::with_capacity(2 * ig.edge_count);
    let mut darts: Vec<(usize, usize)> = Vec::with_capacity(2 * ig.edge_count);
    for (label, ring) in rotation.iter() {
        let v = ig
            .index
            .get(label)
            .copied()
            .ok_or_else(|| EmbeddingError::UnknownVertex {
                vertex: label.to_string(),
            })?;
        let ids = ring
            .iter()
            .map(|n| {
                ig.index.get(n).copied().ok_or_else(|| EmbeddingError::NotAdjacent {
                    vertex: label.to_string(),
                    neighbor: n.clone(),
                })
            })
            .collect::<Result<Vec<usize>, _>>()?;
        for (k, &u) in ids.iter().enumerate() {
            next.insert((v, u), ids[(k + 1) % ids.len()]);
            darts.push((v, u));
        }
    }
    let faces = trace_darts(&ig, &darts, &next);
    debug_assert_eq!(faces.total_size(), 2 * ig.edge_count);
    Ok(faces)
}

fn trace_darts(
    ig: &IndexedGraph,
    darts: &[(usize, usize)],
    next: &HashMap<(usize, usize), usize>,
) -> FaceSet {
    let mut visited: HashSet<(usize, usize)> = HashSet::with_capacity(darts.len());
    let mut faces = Vec::new();
    for &start in darts {
        if visited.contains(&start) {
            continue;
        }
        let mut walk = Vec::new();
        let mut dart = start;
        loop {
            walk.push(ig.labels[dart.0].clone());
            visited.insert(dart);
            let (u, v) = dart;
            dart = (v, next[&(v, u)]);
            if dart == start {
                break;
            }
        }
        faces.push(Face::new(walk));
    }
    FaceSet::from_faces(faces)
}

/// V − E + F; equals 2 for a planar embedding of a connected graph.
pub fn euler_characteristic(vertices: usize, edges: usize, faces: usize) -> i64 {
    vertices as i64 - edges as i64 + faces as i64
}
