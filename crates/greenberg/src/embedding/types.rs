//! Rotation systems, faces and embedding errors.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::graph::Graph;

/// Errors raised while validating or using a rotation system.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmbeddingError {
    /// The rotation system names a vertex the graph does not hold.
    UnknownVertex { vertex: String },
    /// A vertex with incident edges has no rotation.
    MissingRotation { vertex: String },
    /// A rotation lists a non-neighbor.
    NotAdjacent { vertex: String, neighbor: String },
    /// A rotation lists the same neighbor twice.
    DuplicateNeighbor { vertex: String, neighbor: String },
    /// A rotation omits one of the vertex's neighbors.
    MissingNeighbor { vertex: String, neighbor: String },
    /// Euler's relation fails for a connected graph, so the rotation is not planar.
    NotPlanar { characteristic: i64 },
}

impl fmt::Display for EmbeddingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmbeddingError::UnknownVertex { vertex } => {
                write!(f, "rotation names unknown vertex {vertex:?}")
            }
            EmbeddingError::MissingRotation { vertex } => {
                write!(f, "vertex {vertex:?} has edges but no rotation")
            }
            EmbeddingError::NotAdjacent { vertex, neighbor } => write!(
                f,
                "rotation of {vertex:?} lists {neighbor:?}, which is not a neighbor"
            ),
            EmbeddingError::DuplicateNeighbor { vertex, neighbor } => {
                write!(f, "rotation of {vertex:?} lists {neighbor:?} twice")
            }
            EmbeddingError::MissingNeighbor { vertex, neighbor } => {
                write!(f, "rotation of {vertex:?} omits neighbor {neighbor:?}")
            }
            EmbeddingError::NotPlanar { characteristic } => write!(
                f,
                "embedding is not planar (V - E + F = {characteristic}, expected 2)"
            ),
        }
    }
}

impl std::error::Error for EmbeddingError {}

/// Cyclic neighbor order per vertex.
///
/// `rotation(v)[k + 1]` follows `rotation(v)[k]`, wrapping at the end.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RotationSystem {
    order: BTreeMap<String, Vec<String>>,
}

impl RotationSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or replace) the rotation at `vertex`.
    pub fn set<S: Into<String>>(&mut self, vertex: impl Into<String>, ring: Vec<S>) {
        self.order
            .insert(vertex.into(), ring.into_iter().map(Into::into).collect());
    }

    pub fn rotation(&self, vertex: &str) -> Option<&[String]> {
        self.order.get(vertex).map(Vec::as_slice)
    }

    /// Vertices and rotations in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.order.iter().map(|(v, r)| (v.as_str(), r.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Check that every rotation is a permutation of the vertex's neighbors.
    ///
    /// Labels are compared exactly. The `Graph` trims on insertion, so a
    /// rotation entry such as `" B"` never names the vertex `"B"`.
    pub fn validate(&self, g: &Graph) -> Result<(), EmbeddingError> {
        let adj = g.adjacency();
        for (v, ring) in &self.order {
            let Some(nbrs) = adj.get(v) else {
                return Err(EmbeddingError::UnknownVertex { vertex: v.clone() });
            };
            let mut seen = BTreeSet::new();
            for n in ring {
                if !nbrs.contains_key(n) {
                    return Err(EmbeddingError::NotAdjacent {
                        vertex: v.clone(),
                        neighbor: n.clone(),
                    });
                }
                if !seen.insert(n.as_str()) {
                    return Err(EmbeddingError::DuplicateNeighbor {
                        vertex: v.clone(),
                        neighbor: n.clone(),
                    });
                }
            }
        }
        for (v, nbrs) in adj {
            let ring = self.order.get(v);
            for n in nbrs.keys() {
                match ring {
                    None => return Err(EmbeddingError::MissingRotation { vertex: v.clone() }),
                    Some(r) if !r.contains(n) => {
                        return Err(EmbeddingError::MissingNeighbor {
                            vertex: v.clone(),
                            neighbor: n.clone(),
                        })
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<S>)> for RotationSystem {
    fn from_iter<I: IntoIterator<Item = (S, Vec<S>)>>(iter: I) -> Self {
        let mut rs = RotationSystem::new();
        for (v, ring) in iter {
            rs.set(v, ring);
        }
        rs
    }
}

/// Closed boundary walk of one region; the walk closes from the last vertex to the first.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Face {
    walk: Vec<String>,
}

impl Face {
    pub fn new(walk: Vec<String>) -> Self {
        Self { walk }
    }

    pub fn walk(&self) -> &[String] {
        &self.walk
    }

    /// Walk length k.
    #[inline]
    pub fn size(&self) -> usize {
        self.walk.len()
    }

    /// Greenberg invariant k − 2 (zero for walks shorter than a triangle).
    #[inline]
    pub fn greenberg_weight(&self) -> usize {
        self.walk.len().saturating_sub(2)
    }

    pub fn contains(&self, vertex: &str) -> bool {
        self.walk.iter().any(|v| v == vertex)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.walk.join("-"))
    }
}

/// All faces of one embedding, in extraction order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FaceSet {
    faces: Vec<Face>,
}

impl FaceSet {
    pub fn from_faces(faces: Vec<Face>) -> Self {
        Self { faces }
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Face> {
        self.faces.iter()
    }

    pub fn as_slice(&self) -> &[Face] {
        &self.faces
    }

    pub fn into_vec(self) -> Vec<Face> {
        self.faces
    }

    /// Σ face sizes; equals the dart count of the embedding.
    pub fn total_size(&self) -> usize {
        self.faces.iter().map(Face::size).sum()
    }

    /// S = Σ (k − 2).
    pub fn greenberg_sum(&self) -> usize {
        self.faces.iter().map(Face::greenberg_weight).sum()
    }

    pub fn sizes(&self) -> Vec<usize> {
        self.faces.iter().map(Face::size).collect()
    }

    /// Index of the largest face (first one on ties).
    pub fn largest(&self) -> Option<usize> {
        self.faces
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|(_, f)| f.size())
            .map(|(i, _)| i)
    }
}

impl<'a> IntoIterator for &'a FaceSet {
    type Item = &'a Face;
    type IntoIter = std::slice::Iter<'a, Face>;

    fn into_iter(self) -> Self::IntoIter {
        self.faces.iter()
    }
}
