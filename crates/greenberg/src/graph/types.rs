//! Edge and error types of the graph store.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Undirected weighted edge. Equality and hashing ignore endpoint order and weight.
#[derive(Clone, Debug)]
pub struct Edge {
    pub u: String,
    pub v: String,
    /// Carried for presentation layers; the Greenberg check never reads it.
    pub weight: f64,
}

impl Edge {
    pub fn new(u: impl Into<String>, v: impl Into<String>, weight: f64) -> Self {
        Self {
            u: u.into(),
            v: v.into(),
            weight,
        }
    }

    /// Endpoints in label order.
    #[inline]
    pub fn key(&self) -> (&str, &str) {
        if self.u <= self.v {
            (&self.u, &self.v)
        } else {
            (&self.v, &self.u)
        }
    }

    /// True if `label` is one of the endpoints.
    pub fn touches(&self, label: &str) -> bool {
        self.u == label || self.v == label
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// Errors surfaced by graph mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// `remove_vertex` was called with a label the graph does not hold.
    NotFound { vertex: String },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::NotFound { vertex } => write!(f, "vertex {vertex:?} is not in the graph"),
        }
    }
}

impl std::error::Error for GraphError {}
