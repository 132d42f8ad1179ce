//! JSON graph files.
//!
//! ```json
//! {"vertices": ["A", "B"], "edges": [{"u": "A", "v": "B", "weight": 2.0}],
//!  "positions": {"A": [0.0, 0.0], "B": [1.0, 0.0]}}
//! ```
//!
//! Every field is optional; edge weights default to 1.

use anyhow::{Context, Result};
use greenberg::prelude::{Graph, Positions, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GraphFile {
    #[serde(default)]
    pub vertices: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
    #[serde(default)]
    pub positions: BTreeMap<String, [f64; 2]>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub u: String,
    pub v: String,
    #[serde(default = "unit_weight")]
    pub weight: f64,
}

fn unit_weight() -> f64 {
    1.0
}

impl GraphFile {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
    }

    /// Build the graph store; self-loops and duplicate edges collapse as in `Graph`.
    pub fn to_graph(&self) -> Graph {
        let mut g = Graph::new();
        for v in &self.vertices {
            g.add_vertex(v);
        }
        for e in &self.edges {
            g.add_edge(&e.u, &e.v, e.weight);
        }
        g
    }

    /// `None` when the file carries no coordinates at all.
    pub fn positions(&self) -> Option<Positions> {
        if self.positions.is_empty() {
            return None;
        }
        Some(
            self.positions
                .iter()
                .map(|(v, [x, y])| (v.trim().to_string(), Vec2::new(*x, *y)))
                .collect(),
        )
    }
}
