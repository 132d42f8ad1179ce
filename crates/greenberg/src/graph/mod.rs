//! Graph Store: simple undirected graphs with string labels.
//!
//! Purpose
//! - Hold vertices and weighted edges for one editing session and enforce the
//!   simple-graph invariants (no self-loops, no parallel edges).
//! - Memoize the face list of the default embedding and drop it on every mutation,
//!   so a stale `FaceSet` never survives an edit.
//!
//! Layout
//! - `types.rs` (edge and error types), `store.rs` (the `Graph`), and `indexed.rs`
//!   (dense index view used by the oracles and the face extractor).

pub(crate) mod indexed;
mod store;
mod types;

pub use store::Graph;
pub use types::{Edge, GraphError};
