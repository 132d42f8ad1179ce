//! Combinatorial embeddings and face extraction.
//!
//! Purpose
//! - `RotationSystem`: per-vertex cyclic neighbor order, validated against a `Graph`.
//! - `extract_faces`: trace every dart once through the successor permutation
//!   `(u, v) ↦ (v, next_v(u))`; each cycle of that permutation is one face.
//!
//! Invariant
//! - Σ face sizes = 2·|E| for every extraction, since each dart lands in exactly one face.

mod faces;
mod types;

pub use faces::{euler_characteristic, extract_faces};
pub use types::{EmbeddingError, Face, FaceSet, RotationSystem};
