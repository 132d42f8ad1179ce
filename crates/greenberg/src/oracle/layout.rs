//! Display-side layout: vertex coordinates and outer-face selection.
//!
//! Nothing here feeds the Greenberg verdict. The hull-based outer face is a
//! `Result`; `select_outer_face` names the largest-face fallback explicitly.

use std::collections::{BTreeMap, BTreeSet};
use std::f64::consts::TAU;
use std::fmt;

use nalgebra::Vector2;

use crate::embedding::FaceSet;
use crate::graph::Graph;

/// Vertex label → 2D position.
pub type Positions = BTreeMap<String, Vector2<f64>>;

/// Why the hull-aware outer face could not be computed.
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutError {
    /// A vertex on some face has no coordinates.
    MissingPosition { vertex: String },
    /// Fewer than three distinct, non-collinear hull points.
    DegenerateHull { points: usize },
    /// No face passes through every hull vertex.
    NoFaceOnHull,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::MissingPosition { vertex } => {
                write!(f, "no position for vertex {vertex:?}")
            }
            LayoutError::DegenerateHull { points } => {
                write!(f, "convex hull is degenerate ({points} points)")
            }
            LayoutError::NoFaceOnHull => write!(f, "no face contains every hull vertex"),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Source of 2D coordinates for a graph.
pub trait LayoutOracle {
    fn positions(&self, g: &Graph) -> Result<Positions, LayoutError>;
}

/// Vertices evenly spaced on a circle, in label order.
#[derive(Clone, Copy, Debug)]
pub struct CircleLayout {
    pub center: Vector2<f64>,
    pub radius: f64,
}

impl Default for CircleLayout {
    fn default() -> Self {
        Self {
            center: Vector2::zeros(),
            radius: 1.0,
        }
    }
}

impl LayoutOracle for CircleLayout {
    fn positions(&self, g: &Graph) -> Result<Positions, LayoutError> {
        let vertices = g.get_vertices();
        let n = vertices.len() as f64;
        Ok(vertices
            .into_iter()
            .enumerate()
            .map(|(i, v)| {
                let angle = TAU * i as f64 / n;
                let p = self.center + self.radius * Vector2::new(angle.cos(), angle.sin());
                (v, p)
            })
            .collect())
    }
}

/// Caller-supplied coordinates (for example from an editor canvas).
#[derive(Clone, Debug, Default)]
pub struct FixedLayout {
    pub positions: Positions,
}

impl LayoutOracle for FixedLayout {
    fn positions(&self, g: &Graph) -> Result<Positions, LayoutError> {
        let mut out = Positions::new();
        for v in g.get_vertices() {
            let p = *self
                .positions
                .get(&v)
                .ok_or_else(|| LayoutError::MissingPosition { vertex: v.clone() })?;
            out.insert(v, p);
        }
        Ok(out)
    }
}

/// Andrew's monotone chain hull; returns indices into `points` in CCW order.
///
/// Collinear points are dropped, and so are duplicates (keeping the first).
pub fn convex_hull(points: &[Vector2<f64>]) -> Option<Vec<usize>> {
    if points.len() < 2 {
        return None;
    }
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| {
        let (pa, pb) = (points[a], points[b]);
        pa.x.partial_cmp(&pb.x)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| pa.y.partial_cmp(&pb.y).unwrap_or(std::cmp::Ordering::Equal))
    });
    order.dedup_by(|a, b| (points[*a] - points[*b]).norm() < 1e-12);
    if order.len() < 2 {
        return None;
    }
    let mut lower: Vec<usize> = Vec::with_capacity(order.len());
    for &i in &order {
        while lower.len() >= 2
            && cross(points[lower[lower.len() - 2]], points[lower[lower.len() - 1]], points[i])
                <= 0.0
        {
            lower.pop();
        }
        lower.push(i);
    }
    let mut upper: Vec<usize> = Vec::with_capacity(order.len());
    for &i in order.iter().rev() {
        while upper.len() >= 2
            && cross(points[upper[upper.len() - 2]], points[upper[upper.len() - 1]], points[i])
                <= 0.0
        {
            upper.pop();
        }
        upper.push(i);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    Some(hull)
}

#[inline]
fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Largest face through every vertex of the convex hull of the face vertices.
pub fn hull_outer_face(faces: &FaceSet, positions: &Positions) -> Result<usize, LayoutError> {
    let labels: BTreeSet<&str> = faces
        .iter()
        .flat_map(|f| f.walk().iter().map(String::as_str))
        .collect();
    let mut names = Vec::with_capacity(labels.len());
    let mut points = Vec::with_capacity(labels.len());
    for label in labels {
        let p = positions
            .get(label)
            .ok_or_else(|| LayoutError::MissingPosition {
                vertex: label.to_string(),
            })?;
        names.push(label);
        points.push(*p);
    }
    let hull = convex_hull(&points).unwrap_or_default();
    if hull.len() < 3 {
        return Err(LayoutError::DegenerateHull { points: hull.len() });
    }
    let on_hull: Vec<&str> = hull.iter().map(|&i| names[i]).collect();
    faces
        .iter()
        .enumerate()
        .rev()
        .filter(|(_, f)| on_hull.iter().all(|v| f.contains(v)))
        .max_by_key(|(_, f)| f.size())
        .map(|(i, _)| i)
        .ok_or(LayoutError::NoFaceOnHull)
}

/// How the outer face was chosen.
#[derive(Clone, Debug, PartialEq)]
pub enum OuterFaceSource {
    Hull,
    /// Hull selection failed with `cause`; the largest face was used instead.
    LargestFace { cause: LayoutError },
}

#[derive(Clone, Debug, PartialEq)]
pub struct OuterFace {
    /// Index into the `FaceSet`.
    pub index: usize,
    pub source: OuterFaceSource,
}

/// Pick the face to draw as unbounded. `None` only for an empty `FaceSet`.
pub fn select_outer_face(
    faces: &FaceSet,
    positions: Result<Positions, LayoutError>,
) -> Option<OuterFace> {
    match positions.and_then(|p| hull_outer_face(faces, &p)) {
        Ok(index) => Some(OuterFace {
            index,
            source: OuterFaceSource::Hull,
        }),
        Err(cause) => {
            tracing::debug!(%cause, "hull outer face unavailable; using largest face");
            faces.largest().map(|index| OuterFace {
                index,
                source: OuterFaceSource::LargestFace { cause },
            })
        }
    }
}
