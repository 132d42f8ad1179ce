//! Small named graphs shared by the unit tests.

use crate::embedding::{Face, FaceSet};
use crate::graph::Graph;

/// Cycle v0 – v1 – … – v(n−1) – v0.
pub(crate) fn cycle(n: usize) -> Graph {
    let mut g = Graph::new();
    for i in 0..n {
        g.add_edge(&format!("v{i}"), &format!("v{}", (i + 1) % n), 1.0);
    }
    g
}

/// Path v0 – … – v(n−1).
pub(crate) fn path(n: usize) -> Graph {
    let mut g = Graph::new();
    for i in 0..n {
        g.add_vertex(&format!("v{i}"));
    }
    for i in 1..n {
        g.add_edge(&format!("v{}", i - 1), &format!("v{i}"), 1.0);
    }
    g
}

pub(crate) fn complete(n: usize) -> Graph {
    let mut g = Graph::new();
    for i in 0..n {
        g.add_vertex(&format!("v{i}"));
        for j in 0..i {
            g.add_edge(&format!("v{j}"), &format!("v{i}"), 1.0);
        }
    }
    g
}

/// K_{a,b} with parts a0.. and b0...
pub(crate) fn complete_bipartite(a: usize, b: usize) -> Graph {
    let mut g = Graph::new();
    for i in 0..a {
        for j in 0..b {
            g.add_edge(&format!("a{i}"), &format!("b{j}"), 1.0);
        }
    }
    g
}

/// Hub `h` joined to every vertex of the rim cycle r0..r(m−1).
pub(crate) fn wheel(m: usize) -> Graph {
    let mut g = Graph::new();
    for i in 0..m {
        g.add_edge(&format!("r{i}"), &format!("r{}", (i + 1) % m), 1.0);
        g.add_edge("h", &format!("r{i}"), 1.0);
    }
    g
}

pub(crate) fn grid_label(i: usize, j: usize) -> String {
    format!("g{i}_{j}")
}

/// rows × cols grid graph; with `diagonals`, every cell also gets its ↘ diagonal.
pub(crate) fn grid(rows: usize, cols: usize, diagonals: bool) -> Graph {
    let mut g = Graph::new();
    for i in 0..rows {
        for j in 0..cols {
            g.add_vertex(&grid_label(i, j));
            if i + 1 < rows {
                g.add_edge(&grid_label(i, j), &grid_label(i + 1, j), 1.0);
            }
            if j + 1 < cols {
                g.add_edge(&grid_label(i, j), &grid_label(i, j + 1), 1.0);
            }
            if diagonals && i + 1 < rows && j + 1 < cols {
                g.add_edge(&grid_label(i, j), &grid_label(i + 1, j + 1), 1.0);
            }
        }
    }
    g
}

/// Outer 5-cycle, inner pentagram, spokes.
pub(crate) fn petersen() -> Graph {
    let mut g = Graph::new();
    for i in 0..5 {
        g.add_edge(&format!("o{i}"), &format!("o{}", (i + 1) % 5), 1.0);
        g.add_edge(&format!("i{i}"), &format!("i{}", (i + 2) % 5), 1.0);
        g.add_edge(&format!("o{i}"), &format!("i{i}"), 1.0);
    }
    g
}

/// Two triangles sharing the vertex `c`.
pub(crate) fn bowtie() -> Graph {
    Graph::from_edges([
        ("a", "b"),
        ("b", "c"),
        ("c", "a"),
        ("c", "d"),
        ("d", "e"),
        ("e", "c"),
    ])
}

/// Synthetic faces with the given sizes; walks use fresh labels so faces stay distinct.
pub(crate) fn faces_with_sizes(sizes: &[usize]) -> FaceSet {
    FaceSet::from_faces(
        sizes
            .iter()
            .enumerate()
            .map(|(i, &k)| Face::new((0..k).map(|j| format!("f{i}_{j}")).collect()))
            .collect(),
    )
}

/// Faces sorted by walk, for comparing two groupings as multisets.
pub(crate) fn sorted_walks<'a>(faces: impl IntoIterator<Item = &'a Face>) -> Vec<Vec<String>> {
    let mut walks: Vec<Vec<String>> = faces.into_iter().map(|f| f.walk().to_vec()).collect();
    walks.sort();
    walks
}
