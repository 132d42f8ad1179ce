//! Path-addition planarity test with embedding.
//!
//! Algorithm (per biconnected block with at least three vertices)
//! - Embed one cycle as two oppositely oriented faces.
//! - Repeat until every block edge is placed:
//!   - collect fragments: unplaced edges between placed vertices, and components of
//!     unplaced vertices together with their attachment vertices;
//!   - a fragment is admissible in a face holding all of its attachments;
//!   - no admissible face for some fragment → nonplanar;
//!   - prefer a fragment with exactly one admissible face, otherwise take the first;
//!   - route a path through the fragment between two attachments and split the face.
//! - Read the rotation at each vertex off the oriented faces.
//!
//! Blocks are spliced at cut vertices by concatenating their rotations, which merges
//! one face corner of each block, so every connected component keeps V − E + F = 2.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use crate::embedding::RotationSystem;
use crate::graph::indexed::IndexedGraph;
use crate::graph::Graph;

use super::{lowpoint_scan, PlanarityOracle};

/// Planarity oracle based on path addition over biconnected blocks.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathAddition;

impl PlanarityOracle for PathAddition {
    fn embedding(&self, g: &Graph) -> Option<RotationSystem> {
        let ig = IndexedGraph::from_graph(g);
        let n = ig.len();
        if n >= 3 && ig.edge_count > 3 * n - 6 {
            tracing::trace!(n, edges = ig.edge_count, "edge bound 3n-6 exceeded");
            return None;
        }
        let scan = lowpoint_scan(&ig);
        let mut rings: Vec<Vec<usize>> = vec![Vec::new(); n];
        for block in &scan.blocks {
            if let [(u, v)] = block.as_slice() {
                rings[*u].push(*v);
                rings[*v].push(*u);
                continue;
            }
            for (v, ring) in BlockEmbedder::new(n, block).run()? {
                rings[v].extend(ring);
            }
        }
        Some(
            ig.labels
                .iter()
                .zip(rings)
                .map(|(label, ring)| {
                    let named: Vec<String> =
                        ring.into_iter().map(|i| ig.labels[i].clone()).collect();
                    (label.clone(), named)
                })
                .collect(),
        )
    }
}

/// Attachments of a fragment plus what it is made of.
#[derive(Clone, Debug)]
struct Fragment {
    attachments: Vec<usize>,
    body: FragmentBody,
}

#[derive(Clone, Debug)]
enum FragmentBody {
    Chord(usize, usize),
    Component(BTreeSet<usize>),
}

struct BlockEmbedder {
    adj: BTreeMap<usize, Vec<usize>>,
    edge_total: usize,
    placed_vertex: Vec<bool>,
    placed_edge: HashSet<(usize, usize)>,
    /// Oriented boundary cycles; every placed dart sits in exactly one of them.
    faces: Vec<Vec<usize>>,
}

impl BlockEmbedder {
    fn new(n: usize, block: &[(usize, usize)]) -> Self {
        let mut adj: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for &(u, v) in block {
            adj.entry(u).or_default().push(v);
            adj.entry(v).or_default().push(u);
        }
        for nbrs in adj.values_mut() {
            nbrs.sort_unstable();
        }
        Self {
            adj,
            edge_total: block.len(),
            placed_vertex: vec![false; n],
            placed_edge: HashSet::with_capacity(block.len()),
            faces: Vec::new(),
        }
    }

    /// Rotation per block vertex, or `None` if the block is not planar.
    fn run(mut self) -> Option<Vec<(usize, Vec<usize>)>> {
        let cycle = self.initial_cycle()?;
        let mut reversed = cycle.clone();
        reversed.reverse();
        self.place_path(&cycle);
        self.place_edge(cycle[cycle.len() - 1], cycle[0]);
        self.faces.push(cycle);
        self.faces.push(reversed);

        while self.placed_edge.len() < self.edge_total {
            let fragments = self.fragments();
            let mut choice: Option<(usize, usize)> = None;
            for (fi, frag) in fragments.iter().enumerate() {
                let admissible: Vec<usize> = (0..self.faces.len())
                    .filter(|&k| frag.attachments.iter().all(|a| self.faces[k].contains(a)))
                    .collect();
                match admissible.as_slice() {
                    [] => return None,
                    [only] => {
                        choice = Some((fi, *only));
                        break;
                    }
                    [first, ..] => {
                        if choice.is_none() {
                            choice = Some((fi, *first));
                        }
                    }
                }
            }
            let (fi, face) = choice?;
            let path = self.fragment_path(&fragments[fi])?;
            self.split_face(face, &path)?;
            self.place_path(&path);
        }
        self.rotations()
    }

    /// Cycle through the smallest edge (a, b): a BFS path b → a that avoids that edge.
    fn initial_cycle(&self) -> Option<Vec<usize>> {
        let (&a, nbrs) = self.adj.iter().next()?;
        let b = *nbrs.first()?;
        let mut prev: HashMap<usize, usize> = HashMap::from([(b, b)]);
        let mut queue = VecDeque::from([b]);
        'bfs: while let Some(x) = queue.pop_front() {
            for &y in &self.adj[&x] {
                if (x == b && y == a) || prev.contains_key(&y) {
                    continue;
                }
                prev.insert(y, x);
                if y == a {
                    break 'bfs;
                }
                queue.push_back(y);
            }
        }
        // Walk back from a to b, then read the cycle as a, b, ..., pred(a).
        let mut back = vec![*prev.get(&a)?];
        while back[back.len() - 1] != b {
            back.push(prev[&back[back.len() - 1]]);
        }
        back.reverse();
        let mut cycle = vec![a];
        cycle.extend(back);
        Some(cycle)
    }

    fn fragments(&self) -> Vec<Fragment> {
        let mut out = Vec::new();
        for (&u, nbrs) in &self.adj {
            for &v in nbrs {
                if u < v
                    && self.placed_vertex[u]
                    && self.placed_vertex[v]
                    && !self.placed_edge.contains(&(u, v))
                {
                    out.push(Fragment {
                        attachments: vec![u, v],
                        body: FragmentBody::Chord(u, v),
                    });
                }
            }
        }
        let mut seen: HashSet<usize> = HashSet::new();
        for &s in self.adj.keys() {
            if self.placed_vertex[s] || !seen.insert(s) {
                continue;
            }
            let mut comp = BTreeSet::new();
            let mut attach = BTreeSet::new();
            let mut stack = vec![s];
            while let Some(x) = stack.pop() {
                comp.insert(x);
                for &y in &self.adj[&x] {
                    if self.placed_vertex[y] {
                        attach.insert(y);
                    } else if seen.insert(y) {
                        stack.push(y);
                    }
                }
            }
            out.push(Fragment {
                attachments: attach.into_iter().collect(),
                body: FragmentBody::Component(comp),
            });
        }
        out
    }

    /// Path `a, …, b` through the fragment between two distinct attachments.
    fn fragment_path(&self, frag: &Fragment) -> Option<Vec<usize>> {
        let comp = match &frag.body {
            FragmentBody::Chord(u, v) => return Some(vec![*u, *v]),
            FragmentBody::Component(comp) => comp,
        };
        let a = *frag.attachments.first()?;
        let x = *self.adj[&a].iter().find(|y| comp.contains(y))?;
        let mut prev: HashMap<usize, usize> = HashMap::from([(x, x)]);
        let mut queue = VecDeque::from([x]);
        while let Some(y) = queue.pop_front() {
            let exit = self.adj[&y]
                .iter()
                .find(|&&b| b != a && self.placed_vertex[b]);
            if let Some(&b) = exit {
                let mut inner = vec![y];
                while inner[inner.len() - 1] != x {
                    inner.push(prev[&inner[inner.len() - 1]]);
                }
                inner.reverse();
                let mut path = vec![a];
                path.extend(inner);
                path.push(b);
                return Some(path);
            }
            for &z in &self.adj[&y] {
                if comp.contains(&z) && !prev.contains_key(&z) {
                    prev.insert(z, y);
                    queue.push_back(z);
                }
            }
        }
        None
    }

    /// Split face `k` along `path` (endpoints on the face, interior new).
    ///
    /// With the face read as f_i = a … f_j = b, the two halves are
    /// `f_i..=f_j + reversed interior` and `f_j..=f_i + interior`, so each new dart
    /// lands in exactly one of them and orientation stays consistent.
    fn split_face(&mut self, k: usize, path: &[usize]) -> Option<()> {
        let face = &self.faces[k];
        let (a, b) = (path[0], path[path.len() - 1]);
        let i = face.iter().position(|&v| v == a)?;
        let j = face.iter().position(|&v| v == b)?;
        let inner = &path[1..path.len() - 1];
        let mut first = cyclic_segment(face, i, j);
        first.extend(inner.iter().rev());
        let mut second = cyclic_segment(face, j, i);
        second.extend(inner.iter());
        self.faces[k] = first;
        self.faces.push(second);
        Some(())
    }

    fn place_path(&mut self, path: &[usize]) {
        for &v in path {
            self.placed_vertex[v] = true;
        }
        for w in path.windows(2) {
            self.place_edge(w[0], w[1]);
        }
    }

    fn place_edge(&mut self, u: usize, v: usize) {
        self.placed_edge.insert((u.min(v), u.max(v)));
    }

    /// For a face walk `u, v, x` the neighbor after `u` around `v` is `x`.
    fn rotations(&self) -> Option<Vec<(usize, Vec<usize>)>> {
        let mut succ: HashMap<(usize, usize), usize> = HashMap::new();
        for face in &self.faces {
            let k = face.len();
            for t in 0..k {
                let (u, v, x) = (face[t], face[(t + 1) % k], face[(t + 2) % k]);
                succ.insert((v, u), x);
            }
        }
        let mut out = Vec::with_capacity(self.adj.len());
        for (&v, nbrs) in &self.adj {
            let first = *nbrs.first()?;
            let mut ring = vec![first];
            let mut cur = first;
            loop {
                cur = *succ.get(&(v, cur))?;
                if cur == first {
                    break;
                }
                ring.push(cur);
                if ring.len() > nbrs.len() {
                    return None;
                }
            }
            if ring.len() != nbrs.len() {
                return None;
            }
            out.push((v, ring));
        }
        Some(out)
    }
}

/// `face[from], face[from + 1], …, face[to]`, wrapping around.
fn cyclic_segment(face: &[usize], from: usize, to: usize) -> Vec<usize> {
    let mut out = Vec::new();
    let mut t = from;
    loop {
        out.push(face[t]);
        if t == to {
            break;
        }
        t = (t + 1) % face.len();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn k4_block() -> BlockEmbedder {
        BlockEmbedder::new(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)])
    }

    #[test]
    fn rotation_that_skips_a_neighbor_is_rejected() {
        // Around 0 the successors close 1 → 2 → 1 and never reach 3.
        let mut b = k4_block();
        b.faces = vec![vec![1, 0, 2], vec![2, 0, 1]];
        assert_eq!(b.rotations(), None);
    }

    #[test]
    fn complete_face_set_gives_full_rings() {
        let mut b = k4_block();
        b.faces = vec![vec![0, 1, 2], vec![0, 2, 3], vec![0, 3, 1], vec![1, 3, 2]];
        let rings = b.rotations().unwrap();
        assert_eq!(rings.len(), 4);
        assert!(rings.iter().all(|(_, ring)| ring.len() == 3));
    }
}
