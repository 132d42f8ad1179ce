//! Lazy k-combinations of `0..n` in lexicographic order.

pub(crate) struct Combinations {
    n: usize,
    k: usize,
    idxs: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            idxs: (0..k).collect(),
            done: k == 0 || k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let out = self.idxs.clone();
        // Rightmost slot that has not reached its maximum.
        let slot = (0..self.k)
            .rev()
            .find(|&i| self.idxs[i] != i + self.n - self.k);
        match slot {
            Some(i) => {
                self.idxs[i] += 1;
                for j in i + 1..self.k {
                    self.idxs[j] = self.idxs[j - 1] + 1;
                }
            }
            None => self.done = true,
        }
        Some(out)
    }
}
