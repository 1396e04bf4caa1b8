use log::debug;

/// Lazily yields every `k`-element set of indices from `0..n` in
/// lexicographic order.
///
/// The sequence is finite and not restartable: after the last set it keeps
/// returning `None`.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    exhausted: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        debug!("Enumerating {}-subsets of {} positions", k, n);
        Self {
            n,
            indices: (0..k).collect(),
            exhausted: k > n,
        }
    }

    /// Move `indices` to the next set, or report that there is none.
    fn advance(&mut self) -> bool {
        let k = self.indices.len();
        // Rightmost position that can still move right
        let Some(pivot) = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) else {
            return false;
        };
        self.indices[pivot] += 1;
        for i in pivot + 1..k {
            self.indices[i] = self.indices[i - 1] + 1;
        }
        true
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let current = self.indices.clone();
        if !self.advance() {
            self.exhausted = true;
        }
        Some(current)
    }
}

/// `C(n, k)`, saturating at `u64::MAX`
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1u64, |acc, i| {
        let numerator = (n - i) as u64;
        let denominator = (i + 1) as u64;
        acc.checked_mul(numerator)
            .map_or(u64::MAX, |product| product / denominator)
    })
}
