use crate::expression::{Solution, Step};

/// Best candidate seen so far for one target.
///
/// A candidate replaces the current best only when strictly closer, so the
/// first of several equally close candidates is kept.
#[derive(Debug, Clone)]
pub(crate) struct Closest {
    target: u64,
    best: Option<Solution>,
}

impl Closest {
    pub(crate) fn new(target: u64) -> Self {
        Self { target, best: None }
    }

    fn improves(&self, value: u64) -> bool {
        match &self.best {
            None => true,
            Some(best) => value.abs_diff(self.target) < best.distance(self.target),
        }
    }

    /// Returns true once the kept candidate is exact.
    pub(crate) fn offer(&mut self, candidate: Solution) -> bool {
        if self.improves(candidate.value()) {
            self.best = Some(candidate);
        }
        self.is_exact()
    }

    /// Like [`offer`](Self::offer) for `step` followed by `rest`; the
    /// combined solution is only built when it is kept.
    pub(crate) fn offer_after(&mut self, step: Step, rest: Solution) -> bool {
        if self.improves(rest.value()) {
            self.best = Some(Solution::after(step, rest));
        }
        self.is_exact()
    }

    pub(crate) fn is_exact(&self) -> bool {
        self.best
            .as_ref()
            .is_some_and(|best| best.is_exact(self.target))
    }

    pub(crate) fn into_solution(self) -> Option<Solution> {
        self.best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_candidate_is_always_kept() {
        let mut closest = Closest::new(10);
        assert!(!closest.offer(Solution::Leaf(500)));
        assert_eq!(closest.into_solution(), Some(Solution::Leaf(500)));
    }

    #[test]
    fn test_ties_keep_earliest() {
        let mut closest = Closest::new(10);
        closest.offer(Solution::Leaf(8));
        closest.offer(Solution::Leaf(12));
        closest.offer(Solution::Leaf(8));
        assert_eq!(closest.into_solution(), Some(Solution::Leaf(8)));
    }

    #[test]
    fn test_exact_is_reported() {
        let mut closest = Closest::new(7);
        assert!(!closest.offer(Solution::Leaf(9)));
        assert!(closest.offer(Solution::Leaf(7)));
        assert!(closest.is_exact());
    }
}
