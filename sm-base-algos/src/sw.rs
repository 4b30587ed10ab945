//! Smith-Waterman local alignment with a linear gap cost.

use crate::nw::next_front;
use sm_types::*;

/// Smith-Waterman aligner.
///
/// Uses the same recurrence as `NW`, but every cell is floored at 0 and the
/// result is the maximum over the whole matrix instead of the final cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SW<S> {
    pub gap: LinearGap,
    pub scoring: S,
}

impl Default for SW<MatchMismatch> {
    fn default() -> Self {
        Self {
            gap: LinearGap::default(),
            scoring: MatchMismatch::default(),
        }
    }
}

impl<S> SW<S> {
    pub fn new(gap_cost: Score, scoring: S) -> Self {
        Self {
            gap: LinearGap::new(gap_cost),
            scoring,
        }
    }

    /// The best score of an alignment of a substring of `a` against a
    /// substring of `b`. Never negative.
    pub fn align<T>(&self, a: &[T], b: &[T]) -> Score
    where
        S: ScoringFunction<T>,
    {
        let mut prev = vec![0.0; b.len() + 1];
        let mut next = vec![0.0; b.len() + 1];
        let mut best: Score = 0.0;
        for (i, ca) in a.iter().enumerate() {
            let front_max =
                next_front::<T, S, true>(i, ca, b, &self.gap, &self.scoring, &prev, &mut next);
            best = best.max(front_max);
            std::mem::swap(&mut prev, &mut next);
        }
        best
    }
}

impl<T, S: ScoringFunction<T>> Scorer<T> for SW<S> {
    fn score(&self, a: &[T], b: &[T]) -> Score {
        self.align(a, b)
    }
}

/// Local alignment score of `a` and `b`.
pub fn local_align<T, S: ScoringFunction<T>>(
    a: &[T],
    b: &[T],
    gap_cost: Score,
    scoring: S,
) -> Score {
    SW::new(gap_cost, scoring).align(a, b)
}
