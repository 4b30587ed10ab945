//! Needleman-Wunsch global alignment with a linear gap cost.
//!
//! Only the score is computed, so the DP keeps two fronts (rows) of the
//! matrix at a time. The local variant in `crate::sw` reuses the same front
//! computation with a zero floor.
pub mod affine;

use sm_types::*;

/// Computes front `i + 1` of a linear-gap DP from front `i`.
///
/// `ca` is the `i`th symbol of `a`. With `LOCAL`, every cell is floored at 0.
/// Returns the maximum value in the new front.
#[inline]
pub(crate) fn next_front<T, S: ScoringFunction<T>, const LOCAL: bool>(
    i: usize,
    ca: &T,
    b: &[T],
    gap: &LinearGap,
    scoring: &S,
    prev: &[Score],
    next: &mut [Score],
) -> Score {
    next[0] = if LOCAL { 0.0 } else { gap.gap_score(i + 1) };
    let mut best = next[0];
    for (j, cb) in b.iter().enumerate() {
        let mut s = (prev[j] + scoring.score(ca, cb))
            .max(prev[j + 1] - gap.cost)
            .max(next[j] - gap.cost);
        if LOCAL {
            s = s.max(0.0);
        }
        next[j + 1] = s;
        best = best.max(s);
    }
    best
}

/// Needleman-Wunsch aligner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NW<S> {
    /// The penalty per gap position.
    pub gap: LinearGap,
    /// Substitution scores.
    pub scoring: S,
}

impl Default for NW<MatchMismatch> {
    fn default() -> Self {
        Self {
            gap: LinearGap::default(),
            scoring: MatchMismatch::default(),
        }
    }
}

impl<S> NW<S> {
    pub fn new(gap_cost: Score, scoring: S) -> Self {
        Self {
            gap: LinearGap::new(gap_cost),
            scoring,
        }
    }

    /// The best score of an alignment of all of `a` against all of `b`.
    pub fn align<T>(&self, a: &[T], b: &[T]) -> Score
    where
        S: ScoringFunction<T>,
    {
        let mut prev = (0..=b.len())
            .map(|j| self.gap.gap_score(j))
            .collect::<Vec<_>>();
        let mut next = vec![0.0; b.len() + 1];
        for (i, ca) in a.iter().enumerate() {
            next_front::<T, S, false>(i, ca, b, &self.gap, &self.scoring, &prev, &mut next);
            std::mem::swap(&mut prev, &mut next);
        }
        prev[b.len()]
    }
}

impl<T, S: ScoringFunction<T>> Scorer<T> for NW<S> {
    fn score(&self, a: &[T], b: &[T]) -> Score {
        self.align(a, b)
    }
}

/// Global alignment score of `a` and `b`.
///
/// `gap_cost` is subtracted for every symbol aligned to a gap.
pub fn global_align<T, S: ScoringFunction<T>>(
    a: &[T],
    b: &[T],
    gap_cost: Score,
    scoring: S,
) -> Score {
    NW::new(gap_cost, scoring).align(a, b)
}
