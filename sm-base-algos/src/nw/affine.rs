//! Global alignment with affine gap costs (Gotoh).
//!
//! A single linear-gap matrix cannot tell a freshly opened gap from an
//! extended one, so every front holds three layers:
//! - `m`: the alignment ends in a match or substitution,
//! - `x`: the alignment ends in a gap that consumes a symbol of `a`,
//! - `y`: the alignment ends in a gap that consumes a symbol of `b`.
use sm_types::*;

const NEG_INF: Score = Score::NEG_INFINITY;

/// Scores per affine layer for one row of the DP.
#[derive(Clone, Debug)]
struct AffineFront {
    m: Vec<Score>,
    x: Vec<Score>,
    y: Vec<Score>,
}

impl AffineFront {
    fn new(len: usize) -> Self {
        Self {
            m: vec![NEG_INF; len],
            x: vec![NEG_INF; len],
            y: vec![NEG_INF; len],
        }
    }

    /// Row 0: only gaps consuming `b` are possible.
    fn first_front(gap: &AffineGap, len: usize) -> Self {
        let mut front = Self::new(len);
        front.m[0] = 0.0;
        for j in 1..len {
            front.y[j] = gap.gap_score(j);
        }
        front
    }

    #[inline]
    fn best(&self, j: usize) -> Score {
        self.m[j].max(self.x[j]).max(self.y[j])
    }
}

/// Needleman-Wunsch aligner with affine gap costs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineNW<S> {
    pub gap: AffineGap,
    pub scoring: S,
}

impl Default for AffineNW<MatchMismatch> {
    fn default() -> Self {
        Self {
            gap: AffineGap::default(),
            scoring: MatchMismatch::default(),
        }
    }
}

impl<S> AffineNW<S> {
    pub fn new(gap_start: Score, gap_continuation: Score, scoring: S) -> Self {
        Self {
            gap: AffineGap::new(gap_start, gap_continuation),
            scoring,
        }
    }

    /// Computes front `i + 1` from front `i`.
    /// `ca` is the `i`th symbol of `a`.
    fn next_front<T>(&self, i: usize, ca: &T, b: &[T], prev: &AffineFront, next: &mut AffineFront)
    where
        S: ScoringFunction<T>,
    {
        let AffineGap {
            start,
            continuation,
        } = self.gap;
        next.m[0] = NEG_INF;
        next.x[0] = self.gap.gap_score(i + 1);
        next.y[0] = NEG_INF;
        for (j, cb) in b.iter().enumerate() {
            let j = j + 1;
            next.m[j] = self.scoring.score(ca, cb) + prev.best(j - 1);
            next.x[j] = (prev.m[j] + start).max(prev.x[j] + continuation);
            next.y[j] = (next.m[j - 1] + start).max(next.y[j - 1] + continuation);
        }
    }

    /// The best score of a global alignment of `a` and `b`.
    pub fn align<T>(&self, a: &[T], b: &[T]) -> Score
    where
        S: ScoringFunction<T>,
    {
        let mut prev = AffineFront::first_front(&self.gap, b.len() + 1);
        let mut next = AffineFront::new(b.len() + 1);
        for (i, ca) in a.iter().enumerate() {
            self.next_front(i, ca, b, &prev, &mut next);
            std::mem::swap(&mut prev, &mut next);
        }
        prev.best(b.len())
    }
}

impl<T, S: ScoringFunction<T>> Scorer<T> for AffineNW<S> {
    fn score(&self, a: &[T], b: &[T]) -> Score {
        self.align(a, b)
    }
}

/// Global alignment score of `a` and `b` under affine gap costs.
///
/// `gap_start` and `gap_continuation` are added to the score, so penalties
/// are negative: a gap of length `L` contributes
/// `gap_start + (L-1) * gap_continuation`.
pub fn affine_align<T, S: ScoringFunction<T>>(
    a: &[T],
    b: &[T],
    gap_start: Score,
    gap_continuation: Score,
    scoring: S,
) -> Score {
    AffineNW::new(gap_start, gap_continuation, scoring).align(a, b)
}
