//! Shared types for the seqmatch measures: scores, scoring functions, gap
//! models and the error type.

pub mod cost_model;
pub mod error;

// Re-export types for convenience of `use sm_types::*;`.
pub use cost_model::*;
pub use error::*;

use serde::{Deserialize, Serialize};

/// Every measure reports its result as a floating point score.
pub type Score = f64;

/// Compares two symbols and returns how well they match.
///
/// Called once per DP cell, so implementations should be cheap and must be
/// total over the symbol domain. Any `Fn(&T, &T) -> Score` closure is a
/// scoring function.
pub trait ScoringFunction<T: ?Sized> {
    fn score(&self, a: &T, b: &T) -> Score;
}

impl<T: ?Sized, F> ScoringFunction<T> for F
where
    F: Fn(&T, &T) -> Score,
{
    #[inline]
    fn score(&self, a: &T, b: &T) -> Score {
        self(a, b)
    }
}

/// Binary identity scoring: `matches` for equal symbols, `mismatch` otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchMismatch {
    pub matches: Score,
    pub mismatch: Score,
}

impl MatchMismatch {
    pub fn new(matches: Score, mismatch: Score) -> Self {
        Self { matches, mismatch }
    }
}

impl Default for MatchMismatch {
    fn default() -> Self {
        Self {
            matches: 1.0,
            mismatch: 0.0,
        }
    }
}

impl<T: PartialEq + ?Sized> ScoringFunction<T> for MatchMismatch {
    #[inline]
    fn score(&self, a: &T, b: &T) -> Score {
        if a == b {
            self.matches
        } else {
            self.mismatch
        }
    }
}

/// A measure over two whole sequences.
///
/// Implemented by every pairwise measure so that they can be injected into
/// the aggregating measures and dispatched uniformly.
pub trait Scorer<T> {
    fn score(&self, a: &[T], b: &[T]) -> Score;
}

impl<T, S: Scorer<T> + ?Sized> Scorer<T> for &S {
    #[inline]
    fn score(&self, a: &[T], b: &[T]) -> Score {
        (**self).score(a, b)
    }
}

impl<T, S: Scorer<T> + ?Sized> Scorer<T> for Box<S> {
    #[inline]
    fn score(&self, a: &[T], b: &[T]) -> Score {
        (**self).score(a, b)
    }
}
