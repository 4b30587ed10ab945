//! This module contains the `LinearGap` and `AffineGap` gap models.

use crate::Score;
use serde::{Deserialize, Serialize};

/// Every gap position costs the same fixed penalty.
///
/// `cost` is a non-negative magnitude that is *subtracted* from the score for
/// each symbol aligned to a gap.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearGap {
    pub cost: Score,
}

impl LinearGap {
    pub fn new(cost: Score) -> Self {
        assert!(cost >= 0.0, "Gap cost must be a non-negative penalty.");
        Self { cost }
    }

    /// Total (negative) contribution of a gap of length `len`.
    #[inline]
    pub fn gap_score(&self, len: usize) -> Score {
        -(len as Score) * self.cost
    }
}

impl Default for LinearGap {
    fn default() -> Self {
        Self { cost: 1.0 }
    }
}

/// Opening a gap costs `start`, every additional position costs `continuation`.
///
/// Both values are *added* to the score, so penalties are negative numbers.
/// A gap of length `L > 0` contributes `start + (L-1) * continuation`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AffineGap {
    pub start: Score,
    pub continuation: Score,
}

impl AffineGap {
    pub fn new(start: Score, continuation: Score) -> Self {
        Self {
            start,
            continuation,
        }
    }

    /// Total contribution of a gap of length `len`. Zero for an empty gap.
    #[inline]
    pub fn gap_score(&self, len: usize) -> Score {
        match len {
            0 => 0.0,
            l => self.start + (l - 1) as Score * self.continuation,
        }
    }
}

impl Default for AffineGap {
    fn default() -> Self {
        Self {
            start: -1.0,
            continuation: -0.5,
        }
    }
}
