//! Unit-cost edit distance.

use sm_types::{Score, Scorer};
use std::cmp::min;

/// Levenshtein distance: the minimal number of single-symbol insertions,
/// deletions and substitutions that turn `a` into `b`.
///
/// The cost-only version keeps two rows of the DP matrix.
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut next = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        next[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            next[j + 1] = if ca == cb {
                prev[j]
            } else {
                1 + min(min(prev[j + 1], next[j]), prev[j])
            };
        }
        std::mem::swap(&mut prev, &mut next);
    }
    prev[b.len()]
}

/// `edit_distance` as a `Scorer`. Lower is more similar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Levenshtein;

impl<T: PartialEq> Scorer<T> for Levenshtein {
    fn score(&self, a: &[T], b: &[T]) -> Score {
        edit_distance(a, b) as Score
    }
}
