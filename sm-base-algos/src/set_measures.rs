//! Token-set measures. Duplicate tokens are collapsed before comparing.
//!
//! All three are in `[0, 1]`; two empty inputs are identical and an empty
//! input against a non-empty one scores 0.

use rustc_hash::FxHashSet;
use sm_types::Score;
use std::hash::Hash;

struct Counts {
    left: usize,
    right: usize,
    common: usize,
}

fn counts<T: Hash + Eq>(a: &[T], b: &[T]) -> Counts {
    let x: FxHashSet<&T> = a.iter().collect();
    let y: FxHashSet<&T> = b.iter().collect();
    Counts {
        left: x.len(),
        right: y.len(),
        common: x.intersection(&y).count(),
    }
}

/// `|X ∩ Y| / min(|X|, |Y|)`.
pub fn overlap_coefficient<T: Hash + Eq>(a: &[T], b: &[T]) -> Score {
    let c = counts(a, b);
    if c.left == 0 && c.right == 0 {
        return 1.0;
    }
    if c.left == 0 || c.right == 0 {
        return 0.0;
    }
    c.common as Score / c.left.min(c.right) as Score
}

/// `|X ∩ Y| / |X ∪ Y|`.
pub fn jaccard<T: Hash + Eq>(a: &[T], b: &[T]) -> Score {
    let c = counts(a, b);
    let union = c.left + c.right - c.common;
    if union == 0 {
        return 1.0;
    }
    c.common as Score / union as Score
}

/// Ochiai cosine: `|X ∩ Y| / sqrt(|X| |Y|)`.
pub fn cosine<T: Hash + Eq>(a: &[T], b: &[T]) -> Score {
    let c = counts(a, b);
    if c.left == 0 && c.right == 0 {
        return 1.0;
    }
    if c.left == 0 || c.right == 0 {
        return 0.0;
    }
    c.common as Score / ((c.left as Score).sqrt() * (c.right as Score).sqrt())
}
