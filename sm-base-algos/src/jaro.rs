//! Jaro and Jaro-Winkler similarity.
//!
//! Both are in `[0, 1]`. Two empty sequences are identical (`1.0`); when
//! exactly one is empty, nothing can match (`0.0`).

use serde::{Deserialize, Serialize};
use sm_types::{Score, Scorer};
use smallvec::SmallVec;

/// Jaro-Winkler only rewards this many leading symbols.
pub const MAX_PREFIX: usize = 4;

/// Flags for which positions took part in a match. Names and short fields fit
/// inline.
type Flags = SmallVec<[bool; 32]>;

/// Jaro similarity of `a` and `b`.
pub fn jaro<T: PartialEq>(a: &[T], b: &[T]) -> Score {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let window = (a.len().max(b.len()) / 2).saturating_sub(1);
    let mut a_matched: Flags = SmallVec::from_elem(false, a.len());
    let mut b_matched: Flags = SmallVec::from_elem(false, b.len());

    // Each symbol of `a` takes the first free equal symbol of `b` in the window.
    let mut matches = 0usize;
    for (i, ca) in a.iter().enumerate() {
        let lo = i.saturating_sub(window);
        let hi = (i + window + 1).min(b.len());
        for j in lo..hi {
            if !b_matched[j] && b[j] == *ca {
                a_matched[i] = true;
                b_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }
    if matches == 0 {
        return 0.0;
    }

    // Compare the matched symbols of both sides in order.
    let a_seq = a.iter().zip(&a_matched).filter(|&(_, &m)| m).map(|(c, _)| c);
    let b_seq = b.iter().zip(&b_matched).filter(|&(_, &m)| m).map(|(c, _)| c);
    let mismatched = a_seq.zip(b_seq).filter(|(x, y)| x != y).count();
    let t = (mismatched / 2) as Score;

    let m = matches as Score;
    (m / a.len() as Score + m / b.len() as Score + (m - t) / m) / 3.0
}

/// Length of the common prefix of `a` and `b`, capped at `MAX_PREFIX`.
pub fn common_prefix<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.iter()
        .zip(b)
        .take(MAX_PREFIX)
        .take_while(|(x, y)| x == y)
        .count()
}

/// Jaro-Winkler similarity: Jaro boosted by the length of the common prefix.
///
/// `prefix_weight` scales the boost; values above `0.25` can push the result
/// above 1.
pub fn jaro_winkler<T: PartialEq>(a: &[T], b: &[T], prefix_weight: Score) -> Score {
    let j = jaro(a, b);
    let p = common_prefix(a, b) as Score;
    j + p * prefix_weight * (1.0 - j)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Jaro;

impl<T: PartialEq> Scorer<T> for Jaro {
    fn score(&self, a: &[T], b: &[T]) -> Score {
        jaro(a, b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct JaroWinkler {
    pub prefix_weight: Score,
}

impl Default for JaroWinkler {
    fn default() -> Self {
        Self { prefix_weight: 0.1 }
    }
}

impl<T: PartialEq> Scorer<T> for JaroWinkler {
    fn score(&self, a: &[T], b: &[T]) -> Score {
        jaro_winkler(a, b, self.prefix_weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(x: Score, y: Score) {
        assert!((x - y).abs() < 1e-12, "{x} != {y}");
    }

    fn j(a: &str, b: &str) -> Score {
        jaro(a.as_bytes(), b.as_bytes())
    }

    fn jw(a: &str, b: &str) -> Score {
        JaroWinkler::default().score(a.as_bytes(), b.as_bytes())
    }

    #[test]
    fn wikipedia() {
        assert_close(j("MARTHA", "MARHTA"), 0.9444444444444445);
        assert_close(j("DWAYNE", "DUANE"), 0.8222222222222223);
        assert_close(j("DIXON", "DICKSONX"), 0.7666666666666666);
        assert_close(jw("MARTHA", "MARHTA"), 0.9611111111111111);
        assert_close(jw("DWAYNE", "DUANE"), 0.84);
        assert_close(jw("DIXON", "DICKSONX"), 0.8133333333333332);
    }

    #[test]
    fn empty() {
        assert_eq!(j("", ""), 1.0);
        assert_eq!(j("a", ""), 0.0);
        assert_eq!(j("", "a"), 0.0);
        assert_eq!(jw("", ""), 1.0);
        assert_eq!(jw("", "abc"), 0.0);
    }

    #[test]
    fn identity() {
        for s in ["a", "MARTHA", "abcabcabc"] {
            assert_close(j(s, s), 1.0);
            assert_close(jw(s, s), 1.0);
        }
    }

    #[test]
    fn no_matches_outside_window() {
        // The window is 0 for two symbols, so the swap matches nothing.
        assert_eq!(j("ab", "ba"), 0.0);
        assert_eq!(j("a", "b"), 0.0);
    }

    #[test]
    fn prefix_is_capped() {
        assert_eq!(common_prefix(b"abcdefgh", b"abcdefgx"), 4);
        assert_eq!(common_prefix(b"ab", b"ac"), 1);
        assert_eq!(common_prefix(b"", b"ac"), 0);
    }

    #[test]
    fn winkler_boost() {
        assert_close(jw("ab", "ac"), 0.7);
        assert!(jw("DWAYNE", "DUANE") >= j("DWAYNE", "DUANE"));
        assert_close(
            jaro_winkler(b"MARTHA", b"MARHTA", 0.0),
            j("MARTHA", "MARHTA"),
        );
    }
}
