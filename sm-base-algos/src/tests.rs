//! Randomized checks of all measures against references and each other.

use crate::*;
use sm_test::*;
use sm_types::*;

fn assert_close(x: Score, y: Score, params: &str) {
    assert!((x - y).abs() < 1e-9, "{x} != {y}\n{params}");
}

#[test]
fn edit_distance_matches_reference() {
    test_against_reference(
        "edit_distance",
        |a, b| edit_distance(a, b) as Score,
        |a, b| reference_edit_distance(a, b) as Score,
    );
}

macro_rules! linear_gap_tests {
    ($($name:ident: ($gap:expr, $m:expr, $x:expr),)*) => {
        mod linear_gap {
            use super::*;
            $(
                #[test]
                fn $name() {
                    let s = MatchMismatch::new($m as Score, $x as Score);
                    test_against_reference(
                        "global_align",
                        |a, b| global_align(a, b, $gap as Score, s),
                        |a, b| reference_global(a, b, $gap, $m, $x),
                    );
                    test_against_reference(
                        "local_align",
                        |a, b| local_align(a, b, $gap as Score, s),
                        |a, b| reference_local(a, b, $gap, $m, $x),
                    );
                }
            )*
        }
    };
}

linear_gap_tests! {
    unit: (1, 1, 0),
    plus_minus: (1, 1, -1),
    weighted_match: (1, 2, -1),
    expensive_gap: (3, 2, -1),
    free_gap: (0, 1, -1),
}

// Mismatches must score at least two gap extensions, see `reference_affine`.
macro_rules! affine_gap_tests {
    ($($name:ident: ($start:expr, $cont:expr, $m:expr, $x:expr),)*) => {
        mod affine_gap {
            use super::*;
            $(
                #[test]
                fn $name() {
                    let s = MatchMismatch::new($m as Score, $x as Score);
                    test_against_reference(
                        "affine_align",
                        |a, b| affine_align(a, b, $start as Score, $cont as Score, s),
                        |a, b| reference_affine(a, b, $start, $cont, $m, $x),
                    );
                }
            )*
        }
    };
}

affine_gap_tests! {
    plus_minus: (-3, -1, 1, -1),
    weighted_match: (-2, -1, 2, -1),
    free_mismatch: (-4, -1, 1, 0),
    long_gaps: (-5, -2, 3, -2),
}

/// Global affine alignment with equal open and extend scores is a linear gap
/// alignment.
#[test]
fn affine_degenerates_to_linear() {
    let s = MatchMismatch::new(2.0, -1.0);
    for (a, b, params) in all_pairs() {
        assert_close(
            affine_align(&a, &b, -1.0, -1.0, s),
            global_align(&a, &b, 1.0, s),
            &params,
        );
    }
}

#[test]
fn symmetry() {
    let s = MatchMismatch::new(1.0, -1.0);
    for (a, b, params) in all_pairs() {
        assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a), "{params}");
        assert_eq!(global_align(&a, &b, 1.0, s), global_align(&b, &a, 1.0, s));
        assert_eq!(local_align(&a, &b, 1.0, s), local_align(&b, &a, 1.0, s));
        assert_close(
            affine_align(&a, &b, -2.0, -0.5, s),
            affine_align(&b, &a, -2.0, -0.5, s),
            &params,
        );
        assert_close(jaro(&a, &b), jaro(&b, &a), &params);
        assert_close(jaro_winkler(&a, &b, 0.1), jaro_winkler(&b, &a, 0.1), &params);
    }
}

#[test]
fn identity() {
    for (a, _, params) in all_pairs() {
        assert_eq!(edit_distance(&a, &a), 0, "{params}");
        assert_eq!(NW::default().align(&a, &a), a.len() as Score, "{params}");
        assert_eq!(SW::default().align(&a, &a), a.len() as Score, "{params}");
        assert_close(jaro(&a, &a), 1.0, &params);
        assert_close(jaro_winkler(&a, &a, 0.1), 1.0, &params);
    }
}

#[test]
fn local_not_below_global() {
    for (a, b, params) in all_pairs() {
        let s = MatchMismatch::new(1.0, -1.0);
        assert!(
            local_align(&a, &b, 1.0, s) >= global_align(&a, &b, 1.0, s),
            "{params}"
        );
    }
}

#[test]
fn jaro_winkler_bounds() {
    for (a, b, params) in all_pairs() {
        let j = jaro(&a, &b);
        let jw = jaro_winkler(&a, &b, 0.1);
        assert!((0.0..=1.0).contains(&j), "{j} {params}");
        assert!((0.0..=1.0 + 1e-12).contains(&jw), "{jw} {params}");
        assert!(jw >= j, "{params}");
    }
}

#[test]
fn distances_bound_each_other() {
    for (a, b, params) in all_pairs() {
        let d = edit_distance(&a, &b);
        assert!(d >= a.len().abs_diff(b.len()), "{params}");
        assert!(d <= a.len().max(b.len()), "{params}");
        if a.len() == b.len() {
            let h = hamming_distance(&a, &b).unwrap();
            assert!(d <= h, "{params}");
        }
        // Free gaps and unit matches give the longest common subsequence.
        let lcs = global_align(&a, &b, 0.0, MatchMismatch::default());
        assert!(lcs <= a.len().min(b.len()) as Score, "{params}");
    }
}

#[test]
fn set_measures_bounds() {
    let t = Tokenizer::Qgram(2);
    for (a, b, params) in all_pairs() {
        let (a, b) = (to_string(&a), to_string(&b));
        let ta = t.tokenize(&a).unwrap();
        let tb = t.tokenize(&b).unwrap();
        let (o, j, c) = (
            overlap_coefficient(&ta, &tb),
            jaccard(&ta, &tb),
            cosine(&ta, &tb),
        );
        for v in [o, j, c] {
            assert!((0.0..=1.0 + 1e-12).contains(&v), "{v} {params}");
        }
        assert!(j <= c + 1e-12 && c <= o + 1e-12, "{j} {c} {o} {params}");
        assert_eq!(jaccard(&ta, &tb), jaccard(&tb, &ta));
    }
}

#[test]
fn monge_elkan_with_self_is_max() {
    let t = Tokenizer::Whitespace;
    for (a, _, params) in all_pairs() {
        let tokens = t.tokenize(&to_string(&a)).unwrap();
        if tokens.is_empty() {
            continue;
        }
        let s = monge_elkan::<u8, _, _>(
            &tokens.iter().map(|t| t.as_bytes()).collect::<Vec<_>>(),
            &tokens.iter().map(|t| t.as_bytes()).collect::<Vec<_>>(),
            JaroWinkler::default(),
        )
        .unwrap();
        assert_close(s, 1.0, &params);
    }
}
