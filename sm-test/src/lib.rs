//! Test inputs and reference implementations for the measures.

pub mod generate;

use bio::alignment::pairwise::Aligner;
use itertools::iproduct;
use rand::{seq::IteratorRandom, thread_rng, Rng};
use sm_types::Score;

pub use generate::{generate_model, ErrorModel};

/// Hand-picked pairs, including names, records and DNA.
pub fn test_sequences() -> Vec<(&'static [u8], &'static [u8])> {
    [
        ("", ""),
        ("", "abc"),
        ("MARTHA", "MARHTA"),
        ("DWAYNE", "DUANE"),
        ("DIXON", "DICKSONX"),
        ("kitten", "sitting"),
        ("Niall", "Njall"),
        ("data science", "science data"),
        (
            "Comput. Sci. and Eng. Dept., University of California, San Diego",
            "Department of Computer Science, Univ. Calif., San Diego",
        ),
        ("TTGGGTCAATCAGCCAGTTTTTA", "TTTGAGTGGGTCATCACCGATTTTAT"),
        ("ACTGACCAGT", "CCGACAGGA"),
        ("AGTTTTAT", "ACCGATTTTTA"),
        ("CTCTCTTCTCTCTCTA", "CCTCTCTCTCTCCTCTC"),
        ("AGTGGGTTGCCTTCATTCCG", "AGTGGTGTCTTCAGGCCTTCATTCCG"),
        ("GCACGTCGCCCCCCGCCCGCG", "GCCCGCCCGCCCGCCCCCGCCCCC"),
    ]
    .into_iter()
    .map(|(a, b)| (a.as_bytes(), b.as_bytes()))
    .collect()
}

/// Use every length and error rate with a constant seed instead of sampling.
const FIXED: bool = false;

const LENGTHS: [usize; 35] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 30, 40, 50, 60, 70,
    80, 90, 100, 150, 200, 255, 256, 257, 300,
];
const ERROR_RATES: [f32; 13] = [
    0.0, 0.01, 0.02, 0.03, 0.05, 0.10, 0.20, 0.30, 0.40, 0.50, 0.60, 0.70, 1.0,
];
const MODELS: [ErrorModel; 3] = [ErrorModel::Uniform, ErrorModel::Gap, ErrorModel::Move];

/// Random pairs over a range of lengths, error rates and error models,
/// together with the parameters that produced them.
pub fn gen_seqs() -> impl Iterator<Item = ((Vec<u8>, Vec<u8>), (usize, f32, ErrorModel, u64))> {
    let rng = &mut thread_rng();
    let (ns, es, seed) = if FIXED {
        (LENGTHS.to_vec(), ERROR_RATES.to_vec(), 31415)
    } else {
        (
            LENGTHS.into_iter().choose_multiple(rng, LENGTHS.len() / 4),
            ERROR_RATES.into_iter().choose_multiple(rng, ERROR_RATES.len() / 4),
            rng.gen(),
        )
    };
    iproduct!(ns, es, MODELS).map(move |(n, e, error_model)| {
        let pair = generate_model(n, e, error_model, seed);
        (pair, (n, e, error_model, seed))
    })
}

/// Every hardcoded and generated pair, with a description for failure messages.
pub fn all_pairs() -> impl Iterator<Item = (Vec<u8>, Vec<u8>, String)> {
    test_sequences()
        .into_iter()
        .map(|(a, b)| (a.to_vec(), b.to_vec(), "hardcoded test_sequences".to_owned()))
        .chain(gen_seqs().map(|((a, b), (n, e, error_model, seed))| {
            (
                a,
                b,
                format!("seed {seed:>10} n {n:>5} e {e:>.2} error_model {error_model:?}"),
            )
        }))
}

pub fn to_string(s: &[u8]) -> String {
    String::from_utf8_lossy(s).into_owned()
}

/// Levenshtein distance by `triple_accel`, checked against `bio`.
pub fn reference_edit_distance(a: &[u8], b: &[u8]) -> usize {
    let d = triple_accel::levenshtein_exp(a, b);
    assert_eq!(d, bio::alignment::distance::levenshtein(a, b));
    d as usize
}

/// Global alignment score with a linear gap by `bio`, for integer scores.
pub fn reference_global(a: &[u8], b: &[u8], gap_cost: i32, matches: i32, mismatch: i32) -> Score {
    if a.is_empty() || b.is_empty() {
        return -((a.len() + b.len()) as i32 * gap_cost) as Score;
    }
    let score = |x: u8, y: u8| if x == y { matches } else { mismatch };
    let mut aligner = Aligner::new(0, -gap_cost, score);
    aligner.global(a, b).score as Score
}

/// Local alignment score with a linear gap by `bio`, for integer scores.
pub fn reference_local(a: &[u8], b: &[u8], gap_cost: i32, matches: i32, mismatch: i32) -> Score {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let score = |x: u8, y: u8| if x == y { matches } else { mismatch };
    let mut aligner = Aligner::new(0, -gap_cost, score);
    aligner.local(a, b).score as Score
}

/// Global alignment score with an affine gap by `bio`, for integer scores.
///
/// A gap of length `L` scores `start + (L-1) * cont`. `bio` may switch
/// directly between gaps in `a` and `b` while `affine_align` may not, so
/// both agree only when such a switch never wins: `start <= cont` and
/// `mismatch >= 2 * cont`.
pub fn reference_affine(
    a: &[u8],
    b: &[u8],
    start: i32,
    cont: i32,
    matches: i32,
    mismatch: i32,
) -> Score {
    if a.is_empty() || b.is_empty() {
        let len = (a.len() + b.len()) as i32;
        return if len == 0 { 0.0 } else { (start + (len - 1) * cont) as Score };
    }
    let score = |x: u8, y: u8| if x == y { matches } else { mismatch };
    let mut aligner = Aligner::new(start - cont, cont, score);
    aligner.global(a, b).score as Score
}

/// Check `f` against `reference` on all test pairs.
pub fn test_against_reference(
    name: &str,
    f: impl Fn(&[u8], &[u8]) -> Score,
    reference: impl Fn(&[u8], &[u8]) -> Score,
) {
    for (a, b, params) in all_pairs() {
        let expected = reference(&a, &b);
        let got = f(&a, &b);
        assert_eq!(
            got,
            expected,
            "\n{name} {params}\nlet a = \"{}\".as_bytes();\nlet b = \"{}\".as_bytes();",
            to_string(&a),
            to_string(&b),
        );
    }
}
