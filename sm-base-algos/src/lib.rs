//! String similarity and alignment measures.
//!
//! The alignment measures (`nw`, `sw`, `nw::affine`) are generic over the
//! symbol type and the substitution scoring, and only compute scores: every DP
//! keeps two fronts of the matrix at a time. `measure` wraps all of them
//! behind a single string-level entry point.

pub mod cli;
pub mod edit_distance;
pub mod hamming;
pub mod jaro;
pub mod measure;
pub mod monge_elkan;
pub mod nw;
pub mod set_measures;
pub mod sw;
pub mod tokenize;

#[cfg(test)]
mod tests;

pub use edit_distance::{edit_distance, Levenshtein};
pub use hamming::hamming_distance;
pub use jaro::{jaro, jaro_winkler, Jaro, JaroWinkler};
pub use measure::{Measure, MeasureParams};
pub use monge_elkan::{monge_elkan, MongeElkan};
pub use nw::{
    affine::{affine_align, AffineNW},
    global_align, NW,
};
pub use set_measures::{cosine, jaccard, overlap_coefficient};
pub use sw::{local_align, SW};
pub use tokenize::Tokenizer;
