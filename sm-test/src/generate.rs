//! Random pairs of related sequences.

use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorModel {
    /// Independent substitutions, insertions and deletions.
    #[default]
    Uniform,
    /// A single gap (insertion or deletion) of size e*n.
    Gap,
    /// Delete a region of size e*n and insert it elsewhere.
    Move,
}

/// Symbols of generated sequences. Mixes letters with a space so that the
/// token measures see more than one token.
pub const ALPH: [u8; 5] = *b"ACGT ";

enum Mutation {
    // Replace char at pos.
    Substitution(usize, u8),
    // Insert char before pos.
    Insertion(usize, u8),
    // Delete char at pos.
    Deletion(usize),
}

fn rand_char(rng: &mut impl Rng) -> u8 {
    ALPH[rng.gen_range(0..ALPH.len())]
}

fn random_mutation(len_b: usize, rng: &mut impl Rng) -> Mutation {
    // For length 0 sequences, only generate insertions.
    match if len_b == 0 {
        1
    } else {
        rng.gen_range(0..3usize)
    } {
        0 => Mutation::Substitution(rng.gen_range(0..len_b), rand_char(rng)),
        1 => Mutation::Insertion(rng.gen_range(0..len_b + 1), rand_char(rng)),
        2 => Mutation::Deletion(rng.gen_range(0..len_b)),
        _ => unreachable!(),
    }
}

/// A random sequence of length `n` and a copy of it with `ceil(e*n)` edits.
pub fn generate_pair(
    n: usize,
    e: f32,
    error_model: ErrorModel,
    rng: &mut impl Rng,
) -> (Vec<u8>, Vec<u8>) {
    let a = (0..n).map(|_| rand_char(rng)).collect_vec();
    let num_mutations = ((e * n as f32).ceil() as usize).min(n);
    let mut b = a.clone();
    match error_model {
        ErrorModel::Uniform => {
            for _ in 0..num_mutations {
                match random_mutation(b.len(), rng) {
                    Mutation::Substitution(i, c) => b[i] = c,
                    Mutation::Insertion(i, c) => b.insert(i, c),
                    Mutation::Deletion(i) => {
                        b.remove(i);
                    }
                }
            }
        }
        ErrorModel::Gap => {
            if rng.gen_bool(0.5) {
                let start = rng.gen_range(0..=b.len() - num_mutations);
                b.drain(start..start + num_mutations);
            } else {
                let start = rng.gen_range(0..=b.len());
                let text = (0..num_mutations).map(|_| rand_char(rng)).collect_vec();
                b.splice(start..start, text);
            }
        }
        ErrorModel::Move => {
            let start = rng.gen_range(0..=b.len() - num_mutations);
            let piece = b.drain(start..start + num_mutations).collect_vec();
            let start = rng.gen_range(0..=b.len());
            b.splice(start..start, piece);
        }
    }
    (a, b)
}

/// Deterministic pair for the given seed.
pub fn generate_model(n: usize, e: f32, error_model: ErrorModel, seed: u64) -> (Vec<u8>, Vec<u8>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_pair(n, e, error_model, &mut rng)
}
